//! Document output placement and writing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use subform_core::folder_for;
use subform_model::Subform;
use tracing::debug;

use crate::atomic::write_atomic;
use crate::error::Result;
use crate::instruction::render_instruction;
use crate::layout::{Document, LayoutEngine};
use crate::record::safe_file_stem;
use crate::reference::render_reference;

/// Presentation style of a rendered subform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentStyle {
    /// Field-by-field reference listing.
    Reference,
    /// Step-by-step authoring instructions.
    Instruction,
}

impl DocumentStyle {
    pub const ALL: [DocumentStyle; 2] = [DocumentStyle::Reference, DocumentStyle::Instruction];

    pub fn render(self, subform: &Subform) -> Document {
        match self {
            DocumentStyle::Reference => render_reference(subform),
            DocumentStyle::Instruction => render_instruction(subform),
        }
    }

    /// Output root used when none is configured.
    pub fn default_root(self) -> &'static str {
        match self {
            DocumentStyle::Reference => "subforms_pdf",
            DocumentStyle::Instruction => "subforms_pdf_ai",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStyle::Reference => "reference",
            DocumentStyle::Instruction => "instruction",
        }
    }
}

/// A document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub style: DocumentStyle,
    pub subform: String,
    pub folder: String,
    pub path: PathBuf,
}

/// Output folder of a subform, classified from its file stem so path
/// separators in the name never reach the folder label.
pub fn document_folder(name: &str) -> String {
    folder_for(&safe_file_stem(name))
}

/// Folder and full path of a subform's document under `root`.
pub fn document_path(root: &Path, name: &str, extension: &str) -> (String, PathBuf) {
    let stem = safe_file_stem(name);
    let folder = folder_for(&stem);
    let path = root.join(&folder).join(format!("{stem}.{extension}"));
    (folder, path)
}

/// Render, lay out, and write one subform in one style.
pub fn write_document(
    root: &Path,
    style: DocumentStyle,
    subform: &Subform,
    engine: &dyn LayoutEngine,
) -> Result<WrittenDocument> {
    let document = style.render(subform);
    let bytes = engine.layout(&document)?;
    let (folder, path) = document_path(root, subform.name(), engine.extension());
    write_atomic(&path, &bytes)?;
    debug!(
        style = style.as_str(),
        subform = %subform.name(),
        folder = %folder,
        path = %path.display(),
        "wrote document"
    );
    Ok(WrittenDocument {
        style,
        subform: subform.name().to_string(),
        folder,
        path,
    })
}

/// Documents per folder, sorted by folder name.
pub fn folder_counts<'a, I>(documents: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a WrittenDocument>,
{
    documents
        .into_iter()
        .fold(BTreeMap::new(), |mut counts, document| {
            *counts.entry(document.folder.as_str()).or_insert(0) += 1;
            counts
        })
}
