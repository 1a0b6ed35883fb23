//! Command stages: ingest, record writing, and document rendering.

use std::collections::HashMap;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use subform_core::{SubformSet, build_subforms};
use subform_ingest::read_checklist;
use subform_model::{PipelineOptions, Subform};
use subform_report::{
    DocumentStyle, TextLayout, document_folder, load_subform_records, safe_file_stem,
    write_document, write_subform_record,
};

use crate::types::{GenerateResult, RecordSummary, RenderResult};

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Subforms picked by an optional name selector.
#[derive(Debug)]
pub struct Selection<'a> {
    pub subforms: Vec<&'a Subform>,
    /// Selector that matched nothing.
    pub missing: Option<String>,
}

/// Pick every subform, or only the one named `only`.
pub fn select_subforms<'a>(subforms: &'a [Subform], only: Option<&str>) -> Selection<'a> {
    let Some(name) = only else {
        return Selection {
            subforms: subforms.iter().collect(),
            missing: None,
        };
    };
    let selected: Vec<&Subform> = subforms
        .iter()
        .filter(|subform| subform.name() == name)
        .collect();
    let missing = if selected.is_empty() {
        warn!(subform = %name, "selected subform not found");
        Some(name.to_string())
    } else {
        None
    };
    Selection {
        subforms: selected,
        missing,
    }
}

/// Read the checklist and group it into subforms.
pub fn ingest_checklist(input: &Path, options: &PipelineOptions) -> Result<SubformSet> {
    let start = Instant::now();
    let rows = read_checklist(input)
        .with_context(|| format!("read checklist {}", input.display()))?;
    let set = build_subforms(&rows, options);
    info!(
        input = %input.display(),
        rows = set.rows_read,
        skipped = set.rows_skipped,
        subforms = set.len(),
        duration_ms = start.elapsed().as_millis(),
        "checklist ingested"
    );
    Ok(set)
}

/// Write one JSON record per selected subform.
///
/// Names that share a file stem replace each other's record; the replaced
/// names are reported in [`GenerateResult::overwritten`].
pub fn write_records(
    set: &SubformSet,
    input: &Path,
    output_dir: &Path,
    only: Option<&str>,
) -> Result<GenerateResult> {
    let selection = select_subforms(&set.subforms, only);
    let mut records: Vec<RecordSummary> = Vec::with_capacity(selection.subforms.len());
    let mut stems: HashMap<String, usize> = HashMap::new();
    let mut overwritten = Vec::new();
    for subform in &selection.subforms {
        let path = write_subform_record(output_dir, subform)
            .with_context(|| format!("write record for {}", subform.name()))?;
        debug!(subform = %subform.name(), path = %path.display(), "wrote record");
        let summary = RecordSummary {
            name: subform.name().to_string(),
            folder: document_folder(subform.name()),
            fields: subform.field_count(),
            path,
        };
        match stems.get(&safe_file_stem(subform.name())) {
            Some(&index) => {
                let replaced = std::mem::replace(&mut records[index], summary);
                warn!(
                    subform = %subform.name(),
                    replaced = %replaced.name,
                    path = %records[index].path.display(),
                    "subform record overwritten by a name with the same file stem"
                );
                overwritten.push(replaced.name);
            }
            None => {
                stems.insert(safe_file_stem(subform.name()), records.len());
                records.push(summary);
            }
        }
    }
    info!(
        output_dir = %output_dir.display(),
        records = records.len(),
        "records written"
    );
    Ok(GenerateResult {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        rows_read: set.rows_read,
        rows_skipped: set.rows_skipped,
        records,
        overwritten,
        missing: selection.missing,
    })
}

/// Where and how documents are rendered.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub styles: Vec<DocumentStyle>,
    pub reference_root: PathBuf,
    pub instruction_root: PathBuf,
    pub page_width: u16,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            styles: DocumentStyle::ALL.to_vec(),
            reference_root: PathBuf::from(DocumentStyle::Reference.default_root()),
            instruction_root: PathBuf::from(DocumentStyle::Instruction.default_root()),
            page_width: subform_report::DEFAULT_PAGE_WIDTH,
            show_progress: io::stderr().is_terminal(),
        }
    }
}

impl RenderSettings {
    pub fn root_for(&self, style: DocumentStyle) -> &Path {
        match style {
            DocumentStyle::Reference => &self.reference_root,
            DocumentStyle::Instruction => &self.instruction_root,
        }
    }
}

/// Load every record from `dir`.
pub fn load_records(dir: &Path) -> Result<Vec<Subform>> {
    let subforms = load_subform_records(dir)
        .with_context(|| format!("load subform records from {}", dir.display()))?;
    info!(dir = %dir.display(), records = subforms.len(), "records loaded");
    Ok(subforms)
}

/// Render the selected subforms in every configured style.
pub fn render_documents(
    subforms: &[Subform],
    settings: &RenderSettings,
    only: Option<&str>,
) -> Result<RenderResult> {
    let start = Instant::now();
    let selection = select_subforms(subforms, only);
    let layout = TextLayout::new(settings.page_width);
    let total = selection.subforms.len() * settings.styles.len();
    let progress = progress_bar(total as u64, settings.show_progress);

    let mut documents = Vec::with_capacity(total);
    for &style in &settings.styles {
        let root = settings.root_for(style);
        progress.set_message(style.as_str());
        for subform in &selection.subforms {
            let document = write_document(root, style, subform, &layout).with_context(|| {
                format!("write {} document for {}", style.as_str(), subform.name())
            })?;
            documents.push(document);
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    info!(
        documents = documents.len(),
        duration_ms = start.elapsed().as_millis(),
        "documents rendered"
    );
    Ok(RenderResult {
        styles: settings.styles.clone(),
        subforms: selection.subforms.len(),
        documents,
        missing: selection.missing,
    })
}

fn progress_bar(length: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(length);
    bar.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}
