use std::path::PathBuf;

use anyhow::Result;
use tracing::info_span;

use subform_cli::pipeline::{
    RenderSettings, ingest_checklist, load_records, render_documents, write_records,
};
use subform_cli::types::{GenerateResult, RenderResult};
use subform_report::DocumentStyle;

use crate::cli::{DocumentArgs, GenerateArgs, RenderArgs, RunArgs};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", input = %args.input.display());
    let _guard = span.enter();
    let set = ingest_checklist(&args.input, &args.grouping.pipeline_options())?;
    write_records(&set, &args.input, &args.output_dir, args.only.as_deref())
}

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let span = info_span!("render", subforms_dir = %args.subforms_dir.display());
    let _guard = span.enter();
    let subforms = load_records(&args.subforms_dir)?;
    render_documents(
        &subforms,
        &render_settings(&args.documents),
        args.only.as_deref(),
    )
}

pub fn run_all(args: &RunArgs) -> Result<(GenerateResult, RenderResult)> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();
    let set = ingest_checklist(&args.input, &args.grouping.pipeline_options())?;
    let generated = write_records(&set, &args.input, &args.output_dir, args.only.as_deref())?;
    let rendered = render_documents(
        &set.subforms,
        &render_settings(&args.documents),
        args.only.as_deref(),
    )?;
    Ok((generated, rendered))
}

fn render_settings(args: &DocumentArgs) -> RenderSettings {
    let root = |dir: &Option<PathBuf>, style: DocumentStyle| {
        dir.clone()
            .unwrap_or_else(|| PathBuf::from(style.default_root()))
    };
    RenderSettings {
        styles: args.styles(),
        reference_root: root(&args.reference_dir, DocumentStyle::Reference),
        instruction_root: root(&args.instruction_dir, DocumentStyle::Instruction),
        page_width: args.page_width,
        ..RenderSettings::default()
    }
}
