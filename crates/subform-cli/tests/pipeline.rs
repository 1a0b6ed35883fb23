//! End-to-end tests: checklist CSV to records to documents.

use std::fs;
use std::path::Path;

use subform_cli::pipeline::{
    RenderSettings, ingest_checklist, load_records, render_documents, write_records,
};
use subform_core::SubformSet;
use subform_model::{Field, FieldOrder, PipelineOptions, Subform};
use subform_report::DocumentStyle;
use tempfile::TempDir;

const CHECKLIST: &str = "\
NAMING CONVENTION,Inspection Task,Frequency,JB Contractor Assignment,JB Task Assignment,Description,Measurement Type,Response Type
2.8-AC-Annual,2.8-AC-Annual-2,Annual,ACME,Tech,Check belts,YesNo,Specific List
2.8-AC-Annual,2.8-AC-Annual-1,Annual,ACME,Tech,Check filters,,
,orphan,Annual,,,Nothing,,
-EX. PANEL 432-Quarterly,4.6-EX. PANEL 432-Quarterly-1,Quarterly,Volt Co,Electrician,Torque lugs,,
4.6-EX. PANEL 432-Quarterly,4.6-EX. PANEL 432-Quarterly-2,Quarterly,Spark Inc,Electrician,Thermal scan,,
Misc,Notes,Monthly,,,Walkthrough,,
";

fn write_checklist(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("checklist.csv");
    fs::write(&path, CHECKLIST).expect("write checklist");
    path
}

fn settings(root: &Path) -> RenderSettings {
    RenderSettings {
        styles: DocumentStyle::ALL.to_vec(),
        reference_root: root.join("subforms_pdf"),
        instruction_root: root.join("subforms_pdf_ai"),
        page_width: 72,
        show_progress: false,
    }
}

#[test]
fn generate_then_render_from_records() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_checklist(dir.path());
    let records_dir = dir.path().join("subforms");

    let options = PipelineOptions::default().with_ordering(FieldOrder::TaskSuffix);
    let set = ingest_checklist(&input, &options).expect("ingest");
    let generated = write_records(&set, &input, &records_dir, None).expect("write records");

    assert_eq!(generated.rows_read, 6);
    assert_eq!(generated.rows_skipped, 1);
    let names: Vec<&str> = generated.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["2.8-AC-Annual", "4.6-EX. PANEL 432-Quarterly", "Misc"]
    );
    assert_eq!(generated.field_total(), 5);
    assert!(records_dir.join("4.6-EX. PANEL 432-Quarterly.json").is_file());

    let loaded = load_records(&records_dir).expect("load records");
    assert_eq!(loaded, set.subforms);

    let rendered =
        render_documents(&loaded, &settings(dir.path()), None).expect("render documents");
    assert_eq!(rendered.documents.len(), 6);
    assert!(
        dir.path()
            .join("subforms_pdf/4/4.6-EX. PANEL 432-Quarterly.txt")
            .is_file()
    );
    let instruction =
        fs::read_to_string(dir.path().join("subforms_pdf_ai/2/2.8-AC-Annual.txt"))
            .expect("read instruction");
    let first = instruction.find("Check filters").expect("first field");
    let second = instruction.find("Check belts").expect("second field");
    assert!(first < second);
    assert!(instruction.contains("Single Select"));
}

#[test]
fn only_selects_a_single_subform() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_checklist(dir.path());
    let set = ingest_checklist(&input, &PipelineOptions::default()).expect("ingest");
    let records_dir = dir.path().join("subforms");

    let generated =
        write_records(&set, &input, &records_dir, Some("Misc")).expect("write records");
    assert_eq!(generated.records.len(), 1);
    assert!(generated.missing.is_none());

    let mut settings = settings(dir.path());
    settings.styles = vec![DocumentStyle::Reference];
    let rendered = render_documents(&set.subforms, &settings, Some("Misc")).expect("render");
    assert_eq!(rendered.documents.len(), 1);
    assert_eq!(rendered.documents[0].folder, "other");
    assert!(!dir.path().join("subforms_pdf_ai").exists());
}

#[test]
fn missing_selection_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_checklist(dir.path());
    let set = ingest_checklist(&input, &PipelineOptions::default()).expect("ingest");
    let records_dir = dir.path().join("subforms");

    let generated =
        write_records(&set, &input, &records_dir, Some("9-Nope")).expect("write records");
    assert!(generated.records.is_empty());
    assert_eq!(generated.missing.as_deref(), Some("9-Nope"));

    let rendered =
        render_documents(&set.subforms, &settings(dir.path()), Some("9-Nope")).expect("render");
    assert!(rendered.documents.is_empty());
    assert_eq!(rendered.missing.as_deref(), Some("9-Nope"));
}

#[test]
fn missing_checklist_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = ingest_checklist(&dir.path().join("absent.csv"), &PipelineOptions::default())
        .expect_err("missing file");
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn shared_file_stems_are_reported_as_overwritten() {
    let dir = TempDir::new().expect("temp dir");
    let records_dir = dir.path().join("subforms");
    let set = SubformSet {
        subforms: vec![
            Subform::new("3.2-HVAC/R-Monthly", vec![Field::default()]),
            Subform::new("3.2-HVAC-R-Monthly", vec![Field::default(), Field::default()]),
            Subform::new("3/Boilers", vec![Field::default()]),
        ],
        rows_read: 4,
        rows_skipped: 0,
    };

    let generated = write_records(&set, Path::new("checklist.csv"), &records_dir, None)
        .expect("write records");

    assert_eq!(generated.overwritten, vec!["3.2-HVAC/R-Monthly".to_string()]);
    let names: Vec<&str> = generated.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["3.2-HVAC-R-Monthly", "3/Boilers"]);
    assert_eq!(generated.records[1].folder, "3");
    assert_eq!(generated.field_total(), 3);

    let loaded = load_records(&records_dir).expect("load records");
    assert_eq!(loaded.len(), 2);
}
