use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use subform_cli::types::{GenerateResult, RenderResult};
use subform_report::{DocumentStyle, folder_counts};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Checklist: {}", result.input.display());
    println!("Records: {}", result.output_dir.display());
    println!(
        "Rows read: {} ({} skipped without a naming key)",
        result.rows_read, result.rows_skipped
    );
    print_missing(result.missing.as_deref());
    for name in &result.overwritten {
        println!("Subform '{name}' was overwritten by a name with the same file stem");
    }
    if result.records.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subform"),
        header_cell("Folder"),
        header_cell("Fields"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in &result.records {
        table.add_row(vec![
            Cell::new(&record.name),
            dim_cell(&record.folder),
            Cell::new(record.fields),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} subforms", result.records.len())).add_attribute(Attribute::Bold),
        Cell::new(result.field_total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_render_summary(result: &RenderResult) {
    println!("Subforms rendered: {}", result.subforms);
    print_missing(result.missing.as_deref());
    if result.documents.is_empty() {
        return;
    }

    let mut header = vec![header_cell("Folder")];
    header.extend(
        result
            .styles
            .iter()
            .map(|style| header_cell(style_label(*style))),
    );
    let mut table = Table::new();
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 1..=result.styles.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let per_style: Vec<BTreeMap<&str, usize>> = result
        .styles
        .iter()
        .map(|style| folder_counts(result.documents_for(*style)))
        .collect();
    let folders = folder_counts(&result.documents);
    for folder in folders.keys() {
        let mut row = vec![Cell::new(folder)];
        row.extend(
            per_style
                .iter()
                .map(|counts| count_cell(counts.get(folder).copied().unwrap_or(0))),
        );
        table.add_row(row);
    }
    println!("{table}");
}

fn print_missing(missing: Option<&str>) {
    if let Some(name) = missing {
        println!("Subform '{name}' not found");
    }
}

fn style_label(style: DocumentStyle) -> &'static str {
    match style {
        DocumentStyle::Reference => "Reference",
        DocumentStyle::Instruction => "Instruction",
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
