use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use entry_cli::pipeline::RunResult;
use entry_report::SummaryTarget;

/// Short run report on stderr; stdout stays reserved for the summary.
pub fn print_run_result(result: &RunResult) {
    eprintln!(
        "Validated {} entries: {} valid, {} invalid",
        result.total, result.valid, result.invalid
    );
    if let SummaryTarget::File(path) = &result.summary_target {
        eprintln!("Error summary: {}", path.display());
    }
    eprintln!("Valid entries: {}", result.valid_file.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
