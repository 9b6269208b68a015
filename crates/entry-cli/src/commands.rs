use anyhow::Result;
use comfy_table::Table;

use entry_cli::pipeline::{RunConfig, RunResult, run};
use entry_report::SummaryTarget;
use entry_validate::RULES;

use crate::cli::ValidateArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_validate(args: &ValidateArgs) -> Result<RunResult> {
    run(&run_config(args))
}

pub fn run_fields() {
    println!("{}", fields_table());
}

fn run_config(args: &ValidateArgs) -> RunConfig {
    let summary = if args.stdout {
        SummaryTarget::Stdout
    } else {
        SummaryTarget::File(args.output_file.clone())
    };
    RunConfig {
        input_file: args.input_file.clone(),
        encoding: args.encoding.clone(),
        summary,
        valid_file: args.valid_file.clone(),
        show_progress: !args.no_progress,
    }
}

/// Rule table in check order.
fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    for (position, rule) in RULES.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            rule.field.to_string(),
            rule.description.to_string(),
        ]);
    }
    table
}
