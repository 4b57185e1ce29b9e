use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let reports = day2::read_reports(&args.input_path).with_context(|| {
        format!(
            "Failed to read level reports from given file({}).",
            args.input_path.display()
        )
    })?;

    let safe_n = reports.iter().filter(|rep| rep.is_safe()).count();
    println!("{} report(s) in given list is(are) safe.", safe_n);

    Ok(())
}
