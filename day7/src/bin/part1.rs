use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let equations = day7::read_equations(&args.input_path).with_context(|| {
        format!(
            "Failed to read equations from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = equations
        .iter()
        .filter(|eq| eq.is_solvable())
        .map(|eq| eq.result())
        .sum::<u64>();
    println!("The total calibration result is {}.", sum);

    Ok(())
}
