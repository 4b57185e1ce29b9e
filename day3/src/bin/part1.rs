use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let program = day3::read_program(&args.input_path).with_context(|| {
        format!(
            "Failed to read corrupted program from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = day3::mul_sum(&program);
    println!("The total sum of correct multiply instructions is {}.", sum);

    Ok(())
}
