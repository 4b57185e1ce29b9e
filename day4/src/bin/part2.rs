use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let field = day4::read_field(&args.input_path).with_context(|| {
        format!(
            "Failed to read word field from given file({}).",
            args.input_path.display()
        )
    })?;

    let count = field.mas_cross_count();
    println!("An X of MAS occurs {} time(s) in given word field.", count);

    Ok(())
}
