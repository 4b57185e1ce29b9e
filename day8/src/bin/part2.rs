use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let field = day8::read_field(&args.input_path).with_context(|| {
        format!(
            "Failed to read antenna field from given file({}).",
            args.input_path.display()
        )
    })?;

    let antinode_n = field.resonant_antinode_count();
    println!(
        "There is(are) {} unique antinode position(s) in given field considering resonant harmonics.",
        antinode_n
    );

    Ok(())
}
