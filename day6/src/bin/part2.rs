use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day6::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read ward map from given file({}).",
            args.input_path.display()
        )
    })?;

    let obstruction_n = map.looping_obstruction_count();
    println!(
        "There is(are) {} position(s) where one extra obstacle makes the ward loop.",
        obstruction_n
    );

    Ok(())
}
