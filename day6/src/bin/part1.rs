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

    let visited_n = map.visited_cell_count();
    println!(
        "The ward will visit {} position(s) before leaving given map.",
        visited_n
    );

    Ok(())
}
