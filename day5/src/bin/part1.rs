use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (rules, updates) = day5::read_input(&args.input_path).with_context(|| {
        format!(
            "Failed to read sleigh manual updates from given file({}).",
            args.input_path.display()
        )
    })?;

    let sum = updates
        .iter()
        .filter(|update| rules.is_ordered(update))
        .filter_map(|update| day5::middle_page(update))
        .map(|page| page as usize)
        .sum::<usize>();
    println!(
        "The sum of middle pages of correctly ordered updates is {}.",
        sum
    );

    Ok(())
}
