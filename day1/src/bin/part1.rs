use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (list0, list1) = day1::read_lists(&args.input_path).with_context(|| {
        format!(
            "Failed to read location ID lists from given file({}).",
            args.input_path.display()
        )
    })?;

    let distance = day1::total_distance(&list0, &list1);
    println!("The total distance between both lists is {}.", distance);

    Ok(())
}
