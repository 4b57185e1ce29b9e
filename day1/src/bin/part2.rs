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

    let score = day1::similarity_score(&list0, &list1);
    println!("The similarity score of both lists is {}.", score);

    Ok(())
}
