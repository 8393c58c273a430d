use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use itertools::Itertools;

use crate::history::History;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History file to read
    #[arg(long)]
    history: PathBuf,
}

pub fn run(args: HistoryArgs) -> Result<()> {
    let history = History::load(args.history)?;

    if history.entries().is_empty() {
        println!("no history");
        return Ok(());
    }

    let out = history
        .entries()
        .iter()
        .map(|entry| format!("{} = {}", entry.expression, entry.result))
        .join("\n");
    println!("{}", out);

    Ok(())
}
