mod commands;
mod history;

use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::eval::EvalArgs;
use commands::history::HistoryArgs;
use eyre::Result;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file. Uses stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate arithmetic expressions, one per line
    #[command(name = "eval")]
    Eval(EvalArgs),

    /// Show previously evaluated expressions
    #[command(name = "history")]
    History(HistoryArgs),
}

type CliInput = Box<dyn Iterator<Item = Result<String>>>;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    match args.command {
        Commands::Eval(cmd_args) => {
            let input = Input::new(args.input)?;
            commands::eval::run(input, cmd_args)
        },
        Commands::History(cmd_args) => commands::history::run(cmd_args),
    }?;

    Ok(())
}

pub struct Input {
    input:    CliInput,
    is_stdin: bool,
}

impl Input {
    pub fn new(input_path: Option<PathBuf>) -> Result<Self> {
        let input = if let Some(input_path) = input_path {
            let file = File::open(input_path)?;
            let iter = io::BufReader::new(file)
                .lines()
                .map(|res| res.map_err(|err| err.into()));

            Self {
                input: Box::new(iter) as CliInput,
                is_stdin: false,
            }
        } else {
            let iter = std::io::stdin()
                .lines()
                .map(|res| res.map_err(|err| err.into()));

            Self {
                input: Box::new(iter) as CliInput,
                is_stdin: true,
            }
        };

        Ok(input)
    }

    #[inline]
    pub fn is_stdin(&self) -> bool {
        self.is_stdin
    }
}

impl Iterator for Input {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.next()
    }
}
