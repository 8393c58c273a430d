use std::path::PathBuf;

use clap::Args;
use colored::control::ShouldColorize;
use colored::Colorize;
use eyre::Result;
use tally_expr::Tokenizer;
use tally_pretty::{ColorWhen, PrettyPrintSettings, PrettyPrinter};

use crate::history::History;
use crate::Input;

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Print the token stream
    #[arg(short, long)]
    tokens: bool,

    /// Print the resulting abstract syntax tree
    #[arg(short, long)]
    ast: bool,

    /// Display the span of each token or AST node
    #[arg(short, long)]
    spans: bool,

    /// Remove alignment spacing in the spans column
    #[arg(long)]
    no_align: bool,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,

    /// Force color output
    #[arg(long)]
    force_color: bool,

    /// Append successful calculations to this history file
    #[arg(long)]
    history: Option<PathBuf>,
}

pub fn run(input: Input, args: EvalArgs) -> Result<()> {
    let is_stdin = input.is_stdin();

    let color_supported = ShouldColorize::from_env().should_colorize();
    let color_when = match (color_supported, args.no_color, args.force_color) {
        (true, false, false) => ColorWhen::Auto,
        (_, _, true) => ColorWhen::Always,
        _ => ColorWhen::Never,
    };
    let printer_settings = PrettyPrintSettings::default()
        .indent("\u{254E}   ".bright_black().to_string().as_ref())
        .color_when(color_when)
        .align(!args.no_align)
        .include_spans(args.spans);

    let mut history = args.history.clone().map(History::load).transpose()?;

    for line in input {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        run_expression(
            expression,
            &printer_settings,
            is_stdin,
            &args,
            history.as_mut(),
        )?;
    }

    Ok(())
}

fn run_expression(
    expression: &str,
    printer_settings: &PrettyPrintSettings,
    is_stdin: bool,
    args: &EvalArgs,
    history: Option<&mut History>,
) -> Result<()> {
    if !is_stdin {
        println!("{}", expression);
    }

    if args.tokens {
        print_tokens(expression, printer_settings.clone())?;
    }

    if args.ast {
        print_ast(expression, printer_settings.clone())?;
    }

    // evaluation failures are reported and the loop moves on; only I/O
    // failures abort the run
    match tally_expr::evaluate(expression) {
        Ok(value) => {
            println!("= {}", value);

            if let Some(history) = history {
                history.append(expression, &value.to_string())?;
            }
        },
        Err(err) => {
            println!("error: {}", err);
        },
    }

    Ok(())
}

fn print_tokens(expression: &str, printer_settings: PrettyPrintSettings) -> Result<()> {
    let mut printer = PrettyPrinter::new(printer_settings);

    for token in Tokenizer::new(expression) {
        match token {
            Ok(tok) => {
                printer.print(&tok)?;
            },
            Err(e) => {
                printer.print(&e)?;
            },
        }
    }

    println!("TOKENS:\n{}\n", printer.finish()?);

    Ok(())
}

fn print_ast(expression: &str, printer_settings: PrettyPrintSettings) -> Result<()> {
    let mut printer = PrettyPrinter::new(printer_settings);

    let out = match tally_expr::parse(expression) {
        Ok(expr) => printer.print(&expr)?.finish()?,
        Err(err) => printer.print(&err)?.finish()?,
    };

    println!("AST:\n{}\n", out);

    Ok(())
}
