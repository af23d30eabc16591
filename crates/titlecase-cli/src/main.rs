use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use titlecase_core::{
    convert, ConvertError, ConvertOptions, ConvertRequest, ExitCode, HeadingLevel, Markup,
    Source,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert lines of text to title case",
    long_about = None,
    disable_help_flag = true
)]
struct Cli {
    /// Edit file in place (instead of writing to stdout)
    #[arg(short = 'i', long = "in-place")]
    in_place: bool,

    /// Format as bold (**text**)
    #[arg(short = 'b', long = "bold")]
    bold: bool,

    /// Format as heading (1-6, e.g. -h 2 for ##)
    #[arg(
        short = 'h',
        long = "heading",
        value_name = "LEVEL",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    heading: i64,

    /// Input file (reads stdin when omitted). Options after it are not parsed.
    #[arg(value_name = "FILE", num_args = 0.., trailing_var_arg = true)]
    inputs: Vec<PathBuf>,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> std::process::ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(exit) | Err(exit) => std::process::ExitCode::from(exit as u8),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let mut inputs = cli.inputs.into_iter();
    let file = inputs.next();
    let ignored = inputs.count();
    if ignored > 0 {
        debug!(count = ignored, "ignoring arguments after the input file");
    }

    let request = ConvertRequest {
        source: Source::from_arg(file),
        options: ConvertOptions {
            in_place: cli.in_place,
            markup: Markup {
                bold: cli.bold,
                heading: HeadingLevel::from_raw(cli.heading),
            },
        },
    };

    let outcome = convert(&request).map_err(report)?;
    match outcome.commit(&mut io::stdout().lock()) {
        Ok(()) => Ok(ExitCode::Success),
        Err(err) if err.is_broken_pipe() => Ok(ExitCode::Success),
        Err(err @ ConvertError::Stdout(_)) => {
            let exit = err.exit_code();
            let err = anyhow::Error::new(err)
                .context(format!("Failed to print {} lines", outcome.line_count));
            eprintln!("{err:#}");
            Err(exit)
        }
        Err(err) => Err(report(err)),
    }
}

fn report(err: ConvertError) -> ExitCode {
    eprintln!("{err}");
    err.exit_code()
}
