use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use stepwalker::cli::{self, CliError, Session, SessionEnd, SessionOptions};
use stepwalker::logging;
use tracing::info;

#[derive(ClapParser)]
#[command(name = "stepwalker")]
#[command(about = "Stepwalker - walk through a tutorial one step at a time")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through a guide interactively
    Walk {
        /// Guide file (JSON); the built-in guide is used if not provided
        #[arg(short, long)]
        guide: Option<PathBuf>,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Print every step of a guide
    Outline {
        /// Guide file (JSON); the built-in guide is used if not provided
        #[arg(short, long)]
        guide: Option<PathBuf>,
    },

    /// Validate a guide file
    Check {
        /// The guide file to validate
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Walk { guide, no_color } => run_walk(guide, no_color),
        Commands::Outline { guide } => run_outline(guide),
        Commands::Check { file } => cli::check_guide(&file).map(|count| {
            println!("Guide is valid: {} steps", count);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_walk(guide: Option<PathBuf>, no_color: bool) -> Result<(), CliError> {
    let guide = cli::load_guide(guide.as_deref())?;
    let interactive = atty::is(atty::Stream::Stdin);

    let options = SessionOptions {
        color: !no_color && atty::is(atty::Stream::Stdout),
        prompt: interactive,
    };

    let stdout = io::stdout();
    let mut session = Session::new(guide, stdout.lock(), options)?;
    let end = session.run(io::stdin().lock())?;
    info!(?end, progress = %session.walker().progress(), "session finished");

    if end == SessionEnd::EndOfInput && interactive {
        let mut out = session.into_output();
        writeln!(out)?;
    }
    Ok(())
}

fn run_outline(guide: Option<PathBuf>) -> Result<(), CliError> {
    let guide = cli::load_guide(guide.as_deref())?;
    print!("{}", guide.outline(&guide.walker()));
    Ok(())
}
