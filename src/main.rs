use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use shopcalc::checkpoint::Checkpoint;
use shopcalc::config::Config;
use shopcalc::core::Language;
use shopcalc::script::{parse_line, Action};
use shopcalc::Calculator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shopcalc",
    version,
    about = "Business calculator with margin, discount and VAT keys"
)]
struct Cli {
    /// Configuration file (default: <config dir>/shopcalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// VAT rate as a fraction, e.g. 0.1 for 10%
    #[arg(long)]
    vat_rate: Option<f64>,

    /// Label language: english or korean
    #[arg(long)]
    language: Option<Language>,

    /// Resume from a checkpoint file (.json or binary)
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Write a checkpoint file on exit (.json or binary)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Run a key script instead of reading stdin, e.g. "100= a10= d"
    #[arg(long)]
    keys: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "shopcalc=warn",
        1 => "shopcalc=debug",
        _ => "shopcalc=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(rate) = cli.vat_rate {
        config.vat_rate = rate;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    Ok(config.validated()?)
}

/// Apply one script line. Returns `false` once the user asked to quit.
fn run_line(calc: &mut Calculator, line: &str) -> bool {
    let actions = match parse_line(line) {
        Ok(actions) => actions,
        Err(err) => {
            eprintln!("error: {err}");
            return true;
        }
    };

    for action in actions {
        match action {
            Action::Press(input) => {
                if let Err(err) = calc.press(input) {
                    eprintln!("error: {err}");
                }
            }
            Action::Delete(index) => {
                if calc.delete_history(index).is_none() {
                    eprintln!("error: no history row {index}");
                }
            }
            Action::Quit => return false,
        }
    }
    true
}

fn run_interactive(calc: &mut Calculator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", calc.snapshot())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let keep_going = run_line(calc, &line);
        write!(stdout, "{}", calc.snapshot())?;
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }

    debug!("Input closed");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let settings = config.settings();
    info!(vat_rate = settings.vat_rate, language = ?config.language, "Starting calculator");

    let mut calc = match &cli.resume {
        Some(path) => Calculator::resume(
            Checkpoint::load(path)
                .with_context(|| format!("Cannot resume from {}", path.display()))?,
            settings,
        ),
        None => Calculator::new(settings),
    };

    match &cli.keys {
        Some(keys) => {
            run_line(&mut calc, keys);
            print!("{}", calc.snapshot());
        }
        None => run_interactive(&mut calc)?,
    }

    if let Some(path) = &cli.save {
        calc.checkpoint()
            .save(path)
            .with_context(|| format!("Cannot save checkpoint to {}", path.display()))?;
    }

    Ok(())
}
