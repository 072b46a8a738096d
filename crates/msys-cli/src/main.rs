//! msys - CLI
//!
//! Logs its arguments as a single line, the way `sys.log` would.

use std::io;
use std::process;

use anyhow::Context;
use clap::Parser as ClapParser;

use msys_core::{init_logging, print, Logger, LoggingConfig, SysConfig, Value};

#[derive(ClapParser)]
#[command(name = "msys")]
#[command(about = "Print values the way the matcha sys namespace does")]
struct Cli {
    /// Values to log; JSON literals are parsed, anything else is a string
    values: Vec<String>,

    /// Print each value on its own line instead of logging one line
    #[arg(long)]
    print: bool,

    /// Leave flushing to the output stream
    #[arg(long)]
    no_flush: bool,

    /// Diagnostic verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SysConfig {
        let env_filter = match self.verbose {
            0 => None,
            1 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        };
        SysConfig {
            flush_each_line: !self.no_flush,
            diagnostics: LoggingConfig {
                env_filter,
                ..LoggingConfig::default()
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    init_logging(&config.diagnostics);

    let values: Vec<Value> = cli.values.iter().map(|arg| parse_value(arg)).collect();
    log::debug!("parsed {} argument(s)", values.len());

    let logger = Logger::with_config(io::stdout(), config);
    if cli.print {
        for value in &values {
            let text = Value::Str(print(value));
            logger.log(&[text]).context("failed to write to stdout")?;
        }
    } else {
        logger.log(&values).context("failed to write to stdout")?;
    }
    Ok(())
}

/// JSON literal if the argument parses as one, otherwise the raw string.
fn parse_value(arg: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => Value::from(json),
        Err(_) => Value::Str(arg.to_string()),
    }
}
