use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod run;

#[derive(Parser)]
#[command(
    name = "primebench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sequential vs multi-threaded prime counting benchmark",
    long_about = "Primebench counts the primes in a numeric range twice, once with a \
                  single sequential scan and once partitioned across a fixed-size worker \
                  pool, then reports both wall-clock times and the resulting speedup."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark
    Run(run::RunArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Run(args)) => run::execute(args),
            // Default behavior - run the benchmark with the stock parameters
            None => run::execute(run::RunArgs::default()),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
