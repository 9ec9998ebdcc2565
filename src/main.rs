use clap::{Parser, Subcommand};
use hayrack::config::{ConfigStore, Configuration};
use hayrack::error::{HayrackError, Result};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hayrack-config")]
#[command(about = "Inspect the merged hayrack configuration", long_about = None)]
struct Cli {
    /// Settings file to merge over the defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every section and option (default)
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List section names
    Sections,
    /// Print one section, or one option of it
    Get { section: String, option: Option<String> },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; otherwise --verbose selects DEBUG over WARN
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut store = cli
        .config
        .map_or_else(ConfigStore::new, ConfigStore::with_path);
    tracing::debug!("Using settings file {}", store.path().display());

    let config = store.get()?;

    match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json: true } => {
            let text = serde_json::to_string_pretty(config)
                .map_err(|e| HayrackError::Other(format!("Failed to serialize config: {e}")))?;
            println!("{text}");
        }
        Commands::Show { json: false } => print!("{}", render(config)),
        Commands::Sections => {
            for name in config.section_names() {
                println!("{name}");
            }
        }
        Commands::Get { section, option } => {
            let found = config
                .section(&section)
                .ok_or_else(|| HayrackError::Config(format!("No section [{section}]")))?;
            match option {
                Some(option) => {
                    let value = found.get(&option).ok_or_else(|| {
                        HayrackError::Config(format!("No option '{option}' in [{section}]"))
                    })?;
                    println!("{value}");
                }
                None => {
                    for (name, value) in found.iter() {
                        println!("{name} = {value}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn render(config: &Configuration) -> String {
    let mut out = String::new();
    for (name, section) in config.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("[{name}]\n"));
        for (option, value) in section.iter() {
            out.push_str(&format!("{option} = {value}\n"));
        }
    }
    out
}
