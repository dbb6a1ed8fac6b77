//! Pixkit CLI
//!
//! Command-line interface for generating and inspecting PIX BR Code payloads.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pixkit_cli::{commands, config, ui};

#[derive(Parser)]
#[command(name = "pixkit")]
#[command(about = "Pixkit CLI - Generate and inspect PIX BR Code payloads", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Merchant config file (can also be set via PIXKIT_CONFIG env var)
    #[arg(long, global = true, env = config::CONFIG_ENV)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a static PIX payload and its QR code
    Generate {
        /// PIX key (phone, email, CNPJ or random key)
        #[arg(short, long)]
        key: Option<String>,

        /// Merchant name
        #[arg(short, long)]
        name: Option<String>,

        /// Merchant city
        #[arg(short, long)]
        city: Option<String>,

        /// Amount in BRL, e.g. 150.50 or 150,50
        #[arg(short, long)]
        amount: Option<String>,

        /// Transaction id (up to 25 letters and digits)
        #[arg(short, long)]
        txid: Option<String>,

        /// Free-text description shown to the payer
        #[arg(short, long)]
        description: Option<String>,

        /// Print JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// Skip the terminal QR code
        #[arg(long)]
        no_qr: bool,
    },

    /// Decode a payload and verify its checksum
    Decode {
        /// Payload text
        payload: String,

        /// Print JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Compute the CRC16 of arbitrary text
    Checksum {
        /// Text to checksum
        text: String,
    },

    /// Show how a PIX key is classified and formatted
    Key {
        /// Raw key as typed by the merchant
        raw: String,
    },

    /// Manage the merchant config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a new config file
    Init {
        /// PIX key
        #[arg(long)]
        key: String,

        /// Merchant name
        #[arg(long)]
        name: String,

        /// Merchant city
        #[arg(long)]
        city: String,

        /// Default transaction id
        #[arg(long)]
        txid: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Print the current config
    Show,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pixkit_cli=debug,pixkit_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pixkit_cli=info,pixkit_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(err) = run(cli) {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = config::resolve_config_path(cli.config.as_deref());

    // Dispatch commands
    match cli.command {
        Commands::Generate {
            key,
            name,
            city,
            amount,
            txid,
            description,
            json,
            no_qr,
        } => {
            let args = commands::generate::GenerateArgs {
                merchant: config::MerchantOverrides { key, name, city },
                amount,
                txid,
                description,
                json,
                no_qr,
            };
            commands::generate::run(&config_path, args, cli.verbose)?;
        }
        Commands::Decode { payload, json } => {
            commands::decode::run(&payload, json, cli.verbose)?;
        }
        Commands::Checksum { text } => {
            commands::checksum::run(&text, cli.verbose)?;
        }
        Commands::Key { raw } => {
            commands::key::run(&raw, cli.verbose)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init {
                key,
                name,
                city,
                txid,
                force,
            } => {
                commands::config::init(&config_path, key, name, city, txid, force, cli.verbose)?;
            }
            ConfigAction::Show => {
                commands::config::show(&config_path, cli.verbose)?;
            }
        },
    }

    Ok(())
}
