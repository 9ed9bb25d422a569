mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hemi_bridge_commons::env::load_env;
use hemi_bridge_commons::error::format_with_code;
use hemi_bridge_commons::telemetry::init_telemetry_from_env;

use crate::commands::encode::EncodeArgs;

#[derive(Parser)]
#[command(name = "hemi-bridge")]
#[command(about = "Bridge the HEMI token between Hemi and BNB Smart Chain.")]
struct Cli {
    // Optional local log file in addition to stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Lists supported chains, their pairing and configured adapters
    Chains,

    // Quotes the LayerZero messaging fee for a bridge
    Quote {
        // Source chain: id, name (e.g. "hemi") or env prefix
        #[arg(long)]
        chain: String,
        // Amount in HEMI (e.g. "12.5")
        #[arg(long)]
        amount: String,
        // Recipient on the destination chain. Defaults to the signer address.
        #[arg(long)]
        to: Option<String>,
    },

    // Bridges HEMI from the source chain to its counterpart
    Send {
        #[arg(long)]
        chain: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        to: Option<String>,
    },

    // Prints calldata for the adapter's send function without touching the network
    EncodeSend {
        // Destination chain: id or name
        #[arg(long)]
        destination: String,
        #[arg(long)]
        amount: String,
        // Messaging fee in wei, as returned by `quote`
        #[arg(long)]
        native_fee: String,
        #[arg(long, default_value = "0")]
        lz_token_fee: String,
        #[arg(long)]
        refund: String,
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() {
    load_env();
    let cli = Cli::parse();

    let telemetry_guard = match init_telemetry_from_env(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to initialize telemetry: {err}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Chains => commands::chains::chains(),
        Commands::Quote { chain, amount, to } => commands::quote::quote(&chain, &amount, to.as_deref()).await,
        Commands::Send { chain, amount, to } => commands::send::send(&chain, &amount, to.as_deref()).await,
        Commands::EncodeSend {
            destination,
            amount,
            native_fee,
            lz_token_fee,
            refund,
            to,
        } => commands::encode::encode_send_call(EncodeArgs {
            destination: &destination,
            amount: &amount,
            native_fee: &native_fee,
            lz_token_fee: &lz_token_fee,
            refund: &refund,
            to: &to,
        }),
    };

    if let Err(err) = result {
        eprintln!("{}", format_with_code(&err));
        drop(telemetry_guard);
        std::process::exit(1);
    }
}
