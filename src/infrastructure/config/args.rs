//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use super::app_config::{CommitmentLevel, LogLevel};

/// Command line arguments, merged over the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "solgif",
    version,
    about = "A terminal client for an on-chain GIF portal on Solana",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// RPC endpoint URL.
    #[arg(long, value_name = "URL", env = "SOLGIF_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Commitment level for reads and sends.
    #[arg(long, value_enum)]
    pub commitment: Option<CommitmentLevel>,

    /// Portal program id (base58).
    #[arg(long, value_name = "PUBKEY")]
    pub program_id: Option<String>,

    /// Path to the wallet keypair file.
    #[arg(long, value_name = "PATH", env = "SOLGIF_KEYPAIR")]
    pub keypair: Option<PathBuf>,

    /// Allow the eager startup connect without asking.
    #[arg(long)]
    pub auto_connect: Option<bool>,

    /// Show the key hints line at the bottom of the portal screen.
    #[arg(long)]
    pub show_footer_help: Option<bool>,
}
