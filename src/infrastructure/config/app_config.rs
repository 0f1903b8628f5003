//! Application configuration.

use std::path::PathBuf;
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use super::args::CliArgs;
use super::storage::{CONFIG_FILE_NAME, ConfigError};

const APP_NAME: &str = "solgif";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_PROGRAM_ID: &str = "6gFQc36zmVwiFpWpGoPGTgEXk3bCBThL8rpsvtvS9wrK";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Commitment level used for chain reads and sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    /// Processed by the queried node.
    #[default]
    Processed,
    /// Confirmed by a supermajority of the cluster.
    Confirmed,
    /// Finalized and rooted.
    Finalized,
}

impl CommitmentLevel {
    /// Converts to an rpc commitment config.
    #[must_use]
    pub const fn to_commitment_config(self) -> CommitmentConfig {
        match self {
            Self::Processed => CommitmentConfig::processed(),
            Self::Confirmed => CommitmentConfig::confirmed(),
            Self::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl std::fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processed => write!(f, "processed"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Chain endpoint configuration.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Wallet provider configuration.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Chain endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// RPC endpoint URL.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Commitment level for reads and sends.
    #[serde(default)]
    pub commitment: CommitmentLevel,

    /// Portal program id (base58).
    #[serde(default = "default_program_id")]
    pub program_id: String,
}

impl ChainConfig {
    /// Parses the configured program id.
    ///
    /// # Errors
    /// Returns `ConfigError` if the id is not a valid base58 key.
    pub fn program_id(&self) -> Result<Pubkey, ConfigError> {
        Pubkey::from_str(&self.program_id)
            .map_err(|e| ConfigError::InvalidProgramId(e.to_string()))
    }

    /// Returns the configured commitment as an rpc commitment config.
    #[must_use]
    pub const fn commitment_config(&self) -> CommitmentConfig {
        self.commitment.to_commitment_config()
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: CommitmentLevel::default(),
            program_id: default_program_id(),
        }
    }
}

/// Wallet provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path to the wallet keypair file. Defaults to the Solana CLI key.
    #[serde(default)]
    pub keypair_path: Option<PathBuf>,

    /// Allow the eager startup connect without asking.
    #[serde(default = "default_true")]
    pub auto_connect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: None,
            auto_connect: true,
        }
    }
}

impl WalletConfig {
    /// Returns the keypair path, falling back to the Solana CLI location.
    #[must_use]
    pub fn effective_keypair_path(&self) -> PathBuf {
        self.keypair_path
            .clone()
            .unwrap_or_else(default_keypair_path)
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Timestamp format string (chrono format).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Show the key hints line at the bottom of the portal screen.
    #[serde(default = "default_true")]
    pub show_footer_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_footer_help: true,
        }
    }
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_program_id() -> String {
    DEFAULT_PROGRAM_ID.to_string()
}

fn default_keypair_path() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from("id.json"),
        |dirs| dirs.home_dir().join(".config/solana/id.json"),
    )
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(rpc_url) = args.rpc_url {
            self.chain.rpc_url = rpc_url;
        }
        if let Some(commitment) = args.commitment {
            self.chain.commitment = commitment;
        }
        if let Some(program_id) = args.program_id {
            self.chain.program_id = program_id;
        }
        if let Some(keypair_path) = args.keypair {
            self.wallet.keypair_path = Some(keypair_path);
        }
        if let Some(auto_connect) = args.auto_connect {
            self.wallet.auto_connect = auto_connect;
        }
        if let Some(show_footer_help) = args.show_footer_help {
            self.ui.show_footer_help = show_footer_help;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("solgif.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            chain: ChainConfig::default(),
            wallet: WalletConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_chain_section() {
        let toml_content = r#"
            log_level = "debug"

            [chain]
            rpc_url = "http://127.0.0.1:8899"
            commitment = "confirmed"

            [wallet]
            keypair_path = "/tmp/wallet.json"
            auto_connect = false

            [ui]
            show_footer_help = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.chain.rpc_url, "http://127.0.0.1:8899");
        assert_eq!(config.chain.commitment, CommitmentLevel::Confirmed);
        assert_eq!(config.chain.program_id, DEFAULT_PROGRAM_ID);
        assert_eq!(
            config.wallet.keypair_path,
            Some(PathBuf::from("/tmp/wallet.json"))
        );
        assert!(!config.wallet.auto_connect);
        assert!(!config.ui.show_footer_help);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.chain.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.chain.commitment, CommitmentLevel::Processed);
        assert!(config.wallet.auto_connect); // default_true
        assert!(config.wallet.keypair_path.is_none());
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
    }

    #[test]
    fn test_default_program_id_parses() {
        let config = ChainConfig::default();
        assert!(config.program_id().is_ok());
    }

    #[test]
    fn test_invalid_program_id_is_rejected() {
        let config = ChainConfig {
            program_id: "not-a-key".to_string(),
            ..ChainConfig::default()
        };

        assert!(matches!(
            config.program_id(),
            Err(ConfigError::InvalidProgramId(_))
        ));
    }

    #[test]
    fn test_merge_with_args_overrides_chain() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: None,
            rpc_url: Some("http://localhost:8899".to_string()),
            commitment: Some(CommitmentLevel::Finalized),
            program_id: None,
            keypair: Some(PathBuf::from("/tmp/id.json")),
            auto_connect: Some(false),
            show_footer_help: None,
        };

        config.merge_with_args(args);

        assert_eq!(config.chain.rpc_url, "http://localhost:8899");
        assert_eq!(config.chain.commitment, CommitmentLevel::Finalized);
        assert_eq!(config.wallet.keypair_path, Some(PathBuf::from("/tmp/id.json")));
        assert!(!config.wallet.auto_connect);
    }
}
