//! Error types.
//!
//! [`StakingOptionsError`] mirrors the custom errors the program returns, so a
//! failed transaction's code can be mapped back to a name and message.
//! [`ClientError`] covers everything that can go wrong on this side.

use anchor_lang::prelude::*;
use thiserror::Error;

#[error_code]
pub enum StakingOptionsError {
    #[msg("The mint in the SO state did not match the token type being received")]
    WrongMint,
    #[msg("Expired")]
    Expired,
    #[msg("NotYetExpired")]
    NotYetExpired,
    #[msg("State did not match")]
    InvalidState,
    #[msg("Vault did not match")]
    InvalidVault,
    #[msg("Mint did not match")]
    InvalidMint,
    #[msg("Account receiving fees does not match")]
    IncorrectFeeAccount,
    #[msg("Not enough tokens to issue the SO")]
    NotEnoughTokens,
    #[msg("Incorrect Authority")]
    IncorrectAuthority,
    #[msg("Too many strikes")]
    TooManyStrikes,
    #[msg("Invalid expiration")]
    InvalidExpiration,
    #[msg("Invalid name")]
    InvalidName,
}

impl StakingOptionsError {
    const ALL: [StakingOptionsError; 12] = [
        StakingOptionsError::WrongMint,
        StakingOptionsError::Expired,
        StakingOptionsError::NotYetExpired,
        StakingOptionsError::InvalidState,
        StakingOptionsError::InvalidVault,
        StakingOptionsError::InvalidMint,
        StakingOptionsError::IncorrectFeeAccount,
        StakingOptionsError::NotEnoughTokens,
        StakingOptionsError::IncorrectAuthority,
        StakingOptionsError::TooManyStrikes,
        StakingOptionsError::InvalidExpiration,
        StakingOptionsError::InvalidName,
    ];

    /// Maps a custom program error code (e.g. `6003`) back to its variant.
    pub fn from_code(code: u32) -> Option<StakingOptionsError> {
        Self::ALL.into_iter().find(|e| u32::from(*e) == code)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("SO name `{name}` is {len} bytes, the limit is {max}")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("No viable bump seed for {what}")]
    NoViableBump { what: &'static str },

    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    #[error("Account {address} is owned by {owner}, expected {expected}")]
    WrongOwner {
        address: Pubkey,
        owner: Pubkey,
        expected: Pubkey,
    },

    #[error("Failed to decode account {address}: {reason}")]
    Decode { address: Pubkey, reason: String },

    #[error("Failed to fetch account {address}: {cause}")]
    Fetch {
        address: Pubkey,
        cause: anyhow::Error,
    },

    #[error("Failed to build instruction: {0}")]
    Instruction(#[from] anchor_lang::error::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse IDL: {0}")]
    Idl(#[from] serde_json::Error),
}
