pub const SO_CONFIG_SEED: &str = "so-config";
pub const SO_VAULT_SEED: &str = "so-vault";
pub const SO_QUOTE_VAULT_SEED: &str = "so-quote-vault";
pub const SO_MINT_SEED: &str = "so-mint";
pub const SO_REVERSE_MINT_SEED: &str = "so-reverse-mint";
pub const METADATA_SEED: &str = "metadata";

// A name is used verbatim as a PDA seed, so it is bound by the runtime seed limit.
pub const MAX_SO_NAME_LEN: usize = anchor_lang::solana_program::pubkey::MAX_SEED_LEN;

pub const IDL_NAME: &str = "staking_options";
pub const IDL_VERSION: &str = "0.1.1";

pub const DISCRIMINATOR_SIZE: usize = 8;
pub const STRIKE_SEED_SIZE: usize = 8;
