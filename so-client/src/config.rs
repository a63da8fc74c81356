//! Client configuration.
//!
//! Every field has a default, so an empty file is a valid mainnet config:
//!
//! ```toml
//! program_id = "4yx1NJ4Vqf2zT1oVLk4SySBhhDJXmXFt88ncm4gPxtL7"
//! fee_owner = "7Z36Efbt7a4nLiV7s5bY7J2e4TJ6V9JEKGccsy2od2bE"
//! ```

use crate::address::fee_treasury;
use crate::error::{ClientError, ClientResult};
use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Deployment of the Staking Options program to talk to.
    #[serde(with = "pubkey_string")]
    pub program_id: Pubkey,
    /// Owner of the protocol fee token accounts.
    #[serde(with = "pubkey_string")]
    pub fee_owner: Pubkey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            fee_owner: fee_treasury::ID,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(content: &str) -> ClientResult<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.program_id == Pubkey::default() {
            return crate::wrap_error!(Err(ClientError::Config(
                "program_id must be set".to_string()
            )));
        }
        if self.fee_owner == Pubkey::default() {
            return crate::wrap_error!(Err(ClientError::Config(
                "fee_owner must be set".to_string()
            )));
        }
        Ok(())
    }
}

// Pubkeys are written as base58 strings rather than byte arrays.
mod pubkey_string {
    use anchor_lang::prelude::Pubkey;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s)
            .map_err(|e| de::Error::custom(format!("invalid pubkey `{}`: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_mainnet_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.program_id.to_string(), "4yx1NJ4Vqf2zT1oVLk4SySBhhDJXmXFt88ncm4gPxtL7");
        assert_eq!(config.fee_owner.to_string(), "7Z36Efbt7a4nLiV7s5bY7J2e4TJ6V9JEKGccsy2od2bE");
    }

    #[test]
    fn program_id_can_be_overridden() {
        let config = ClientConfig::from_toml_str(
            r#"program_id = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA""#,
        )
        .unwrap();
        assert_eq!(config.program_id, anchor_spl::token::ID);
        assert_eq!(config.fee_owner, fee_treasury::ID);
    }

    #[test]
    fn bad_pubkey_is_a_parse_error() {
        let err = ClientConfig::from_toml_str(r#"fee_owner = "not-a-key""#).unwrap_err();
        assert!(matches!(err, ClientError::Toml(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ClientConfig::from_toml_str(r#"rpc_url = "http://localhost:8899""#).is_err());
    }

    #[test]
    fn default_program_id_fails_validation() {
        let err = ClientConfig::from_toml_str(r#"program_id = "11111111111111111111111111111111""#)
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn serializes_back_to_base58() {
        let s = toml::to_string(&ClientConfig::default()).unwrap();
        assert!(s.contains("4yx1NJ4Vqf2zT1oVLk4SySBhhDJXmXFt88ncm4gPxtL7"));
    }
}
