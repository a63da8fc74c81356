//! Anchor IDL of the Staking Options program.
//!
//! The JSON is bundled with the crate so callers can inspect account lists and
//! error tables without a network round trip.

use crate::error::ClientResult;
use heck::SnakeCase;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const IDL_JSON: &str = include_str!("../idl/staking_options.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IdlError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlAccountItem>,
    pub args: Vec<IdlField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: String,
    pub is_mut: bool,
    pub is_signer: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_optional: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// A named, typed field. Used for instruction arguments and account fields.
///
/// Types are kept as raw JSON: `"u64"`, `"publicKey"`, `{"vec": "u64"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IdlTypeDefBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlTypeDefBody {
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<IdlField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlError {
    pub code: u32,
    pub name: String,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Parse the bundled IDL.
pub fn idl() -> ClientResult<Idl> {
    Ok(serde_json::from_str(IDL_JSON)?)
}

impl Idl {
    /// Look up an instruction by its IDL (camelCase) name.
    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&IdlTypeDef> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn error(&self, code: u32) -> Option<&IdlError> {
        self.errors.iter().find(|e| e.code == code)
    }
}

// IDL names are camelCase renderings of the program's Rust names.

impl IdlInstruction {
    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|a| a.name.as_str())
    }

    /// Name of the instruction handler, e.g. `init_strike_with_payer`.
    pub fn rust_name(&self) -> String {
        self.name.to_snake_case()
    }
}

impl IdlAccountItem {
    pub fn rust_name(&self) -> String {
        self.name.to_snake_case()
    }
}

impl IdlField {
    pub fn rust_name(&self) -> String {
        self.name.to_snake_case()
    }
}

impl IdlTypeDef {
    pub fn rust_name(&self) -> String {
        self.name.to_snake_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::so_constants::{IDL_NAME, IDL_VERSION};

    #[test]
    fn bundled_idl_parses() {
        let idl = idl().unwrap();
        assert_eq!(idl.name, IDL_NAME);
        assert_eq!(idl.version, IDL_VERSION);
        assert_eq!(idl.instructions.len(), 14);
        assert_eq!(idl.errors.len(), 12);
    }

    #[test]
    fn optional_issue_authority_is_flagged() {
        let idl = idl().unwrap();
        for name in ["configV2", "configV3"] {
            let ix = idl.instruction(name).unwrap();
            let optional: Vec<_> = ix
                .accounts
                .iter()
                .filter(|a| a.is_optional)
                .map(|a| a.name.as_str())
                .collect();
            assert_eq!(optional, ["issueAuthority"], "{}", name);
        }
        assert!(idl.instruction("config").unwrap().accounts.iter().all(|a| !a.is_optional));
    }

    #[test]
    fn state_account_fields() {
        let idl = idl().unwrap();
        let state = idl.account("state").unwrap();
        assert_eq!(state.ty.kind, "struct");
        assert_eq!(state.ty.fields.len(), 15);
        assert_eq!(state.ty.fields[6].name, "quoteVaultBump");
    }

    #[test]
    fn rust_names() {
        let idl = idl().unwrap();
        let ix = idl.instruction("nameToken").unwrap();
        assert_eq!(ix.rust_name(), "name_token");
        assert_eq!(ix.accounts[4].rust_name(), "option_mint_metadata_account");
        assert_eq!(idl.instruction("configV2").unwrap().rust_name(), "config_v2");
        assert_eq!(idl.instruction("addTokens").unwrap().args[0].rust_name(), "num_tokens_to_add");
    }

    #[test]
    fn capitalized_type_names_have_no_leading_underscore() {
        let def = IdlTypeDef {
            name: "State".to_string(),
            ty: IdlTypeDefBody {
                kind: "struct".to_string(),
                fields: vec![],
            },
        };
        assert_eq!(def.rust_name(), "state");
        let def = IdlTypeDef {
            name: "OptionMint".to_string(),
            ..def
        };
        assert_eq!(def.rust_name(), "option_mint");
    }
}
