//! Program-derived addresses of the Staking Options program.
//!
//! | account              | seeds                                          |
//! |----------------------|------------------------------------------------|
//! | state                | `"so-config"`, name, base mint                 |
//! | base vault           | `"so-vault"`, name, base mint                  |
//! | quote vault          | `"so-quote-vault"`, name, base mint            |
//! | option mint          | `"so-mint"`, state, strike (u64 big-endian)    |
//! | reverse option mint  | `"so-reverse-mint"`, state, strike (u64 BE)    |
//!
//! Nothing is cached: every call rehashes its seeds.

use crate::address::token_metadata_program;
use crate::error::{ClientError, ClientResult};
use crate::so_constants::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

fn find_pda(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    what: &'static str,
) -> ClientResult<(Pubkey, u8)> {
    match Pubkey::try_find_program_address(seeds, program_id) {
        Some((address, bump)) => {
            tracing::trace!(%address, bump, what, "derived address");
            Ok((address, bump))
        }
        None => crate::wrap_error!(Err(ClientError::NoViableBump { what })),
    }
}

fn check_name(name: &str) -> ClientResult<()> {
    if name.len() > MAX_SO_NAME_LEN {
        return crate::wrap_error!(Err(ClientError::NameTooLong {
            name: name.to_string(),
            len: name.len(),
            max: MAX_SO_NAME_LEN,
        }));
    }
    Ok(())
}

pub fn strike_seed(strike: u64) -> [u8; STRIKE_SEED_SIZE] {
    strike.to_be_bytes()
}

pub fn state(program_id: &Pubkey, name: &str, base_mint: &Pubkey) -> ClientResult<(Pubkey, u8)> {
    check_name(name)?;
    find_pda(
        &[SO_CONFIG_SEED.as_bytes(), name.as_bytes(), base_mint.as_ref()],
        program_id,
        "state",
    )
}

pub fn base_vault(
    program_id: &Pubkey,
    name: &str,
    base_mint: &Pubkey,
) -> ClientResult<(Pubkey, u8)> {
    check_name(name)?;
    find_pda(
        &[SO_VAULT_SEED.as_bytes(), name.as_bytes(), base_mint.as_ref()],
        program_id,
        "base vault",
    )
}

pub fn quote_vault(
    program_id: &Pubkey,
    name: &str,
    base_mint: &Pubkey,
) -> ClientResult<(Pubkey, u8)> {
    check_name(name)?;
    find_pda(
        &[SO_QUOTE_VAULT_SEED.as_bytes(), name.as_bytes(), base_mint.as_ref()],
        program_id,
        "quote vault",
    )
}

pub fn option_mint(program_id: &Pubkey, state: &Pubkey, strike: u64) -> ClientResult<(Pubkey, u8)> {
    find_pda(
        &[SO_MINT_SEED.as_bytes(), state.as_ref(), &strike_seed(strike)],
        program_id,
        "option mint",
    )
}

pub fn reverse_option_mint(
    program_id: &Pubkey,
    state: &Pubkey,
    strike: u64,
) -> ClientResult<(Pubkey, u8)> {
    find_pda(
        &[SO_REVERSE_MINT_SEED.as_bytes(), state.as_ref(), &strike_seed(strike)],
        program_id,
        "reverse option mint",
    )
}

/// Associated token account of `fee_owner` for `mint`.
pub fn fee_account(fee_owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(fee_owner, mint)
}

/// Token metadata account of an option mint.
pub fn option_metadata(option_mint: &Pubkey) -> ClientResult<(Pubkey, u8)> {
    find_pda(
        &[
            METADATA_SEED.as_bytes(),
            token_metadata_program::ID.as_ref(),
            option_mint.as_ref(),
        ],
        &token_metadata_program::ID,
        "option metadata",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_seed_is_big_endian() {
        assert_eq!(strike_seed(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(strike_seed(0x0102_0304_0506_0708), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(strike_seed(u64::MAX), [0xff; 8]);
    }

    #[test]
    fn name_at_seed_limit_is_accepted() {
        let name = "x".repeat(MAX_SO_NAME_LEN);
        assert!(state(&crate::ID, &name, &Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn name_over_seed_limit_is_rejected() {
        let name = "x".repeat(MAX_SO_NAME_LEN + 1);
        let base_mint = Pubkey::new_unique();
        for result in [
            state(&crate::ID, &name, &base_mint),
            base_vault(&crate::ID, &name, &base_mint),
            quote_vault(&crate::ID, &name, &base_mint),
        ] {
            assert!(matches!(result, Err(ClientError::NameTooLong { len: 33, max: 32, .. })));
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let base_mint = Pubkey::new_unique();
        let a = state(&crate::ID, "SO", &base_mint).unwrap();
        let b = state(&crate::ID, "SO", &base_mint).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.0, state(&crate::ID, "SO2", &base_mint).unwrap().0);
        assert_ne!(a.0, base_vault(&crate::ID, "SO", &base_mint).unwrap().0);
    }

    #[test]
    fn option_and_reverse_mints_differ_per_strike() {
        let (state, _) = state(&crate::ID, "SO", &Pubkey::new_unique()).unwrap();
        let (m1, _) = option_mint(&crate::ID, &state, 1).unwrap();
        let (m2, _) = option_mint(&crate::ID, &state, 2).unwrap();
        let (r1, _) = reverse_option_mint(&crate::ID, &state, 1).unwrap();
        assert_ne!(m1, m2);
        assert_ne!(m1, r1);
    }
}
