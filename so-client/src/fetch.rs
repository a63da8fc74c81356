//! Account reads.
//!
//! The client never talks to a cluster itself. Anything that can produce raw
//! account data (an RPC client, a snapshot, a test fixture) implements
//! [`AccountFetcher`] and is handed to the builders that need on-chain data.

use crate::error::{ClientError, ClientResult};
use crate::so_account::State;
use crate::utils::deserialize_account;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token::state::{Account as SplTokenAccount, AccountState};
use anchor_spl::token::TokenAccount;
use std::collections::HashMap;

/// Owner and raw data of an on-chain account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedAccount {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

pub trait AccountFetcher {
    /// Returns `Ok(None)` when the account does not exist.
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<FetchedAccount>>;
}

pub fn fetch_account(
    fetcher: &dyn AccountFetcher,
    address: &Pubkey,
) -> ClientResult<FetchedAccount> {
    match fetcher.get_account(address) {
        Ok(Some(account)) => Ok(account),
        Ok(None) => crate::wrap_error!(Err(ClientError::AccountNotFound(*address))),
        Err(cause) => crate::wrap_error!(Err(ClientError::Fetch {
            address: *address,
            cause,
        })),
    }
}

pub fn fetch_token_account(
    fetcher: &dyn AccountFetcher,
    address: &Pubkey,
) -> ClientResult<TokenAccount> {
    let account = fetch_account(fetcher, address)?;
    deserialize_account::<TokenAccount>(address, &account, &TokenAccount::owner())
}

/// Fetches a state account, which must be owned by `program_id`.
pub fn fetch_state(
    fetcher: &dyn AccountFetcher,
    address: &Pubkey,
    program_id: &Pubkey,
) -> ClientResult<State> {
    let account = fetch_account(fetcher, address)?;
    deserialize_account::<State>(address, &account, program_id)
}

/// In-memory [`AccountFetcher`] for fixtures and offline tooling.
#[derive(Clone, Debug, Default)]
pub struct MemoryFetcher {
    accounts: HashMap<Pubkey, FetchedAccount>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, FetchedAccount { owner, data });
    }

    /// Stores an initialized SPL token account.
    pub fn insert_token_account(
        &mut self,
        address: Pubkey,
        mint: Pubkey,
        owner: Pubkey,
        amount: u64,
    ) {
        let account = SplTokenAccount {
            mint,
            owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; SplTokenAccount::LEN];
        account.pack_into_slice(&mut data);
        self.insert(address, anchor_spl::token::ID, data);
    }

    /// Stores a state account the way the program lays it out, discriminator first.
    pub fn insert_state(
        &mut self,
        address: Pubkey,
        program_id: Pubkey,
        state: &State,
    ) -> ClientResult<()> {
        let mut data = Vec::new();
        state.try_serialize(&mut data)?;
        self.insert(address, program_id, data);
        Ok(())
    }

    pub fn remove(&mut self, address: &Pubkey) -> Option<FetchedAccount> {
        self.accounts.remove(address)
    }
}

impl AccountFetcher for MemoryFetcher {
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<FetchedAccount>> {
        Ok(self.accounts.get(address).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl AccountFetcher for Unreachable {
        fn get_account(&self, _address: &Pubkey) -> anyhow::Result<Option<FetchedAccount>> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn token_account_round_trip() {
        let mut fetcher = MemoryFetcher::new();
        let address = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        fetcher.insert_token_account(address, mint, owner, 42);

        let account = fetch_token_account(&fetcher, &address).unwrap();
        assert_eq!(account.mint, mint);
        assert_eq!(account.owner, owner);
        assert_eq!(account.amount, 42);
    }

    #[test]
    fn missing_account_is_reported() {
        let fetcher = MemoryFetcher::new();
        let address = Pubkey::new_unique();
        match fetch_token_account(&fetcher, &address) {
            Err(ClientError::AccountNotFound(a)) => assert_eq!(a, address),
            Err(e) => panic!("unexpected {:?}", e),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn token_account_owned_by_another_program_is_rejected() {
        let mut fetcher = MemoryFetcher::new();
        let address = Pubkey::new_unique();
        fetcher.insert(address, Pubkey::new_unique(), vec![0u8; SplTokenAccount::LEN]);
        assert!(matches!(
            fetch_token_account(&fetcher, &address),
            Err(ClientError::WrongOwner { .. })
        ));
    }

    #[test]
    fn fetch_errors_carry_the_address() {
        let address = Pubkey::new_unique();
        match fetch_account(&Unreachable, &address) {
            Err(ClientError::Fetch { address: a, cause }) => {
                assert_eq!(a, address);
                assert_eq!(cause.to_string(), "connection refused");
            }
            Err(e) => panic!("unexpected {:?}", e),
            Ok(_) => panic!("expected an error"),
        }
    }
}
