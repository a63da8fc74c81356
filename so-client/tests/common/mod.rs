#![allow(dead_code)]

use anchor_lang::prelude::Pubkey;
use so_client::{MemoryFetcher, StakingOptions, State};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

pub const SO_NAME: &str = "DUAL-SO-TEST";
pub const STRIKE: u64 = 1_000_000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn key(s: &str) -> Pubkey {
    Pubkey::from_str(s).unwrap()
}

pub fn base_mint() -> Pubkey {
    key("So11111111111111111111111111111111111111112")
}

pub fn quote_mint() -> Pubkey {
    key("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
}

/// Wallet and token accounts of one user, plus the project that configured the SO.
pub struct Fixture {
    pub so: StakingOptions,
    pub fetcher: MemoryFetcher,
    pub authority: Pubkey,
    pub project_quote_account: Pubkey,
    pub user_base_account: Pubkey,
    pub user_so_account: Pubkey,
    pub user_reverse_so_account: Pubkey,
    pub user_quote_account: Pubkey,
    pub state: State,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        let so = StakingOptions::default();
        let authority = Pubkey::new_unique();
        let project_quote_account = Pubkey::new_unique();
        let user_base_account = Pubkey::new_unique();
        let user_so_account = Pubkey::new_unique();
        let user_reverse_so_account = Pubkey::new_unique();
        let user_quote_account = Pubkey::new_unique();

        let state = State {
            so_name: SO_NAME.to_string(),
            authority,
            options_available: 1_000_000_000,
            option_expiration: 1_700_000_000,
            subscription_period_end: 1_690_000_000,
            base_decimals: 9,
            quote_vault_bump: 255,
            base_mint: base_mint(),
            quote_mint: quote_mint(),
            quote_account: project_quote_account,
            lot_size: 1_000_000,
            state_bump: 252,
            vault_bump: 253,
            strikes: vec![STRIKE],
            issue_authority: Pubkey::default(),
        };

        let so_mint = so.so_mint(STRIKE, SO_NAME, &base_mint()).unwrap();
        let reverse_mint = so.so_reverse_mint(STRIKE, SO_NAME, &base_mint()).unwrap();
        let user = Pubkey::new_unique();

        let mut fetcher = MemoryFetcher::new();
        fetcher.insert_token_account(user_base_account, base_mint(), user, 0);
        fetcher.insert_token_account(user_so_account, so_mint, user, 10);
        fetcher.insert_token_account(user_reverse_so_account, reverse_mint, user, 0);
        fetcher.insert_token_account(user_quote_account, quote_mint(), user, 10_000_000);
        fetcher
            .insert_state(so.state(SO_NAME, &base_mint()).unwrap(), so.program_id(), &state)
            .unwrap();

        Self {
            so,
            fetcher,
            authority,
            project_quote_account,
            user_base_account,
            user_so_account,
            user_reverse_so_account,
            user_quote_account,
            state,
        }
    }
}
