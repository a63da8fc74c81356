use crate::*;

/// State of a single staking option, keyed by name and base mint.
///
/// Owned and written by the program only. Field order is the on-chain layout.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct State {
    pub so_name: String,
    pub authority: Pubkey,
    pub options_available: u64,
    pub option_expiration: u64,       // unix seconds
    pub subscription_period_end: u64, // unix seconds
    pub base_decimals: u8,
    pub quote_vault_bump: u8,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub quote_account: Pubkey,
    pub lot_size: u64,
    pub state_bump: u8,
    pub vault_bump: u8,
    pub strikes: Vec<u64>,
    pub issue_authority: Pubkey, // default when unset
}

impl State {
    pub fn issue_authority(&self) -> Option<Pubkey> {
        if self.issue_authority == Pubkey::default() {
            None
        } else {
            Some(self.issue_authority)
        }
    }

    pub fn has_strike(&self, strike: u64) -> bool {
        self.strikes.contains(&strike)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.option_expiration
    }

    pub fn is_subscription_open(&self, now: u64) -> bool {
        now < self.subscription_period_end
    }
}
