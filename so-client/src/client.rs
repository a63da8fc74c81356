//! High-level client.
//!
//! [`StakingOptions`] resolves every account an instruction needs from a few
//! user-facing inputs (SO name, base mint, strike) and hands the account list
//! to the generated builders in [`crate::so_client`].

use crate::config::ClientConfig;
use crate::context::*;
use crate::error::ClientResult;
use crate::fetch::{fetch_state, fetch_token_account, AccountFetcher};
use crate::pda;
use crate::so_account::State;
use crate::so_client::staking_options_interface;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::message::Message;
use anchor_lang::solana_program::{system_program, sysvar};
use tracing::{debug, warn};

/// Revision of the `config` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigVersion {
    /// `config`: base vault only.
    V1,
    /// `config_v2`: adds an optional issue authority.
    V2,
    /// `config_v3`: adds the quote vault used by reversible options.
    V3,
}

/// Inputs shared by every `config` revision.
#[derive(Clone, Debug)]
pub struct ConfigParams {
    pub option_expiration: u64,
    pub subscription_period_end: u64,
    pub num_tokens: u64,
    pub lot_size: u64,
    pub name: String,
    pub authority: Pubkey,
    /// Defaults to `authority`.
    pub so_authority: Option<Pubkey>,
    /// Ignored by `config`. Defaults to the program id for `config_v2` and `config_v3`.
    pub issue_authority: Option<Pubkey>,
    pub base_mint: Pubkey,
    pub base_account: Pubkey,
    pub quote_mint: Pubkey,
    pub quote_account: Pubkey,
}

/// Client for the Staking Options program.
#[derive(Clone, Debug, Default)]
pub struct StakingOptions {
    config: ClientConfig,
}

impl StakingOptions {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn program_id(&self) -> Pubkey {
        self.config.program_id
    }

    pub fn state(&self, name: &str, base_mint: &Pubkey) -> ClientResult<Pubkey> {
        Ok(pda::state(&self.config.program_id, name, base_mint)?.0)
    }

    /// Fetches and decodes the state account for `name` and `base_mint`.
    pub fn get_state(
        &self,
        fetcher: &dyn AccountFetcher,
        name: &str,
        base_mint: &Pubkey,
    ) -> ClientResult<State> {
        let state = self.state(name, base_mint)?;
        fetch_state(fetcher, &state, &self.config.program_id)
    }

    pub fn so_mint(&self, strike: u64, name: &str, base_mint: &Pubkey) -> ClientResult<Pubkey> {
        let state = self.state(name, base_mint)?;
        Ok(pda::option_mint(&self.config.program_id, &state, strike)?.0)
    }

    pub fn so_reverse_mint(
        &self,
        strike: u64,
        name: &str,
        base_mint: &Pubkey,
    ) -> ClientResult<Pubkey> {
        let state = self.state(name, base_mint)?;
        Ok(pda::reverse_option_mint(&self.config.program_id, &state, strike)?.0)
    }

    pub fn base_vault(&self, name: &str, base_mint: &Pubkey) -> ClientResult<Pubkey> {
        Ok(pda::base_vault(&self.config.program_id, name, base_mint)?.0)
    }

    pub fn quote_vault(&self, name: &str, base_mint: &Pubkey) -> ClientResult<Pubkey> {
        Ok(pda::quote_vault(&self.config.program_id, name, base_mint)?.0)
    }

    /// Protocol fee account for `mint`.
    pub fn fee_account(&self, mint: &Pubkey) -> Pubkey {
        pda::fee_account(&self.config.fee_owner, mint)
    }

    /// Token metadata account of the option mint for `strike`.
    pub fn option_metadata(
        &self,
        strike: u64,
        name: &str,
        base_mint: &Pubkey,
    ) -> ClientResult<Pubkey> {
        let option_mint = self.so_mint(strike, name, base_mint)?;
        Ok(pda::option_metadata(&option_mint)?.0)
    }

    fn mint_of(
        &self,
        fetcher: &dyn AccountFetcher,
        token_account: &Pubkey,
    ) -> ClientResult<Pubkey> {
        Ok(fetch_token_account(fetcher, token_account)?.mint)
    }

    fn so_authority(params: &ConfigParams) -> Pubkey {
        params.so_authority.unwrap_or(params.authority)
    }

    fn issue_authority(&self, params: &ConfigParams) -> Pubkey {
        params.issue_authority.unwrap_or(self.config.program_id)
    }

    pub fn create_config_instruction(&self, params: &ConfigParams) -> ClientResult<Instruction> {
        if params.issue_authority.is_some() {
            warn!(so_name = %params.name, "config does not take an issue authority, ignoring it");
        }
        let accounts = Config {
            authority: params.authority,
            so_authority: Self::so_authority(params),
            state: self.state(&params.name, &params.base_mint)?,
            base_vault: self.base_vault(&params.name, &params.base_mint)?,
            base_account: params.base_account,
            quote_account: params.quote_account,
            base_mint: params.base_mint,
            quote_mint: params.quote_mint,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(
            instruction = "config",
            so_name = %params.name,
            state = %accounts.state,
            "building instruction"
        );
        Ok(staking_options_interface::config(
            &self.config.program_id,
            &accounts,
            params.option_expiration,
            params.subscription_period_end,
            params.num_tokens,
            params.lot_size,
            params.name.clone(),
        )?)
    }

    pub fn create_config_v2_instruction(&self, params: &ConfigParams) -> ClientResult<Instruction> {
        let accounts = ConfigV2 {
            authority: params.authority,
            so_authority: Self::so_authority(params),
            issue_authority: self.issue_authority(params),
            state: self.state(&params.name, &params.base_mint)?,
            base_vault: self.base_vault(&params.name, &params.base_mint)?,
            base_account: params.base_account,
            quote_account: params.quote_account,
            base_mint: params.base_mint,
            quote_mint: params.quote_mint,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(
            instruction = "config_v2",
            so_name = %params.name,
            state = %accounts.state,
            "building instruction"
        );
        Ok(staking_options_interface::config_v2(
            &self.config.program_id,
            &accounts,
            params.option_expiration,
            params.subscription_period_end,
            params.num_tokens,
            params.lot_size,
            params.name.clone(),
        )?)
    }

    pub fn create_config_v3_instruction(&self, params: &ConfigParams) -> ClientResult<Instruction> {
        let accounts = ConfigV3 {
            authority: params.authority,
            so_authority: Self::so_authority(params),
            issue_authority: self.issue_authority(params),
            state: self.state(&params.name, &params.base_mint)?,
            base_vault: self.base_vault(&params.name, &params.base_mint)?,
            quote_vault: self.quote_vault(&params.name, &params.base_mint)?,
            base_account: params.base_account,
            quote_account: params.quote_account,
            base_mint: params.base_mint,
            quote_mint: params.quote_mint,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(
            instruction = "config_v3",
            so_name = %params.name,
            state = %accounts.state,
            "building instruction"
        );
        Ok(staking_options_interface::config_v3(
            &self.config.program_id,
            &accounts,
            params.option_expiration,
            params.subscription_period_end,
            params.num_tokens,
            params.lot_size,
            params.name.clone(),
        )?)
    }

    pub fn create_config_instruction_for(
        &self,
        version: ConfigVersion,
        params: &ConfigParams,
    ) -> ClientResult<Instruction> {
        match version {
            ConfigVersion::V1 => self.create_config_instruction(params),
            ConfigVersion::V2 => self.create_config_v2_instruction(params),
            ConfigVersion::V3 => self.create_config_v3_instruction(params),
        }
    }

    pub fn create_init_strike_instruction(
        &self,
        strike: u64,
        name: &str,
        authority: &Pubkey,
        base_mint: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = InitStrike {
            authority: *authority,
            state: self.state(name, base_mint)?,
            option_mint: self.so_mint(strike, name, base_mint)?,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(instruction = "init_strike", so_name = name, strike, "building instruction");
        Ok(staking_options_interface::init_strike(&self.config.program_id, &accounts, strike)?)
    }

    pub fn create_init_strike_with_payer_instruction(
        &self,
        strike: u64,
        name: &str,
        authority: &Pubkey,
        payer: &Pubkey,
        base_mint: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = InitStrikeWithPayer {
            authority: *authority,
            payer: *payer,
            state: self.state(name, base_mint)?,
            option_mint: self.so_mint(strike, name, base_mint)?,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(
            instruction = "init_strike_with_payer",
            so_name = name,
            strike,
            "building instruction"
        );
        Ok(staking_options_interface::init_strike_with_payer(
            &self.config.program_id,
            &accounts,
            strike,
        )?)
    }

    pub fn create_init_strike_reversible_instruction(
        &self,
        strike: u64,
        name: &str,
        authority: &Pubkey,
        payer: &Pubkey,
        base_mint: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = InitStrikeReversible {
            authority: *authority,
            payer: *payer,
            state: self.state(name, base_mint)?,
            reverse_option_mint: self.so_reverse_mint(strike, name, base_mint)?,
            option_mint: self.so_mint(strike, name, base_mint)?,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(
            instruction = "init_strike_reversible",
            so_name = name,
            strike,
            "building instruction"
        );
        Ok(staking_options_interface::init_strike_reversible(
            &self.config.program_id,
            &accounts,
            strike,
        )?)
    }

    pub fn create_issue_instruction(
        &self,
        amount: u64,
        strike: u64,
        name: &str,
        authority: &Pubkey,
        base_mint: &Pubkey,
        user_so_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = Issue {
            authority: *authority,
            state: self.state(name, base_mint)?,
            option_mint: self.so_mint(strike, name, base_mint)?,
            user_so_account: *user_so_account,
            token_program: anchor_spl::token::ID,
        };
        debug!(instruction = "issue", so_name = name, amount, strike, "building instruction");
        Ok(staking_options_interface::issue(
            &self.config.program_id,
            &accounts,
            amount,
            strike,
        )?)
    }

    pub fn create_name_token_instruction(
        &self,
        strike: u64,
        name: &str,
        authority: &Pubkey,
        payer: &Pubkey,
        base_mint: &Pubkey,
    ) -> ClientResult<Instruction> {
        let option_mint = self.so_mint(strike, name, base_mint)?;
        let accounts = NameToken {
            authority: *authority,
            payer: *payer,
            state: self.state(name, base_mint)?,
            option_mint,
            option_mint_metadata_account: pda::option_metadata(&option_mint)?.0,
            token_metadata_program: crate::address::token_metadata_program::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        };
        debug!(instruction = "name_token", so_name = name, strike, "building instruction");
        Ok(staking_options_interface::name_token(&self.config.program_id, &accounts, strike)?)
    }

    /// The base mint is read from `base_account`.
    pub fn create_add_tokens_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        amount: u64,
        name: &str,
        authority: &Pubkey,
        base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let base_mint = self.mint_of(fetcher, base_account)?;
        let accounts = AddTokens {
            authority: *authority,
            state: self.state(name, &base_mint)?,
            base_vault: self.base_vault(name, &base_mint)?,
            base_account: *base_account,
            token_program: anchor_spl::token::ID,
        };
        debug!(
            instruction = "add_tokens",
            so_name = name,
            amount,
            %base_mint,
            "building instruction"
        );
        Ok(staking_options_interface::add_tokens(&self.config.program_id, &accounts, amount)?)
    }

    /// The base mint is read from `user_base_account`, the option mint from
    /// `user_so_account`, and the project quote account and quote mint from the
    /// state. Fees go to the protocol fee account of the quote mint.
    #[allow(clippy::too_many_arguments)]
    pub fn create_exercise_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        amount: u64,
        name: &str,
        strike: u64,
        authority: &Pubkey,
        user_so_account: &Pubkey,
        user_quote_account: &Pubkey,
        user_base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let base_mint = self.mint_of(fetcher, user_base_account)?;
        let state = self.state(name, &base_mint)?;
        let state_obj = fetch_state(fetcher, &state, &self.config.program_id)?;
        let option_mint = self.mint_of(fetcher, user_so_account)?;

        let accounts = Exercise {
            authority: *authority,
            state,
            user_so_account: *user_so_account,
            option_mint,
            user_quote_account: *user_quote_account,
            project_quote_account: state_obj.quote_account,
            fee_quote_account: self.fee_account(&state_obj.quote_mint),
            base_vault: self.base_vault(name, &base_mint)?,
            user_base_account: *user_base_account,
            token_program: anchor_spl::token::ID,
        };
        debug!(
            instruction = "exercise",
            so_name = name,
            amount,
            strike,
            %state,
            "building instruction"
        );
        Ok(staking_options_interface::exercise(
            &self.config.program_id,
            &accounts,
            amount,
            strike,
        )?)
    }

    /// The base mint is read from `user_base_account`; both option mints are
    /// derived from `strike`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_exercise_reversible_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        amount: u64,
        name: &str,
        strike: u64,
        authority: &Pubkey,
        user_so_account: &Pubkey,
        user_reverse_so_account: &Pubkey,
        user_quote_account: &Pubkey,
        user_base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = self.reversible_accounts(
            fetcher,
            name,
            strike,
            authority,
            user_so_account,
            user_reverse_so_account,
            user_quote_account,
            user_base_account,
        )?;
        debug!(
            instruction = "exercise_reversible",
            so_name = name,
            amount,
            strike,
            "building instruction"
        );
        Ok(staking_options_interface::exercise_reversible(
            &self.config.program_id,
            &accounts,
            amount,
            strike,
        )?)
    }

    /// Same accounts as [`Self::create_exercise_reversible_instruction`].
    #[allow(clippy::too_many_arguments)]
    pub fn create_reverse_exercise_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        amount: u64,
        name: &str,
        strike: u64,
        authority: &Pubkey,
        user_so_account: &Pubkey,
        user_reverse_so_account: &Pubkey,
        user_quote_account: &Pubkey,
        user_base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let accounts = self.reversible_accounts(
            fetcher,
            name,
            strike,
            authority,
            user_so_account,
            user_reverse_so_account,
            user_quote_account,
            user_base_account,
        )?;
        let accounts = ReverseExercise {
            authority: accounts.authority,
            state: accounts.state,
            user_so_account: accounts.user_so_account,
            option_mint: accounts.option_mint,
            user_reverse_so_account: accounts.user_reverse_so_account,
            reverse_option_mint: accounts.reverse_option_mint,
            user_quote_account: accounts.user_quote_account,
            quote_vault: accounts.quote_vault,
            base_vault: accounts.base_vault,
            user_base_account: accounts.user_base_account,
            token_program: accounts.token_program,
        };
        debug!(
            instruction = "reverse_exercise",
            so_name = name,
            amount,
            strike,
            "building instruction"
        );
        Ok(staking_options_interface::reverse_exercise(
            &self.config.program_id,
            &accounts,
            amount,
            strike,
        )?)
    }

    #[allow(clippy::too_many_arguments)]
    fn reversible_accounts(
        &self,
        fetcher: &dyn AccountFetcher,
        name: &str,
        strike: u64,
        authority: &Pubkey,
        user_so_account: &Pubkey,
        user_reverse_so_account: &Pubkey,
        user_quote_account: &Pubkey,
        user_base_account: &Pubkey,
    ) -> ClientResult<ExerciseReversible> {
        let base_mint = self.mint_of(fetcher, user_base_account)?;
        let state = self.state(name, &base_mint)?;
        Ok(ExerciseReversible {
            authority: *authority,
            state,
            user_so_account: *user_so_account,
            option_mint: pda::option_mint(&self.config.program_id, &state, strike)?.0,
            user_reverse_so_account: *user_reverse_so_account,
            reverse_option_mint: pda::reverse_option_mint(&self.config.program_id, &state, strike)?
                .0,
            user_quote_account: *user_quote_account,
            quote_vault: self.quote_vault(name, &base_mint)?,
            base_vault: self.base_vault(name, &base_mint)?,
            user_base_account: *user_base_account,
            token_program: anchor_spl::token::ID,
        })
    }

    /// The base mint is read from `base_account`.
    pub fn create_withdraw_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        name: &str,
        authority: &Pubkey,
        base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let base_mint = self.mint_of(fetcher, base_account)?;
        let accounts = Withdraw {
            authority: *authority,
            state: self.state(name, &base_mint)?,
            base_vault: self.base_vault(name, &base_mint)?,
            base_account: *base_account,
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
        };
        debug!(instruction = "withdraw", so_name = name, %base_mint, "building instruction");
        Ok(staking_options_interface::withdraw(&self.config.program_id, &accounts)?)
    }

    /// The base mint is read from `base_account`. Quote proceeds go to the
    /// state's quote account, fees to the protocol fee account of the quote mint.
    pub fn create_withdraw_all_instruction(
        &self,
        fetcher: &dyn AccountFetcher,
        name: &str,
        authority: &Pubkey,
        base_account: &Pubkey,
    ) -> ClientResult<Instruction> {
        let base_mint = self.mint_of(fetcher, base_account)?;
        let state = self.state(name, &base_mint)?;
        let state_obj = fetch_state(fetcher, &state, &self.config.program_id)?;
        let accounts = WithdrawAll {
            authority: *authority,
            state,
            base_vault: self.base_vault(name, &base_mint)?,
            base_account: *base_account,
            quote_vault: self.quote_vault(name, &base_mint)?,
            quote_account: state_obj.quote_account,
            fee_quote_account: self.fee_account(&state_obj.quote_mint),
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
        };
        debug!(instruction = "withdraw_all", so_name = name, %state, "building instruction");
        Ok(staking_options_interface::withdraw_all(&self.config.program_id, &accounts)?)
    }
}

/// Unsigned transaction message carrying `instructions`, paid for by `payer`.
pub fn unsigned_message(instructions: &[Instruction], payer: &Pubkey) -> Message {
    Message::new(instructions, Some(payer))
}
