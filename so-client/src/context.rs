use crate::*;
use anchor_lang::solana_program::instruction::AccountMeta;

// Account lists of every Staking Options instruction, in the order the program
// expects them. Each field is tagged `(is_mut, is_signer)`.
macro_rules! instruction_accounts {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* $field:ident: ($is_mut:literal, $is_signer:literal)),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: Pubkey,)*
        }

        impl $name {
            /// Field names in account order.
            pub const ACCOUNT_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl ToAccountMetas for $name {
            fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
                vec![$(
                    if $is_mut {
                        AccountMeta::new(self.$field, $is_signer)
                    } else {
                        AccountMeta::new_readonly(self.$field, $is_signer)
                    }
                ),*]
            }
        }
    )*};
}

instruction_accounts! {
    pub struct AddTokens {
        authority: (false, true),
        state: (true, false),
        /// Where the base tokens are held. Controlled by the program.
        base_vault: (true, false),
        /// Where the additional tokens come from.
        base_account: (true, false),
        token_program: (false, false),
    }

    pub struct Config {
        /// Pays for the new accounts. Does not have to be the SO authority.
        authority: (true, true),
        so_authority: (false, false),
        state: (true, false),
        base_vault: (true, false),
        base_account: (true, false),
        /// Receives the exercise proceeds.
        quote_account: (false, false),
        base_mint: (false, false),
        quote_mint: (false, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct ConfigV2 {
        authority: (true, true),
        so_authority: (false, false),
        /// Optional. The program id stands in when there is none.
        issue_authority: (false, false),
        state: (true, false),
        base_vault: (true, false),
        base_account: (true, false),
        quote_account: (false, false),
        base_mint: (false, false),
        quote_mint: (false, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct ConfigV3 {
        authority: (true, true),
        so_authority: (false, false),
        /// Optional. The program id stands in when there is none.
        issue_authority: (false, false),
        state: (true, false),
        base_vault: (true, false),
        quote_vault: (true, false),
        base_account: (true, false),
        quote_account: (false, false),
        base_mint: (false, false),
        quote_mint: (false, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct Exercise {
        authority: (false, true),
        state: (true, false),
        user_so_account: (true, false),
        option_mint: (true, false),
        user_quote_account: (true, false),
        project_quote_account: (true, false),
        fee_quote_account: (true, false),
        base_vault: (true, false),
        user_base_account: (true, false),
        token_program: (false, false),
    }

    pub struct ExerciseReversible {
        authority: (false, true),
        state: (true, false),
        user_so_account: (true, false),
        option_mint: (true, false),
        user_reverse_so_account: (true, false),
        reverse_option_mint: (true, false),
        user_quote_account: (true, false),
        quote_vault: (true, false),
        base_vault: (true, false),
        user_base_account: (true, false),
        token_program: (false, false),
    }

    pub struct ReverseExercise {
        authority: (false, true),
        state: (true, false),
        user_so_account: (true, false),
        option_mint: (true, false),
        user_reverse_so_account: (true, false),
        reverse_option_mint: (true, false),
        user_quote_account: (true, false),
        quote_vault: (true, false),
        base_vault: (true, false),
        user_base_account: (true, false),
        token_program: (false, false),
    }

    pub struct InitStrike {
        authority: (true, true),
        state: (true, false),
        option_mint: (true, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct InitStrikeWithPayer {
        authority: (true, true),
        payer: (true, true),
        state: (true, false),
        option_mint: (true, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct InitStrikeReversible {
        authority: (true, true),
        payer: (true, true),
        state: (true, false),
        reverse_option_mint: (true, false),
        option_mint: (true, false),
        token_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct Issue {
        authority: (false, true),
        state: (true, false),
        option_mint: (true, false),
        user_so_account: (true, false),
        token_program: (false, false),
    }

    pub struct NameToken {
        authority: (false, true),
        payer: (true, true),
        state: (false, false),
        option_mint: (false, false),
        option_mint_metadata_account: (true, false),
        token_metadata_program: (false, false),
        system_program: (false, false),
        rent: (false, false),
    }

    pub struct Withdraw {
        authority: (true, true),
        state: (true, false),
        base_vault: (true, false),
        /// Where the remaining base tokens are returned to.
        base_account: (true, false),
        token_program: (false, false),
        system_program: (false, false),
    }

    pub struct WithdrawAll {
        authority: (true, true),
        state: (true, false),
        base_vault: (true, false),
        base_account: (true, false),
        quote_vault: (true, false),
        quote_account: (true, false),
        /// Protocol fee account for the quote mint.
        fee_quote_account: (true, false),
        token_program: (false, false),
        system_program: (false, false),
    }
}
