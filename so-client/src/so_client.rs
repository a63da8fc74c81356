use crate::*;
use anchor_lang::solana_program::instruction::Instruction;
use so_interface::instruction_interface;

/// Staking Options program interface.
///
/// Declares every instruction of the program with its arguments in wire order.
/// `#[instruction_interface]` turns each method into a builder in
/// [`staking_options_interface`].
#[instruction_interface]
pub trait StakingOptionsInterface<T: ToAccountMetas> {
    fn add_tokens(accounts: T, num_tokens_to_add: u64) -> Result<Instruction>;
    fn config(
        accounts: T,
        option_expiration: u64,
        subscription_period_end: u64,
        num_tokens: u64,
        lot_size: u64,
        so_name: String,
    ) -> Result<Instruction>;
    fn config_v2(
        accounts: T,
        option_expiration: u64,
        subscription_period_end: u64,
        num_tokens: u64,
        lot_size: u64,
        so_name: String,
    ) -> Result<Instruction>;
    fn config_v3(
        accounts: T,
        option_expiration: u64,
        subscription_period_end: u64,
        num_tokens: u64,
        lot_size: u64,
        so_name: String,
    ) -> Result<Instruction>;
    fn exercise(accounts: T, amount: u64, strike: u64) -> Result<Instruction>;
    fn exercise_reversible(accounts: T, amount: u64, strike: u64) -> Result<Instruction>;
    fn reverse_exercise(accounts: T, amount: u64, strike: u64) -> Result<Instruction>;
    fn init_strike(accounts: T, strike: u64) -> Result<Instruction>;
    fn init_strike_with_payer(accounts: T, strike: u64) -> Result<Instruction>;
    fn init_strike_reversible(accounts: T, strike: u64) -> Result<Instruction>;
    fn issue(accounts: T, amount: u64, strike: u64) -> Result<Instruction>;
    fn name_token(accounts: T, strike: u64) -> Result<Instruction>;
    fn withdraw(accounts: T) -> Result<Instruction>;
    fn withdraw_all(accounts: T) -> Result<Instruction>;
}

/// Name of the instruction whose discriminator prefixes `data`, if any.
pub fn instruction_name(data: &[u8]) -> Option<&'static str> {
    let discriminator = data.get(..8)?;
    staking_options_interface::INSTRUCTIONS
        .iter()
        .find(|(_, d)| d.as_slice() == discriminator)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::*;

    #[test]
    fn generated_discriminators_match_runtime_sighash() {
        for (name, discriminator) in staking_options_interface::INSTRUCTIONS {
            assert_eq!(utils::sighash("global", name), *discriminator, "{}", name);
        }
        assert_eq!(staking_options_interface::INSTRUCTIONS.len(), 14);
    }

    #[test]
    fn withdraw_has_no_argument_bytes() {
        let accounts = Withdraw {
            authority: Pubkey::new_unique(),
            state: Pubkey::new_unique(),
            base_vault: Pubkey::new_unique(),
            base_account: Pubkey::new_unique(),
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::solana_program::system_program::ID,
        };
        let ix = staking_options_interface::withdraw(&crate::ID, &accounts).unwrap();
        assert_eq!(ix.data, staking_options_interface::WITHDRAW.to_vec());
        assert_eq!(instruction_name(&ix.data), Some("withdraw"));
    }

    #[test]
    fn unknown_discriminator_has_no_name() {
        assert_eq!(instruction_name(&[0u8; 8]), None);
        assert_eq!(instruction_name(&[1, 2, 3]), None);
    }
}
