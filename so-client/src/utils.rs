use crate::error::{ClientError, ClientResult};
use crate::fetch::FetchedAccount;
use crate::so_constants::DISCRIMINATOR_SIZE;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

#[macro_export]
macro_rules! wrap_error {
    ($err:expr) => {{
        tracing::debug!("Error thrown at {}:{}", file!(), line!());
        $err
    }};
}

/// Anchor instruction discriminator, `sha256("<namespace>:<name>")[..8]`.
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);

    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..DISCRIMINATOR_SIZE]);
    sighash
}

/// Decodes an account after checking it is owned by `expected`.
pub fn deserialize_account<T: AccountDeserialize>(
    address: &Pubkey,
    account: &FetchedAccount,
    expected: &Pubkey,
) -> ClientResult<T> {
    let expected = *expected;
    if account.owner != expected {
        return wrap_error!(Err(ClientError::WrongOwner {
            address: *address,
            owner: account.owner,
            expected,
        }));
    }
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(|e| ClientError::Decode {
        address: *address,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sighash_matches_anchor_global_namespace() {
        assert_eq!(
            sighash("global", "config"),
            [173, 245, 21, 220, 175, 33, 9, 35]
        );
        assert_eq!(sighash("account", "State"), [216, 146, 107, 94, 104, 75, 182, 177]);
    }
}
