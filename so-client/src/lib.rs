//! Client for the Staking Options program.
//!
//! Derives the program's addresses and assembles its instructions. Nothing here
//! signs or sends transactions; account reads go through [`fetch::AccountFetcher`].
//!
//! ```rust
//! use anchor_lang::prelude::Pubkey;
//! use so_client::StakingOptions;
//!
//! let so = StakingOptions::default();
//! let base_mint = Pubkey::new_unique();
//! let state = so.state("DUAL-SO-TEST", &base_mint).unwrap();
//! let option_mint = so.so_mint(1_000_000, "DUAL-SO-TEST", &base_mint).unwrap();
//! assert_ne!(state, option_mint);
//! ```

use anchor_lang::prelude::*;

pub mod address;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod idl;
pub mod pda;
pub mod so_account;
pub mod so_client;
pub mod so_constants;
pub mod utils;

pub use crate::client::{ConfigParams, ConfigVersion, StakingOptions};
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, ClientResult, StakingOptionsError};
pub use crate::fetch::{AccountFetcher, FetchedAccount, MemoryFetcher};
pub use crate::so_account::State;

declare_id!("4yx1NJ4Vqf2zT1oVLk4SySBhhDJXmXFt88ncm4gPxtL7");
