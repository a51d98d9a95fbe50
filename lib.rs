//! # Orca Whirlpool Swap Helpers
//!
//! Glue for building wrapped-SOL swaps against Orca Whirlpools: route a
//! mint pair to one of a small set of known pools, quote an exact-in swap
//! from live on-chain state, and assemble the full instruction sequence
//! (account setup, `swap_v2`, teardown, rent recovery). A raw-transaction
//! simulation entry point rounds out the submission pipeline.
//!
//! ## Scope
//!
//! Pool routing is a closed enumeration, not discovery: USDC and USDT
//! pairs map to their SOL pools and everything else lands on a single
//! fallback pool. The concentrated liquidity math is delegated to
//! `orca_whirlpools_core`; this crate only fetches and decodes the state
//! that math needs.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use orca_swap_helpers::{get_pool_and_quote, get_swap_instructions, get_whirlpools_context};
//! use solana_client::nonblocking::rpc_client::RpcClient;
//!
//! let rpc = Arc::new(RpcClient::new(rpc_url));
//! let ctx = get_whirlpools_context(rpc);
//!
//! let (pool, quote) =
//!     get_pool_and_quote(&ctx, &sol_mint, &usdc_mint, &sol_mint, amount, 100).await?;
//! let instructions =
//!     get_swap_instructions(&fee_payer, &user, &ctx, &pool, &quote, rent, false)?;
//! ```
//!
//! All addresses are mainnet; see [`constants`].

pub mod constants;
pub mod context;
pub mod discriminator;
pub mod pool;
pub mod quote;
pub mod simulator;
pub mod state;
pub mod swap;
pub mod types;

pub use constants::{
    fallback_whirlpool, memo_program_id, native_mint, sol_usdc_whirlpool, sol_usdt_whirlpool,
    spl_token_program_id, token_2022_program_id, usdc_mint, usdt_mint, whirlpool_program_id,
    whirlpools_config, DEFAULT_TICK_SPACING, LOG_TAG, MAX_SQRT_PRICE, MIN_SQRT_PRICE,
};
pub use context::{get_whirlpools_context, WhirlpoolsContext};
pub use discriminator::{account_discriminator, instruction_discriminator};
pub use pool::{get_ab_mints, get_pool_address, PoolTable};
pub use quote::{get_pool_and_quote, ResolvedPool, SwapQuote};
pub use simulator::{
    deserialize_raw_transaction, simulate_raw_transaction, simulate_raw_transaction_with_mode,
    SimulationMode,
};
pub use state::{TickArray, Whirlpool};
pub use swap::{build_swap_v2_instruction, get_swap_instructions};
pub use types::{SimulationOutcome, SwapHelperError};
