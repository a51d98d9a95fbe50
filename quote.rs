//! Quote fetching: resolve a pool, load its on-chain state, and price an
//! exact-in swap.
//!
//! The swap math itself is not reimplemented here; pool and tick-array
//! state is handed to `orca_whirlpools_core`, which owns the concentrated
//! liquidity arithmetic.

use orca_whirlpools_core::{
    swap_quote_by_input_token, TickArrayFacade, TickFacade, WhirlpoolFacade,
    WhirlpoolRewardInfoFacade,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    context::WhirlpoolsContext,
    state::{Tick, TickArray, Whirlpool},
    swap::{derive_tick_array_addresses, tick_array_start_indexes},
    types::SwapHelperError,
};

/// A pool resolved from the routing table together with its decoded state
/// and the token programs owning each mint.
#[derive(Debug, Clone)]
pub struct ResolvedPool {
    pub address: Pubkey,
    pub state: Whirlpool,
    /// Owner of `state.token_mint_a`; legacy SPL Token or Token-2022
    pub token_program_a: Pubkey,
    /// Owner of `state.token_mint_b`
    pub token_program_b: Pubkey,
}

/// An exact-in quote, oriented by swap direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// True when the input token is the pool's token A
    pub a_to_b: bool,
    pub token_in: u64,
    pub token_est_out: u64,
    /// Estimate after slippage tolerance; used as the on-chain threshold
    pub token_min_out: u64,
    pub trade_fee: u64,
}

/// Resolve the pool for a mint pair and quote an exact-in swap against its
/// current on-chain state.
///
/// `mint_a` and `mint_b` identify the pair (canonical order not required);
/// `source_mint` names the input side. `slippage_tolerance_bps` is in basis
/// points (100 = 1%).
///
/// Tick arrays the swap may cross are fetched alongside the pool; an array
/// that does not exist on chain yet is treated as uninitialized rather than
/// failing the quote.
pub async fn get_pool_and_quote(
    ctx: &WhirlpoolsContext,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    source_mint: &Pubkey,
    amount: u64,
    slippage_tolerance_bps: u16,
) -> Result<(ResolvedPool, SwapQuote), SwapHelperError> {
    let pool_address = ctx.pools.lookup(mint_a, mint_b);

    let pool_account = ctx.rpc.get_account(&pool_address).await?;
    let state = Whirlpool::from_bytes(&pool_account.data).map_err(|source| {
        SwapHelperError::AccountDeserialize {
            kind: "Whirlpool",
            address: pool_address,
            source,
        }
    })?;

    // The mint owners tell us which token program each swap leg uses
    let mint_accounts = ctx
        .rpc
        .get_multiple_accounts(&[state.token_mint_a, state.token_mint_b])
        .await?;
    let token_program_a = mint_accounts[0]
        .as_ref()
        .map(|account| account.owner)
        .ok_or(SwapHelperError::AccountNotFound(state.token_mint_a))?;
    let token_program_b = mint_accounts[1]
        .as_ref()
        .map(|account| account.owner)
        .ok_or(SwapHelperError::AccountNotFound(state.token_mint_b))?;

    let a_to_b = source_mint == &state.token_mint_a;

    let start_indexes =
        tick_array_start_indexes(state.tick_current_index, state.tick_spacing, a_to_b);
    let tick_array_addresses = derive_tick_array_addresses(
        &ctx.program_id,
        &pool_address,
        state.tick_current_index,
        state.tick_spacing,
        a_to_b,
    );
    let tick_array_accounts = ctx
        .rpc
        .get_multiple_accounts(&tick_array_addresses)
        .await?;

    let mut tick_arrays = [
        empty_tick_array_facade(start_indexes[0]),
        empty_tick_array_facade(start_indexes[1]),
        empty_tick_array_facade(start_indexes[2]),
    ];
    for i in 0..3 {
        if let Some(account) = &tick_array_accounts[i] {
            let array = TickArray::from_bytes(&account.data).map_err(|source| {
                SwapHelperError::AccountDeserialize {
                    kind: "TickArray",
                    address: tick_array_addresses[i],
                    source,
                }
            })?;
            tick_arrays[i] = tick_array_facade(&array);
        }
    }

    let quote = swap_quote_by_input_token(
        amount,
        a_to_b,
        slippage_tolerance_bps,
        whirlpool_facade(&state),
        tick_arrays.into(),
        None,
        None,
    )
    .map_err(|e| SwapHelperError::Quote(format!("{e:?}")))?;

    Ok((
        ResolvedPool {
            address: pool_address,
            state,
            token_program_a,
            token_program_b,
        },
        SwapQuote {
            a_to_b,
            token_in: quote.token_in,
            token_est_out: quote.token_est_out,
            token_min_out: quote.token_min_out,
            trade_fee: quote.trade_fee,
        },
    ))
}

fn whirlpool_facade(state: &Whirlpool) -> WhirlpoolFacade {
    WhirlpoolFacade {
        tick_spacing: state.tick_spacing,
        fee_rate: state.fee_rate,
        protocol_fee_rate: state.protocol_fee_rate,
        liquidity: state.liquidity,
        sqrt_price: state.sqrt_price,
        tick_current_index: state.tick_current_index,
        fee_growth_global_a: state.fee_growth_global_a,
        fee_growth_global_b: state.fee_growth_global_b,
        reward_last_updated_timestamp: state.reward_last_updated_timestamp,
        reward_infos: state.reward_infos.map(|info| WhirlpoolRewardInfoFacade {
            emissions_per_second_x64: info.emissions_per_second_x64,
            growth_global_x64: info.growth_global_x64,
        }),
    }
}

fn tick_array_facade(array: &TickArray) -> TickArrayFacade {
    TickArrayFacade {
        start_tick_index: array.start_tick_index,
        ticks: array.ticks.map(tick_facade),
    }
}

fn tick_facade(tick: Tick) -> TickFacade {
    TickFacade {
        initialized: tick.initialized,
        liquidity_net: tick.liquidity_net,
        liquidity_gross: tick.liquidity_gross,
        fee_growth_outside_a: tick.fee_growth_outside_a,
        fee_growth_outside_b: tick.fee_growth_outside_b,
        reward_growths_outside: tick.reward_growths_outside,
    }
}

/// Facade for a tick array account that does not exist on chain
fn empty_tick_array_facade(start_tick_index: i32) -> TickArrayFacade {
    TickArrayFacade {
        start_tick_index,
        ticks: std::array::from_fn(|_| TickFacade {
            initialized: false,
            liquidity_net: 0,
            liquidity_gross: 0,
            fee_growth_outside_a: 0,
            fee_growth_outside_b: 0,
            reward_growths_outside: [0; 3],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{native_mint, usdc_mint};
    use crate::state::sample_whirlpool;

    #[test]
    fn test_whirlpool_facade_mirrors_state() {
        let state = sample_whirlpool(native_mint(), usdc_mint());
        let facade = whirlpool_facade(&state);

        assert_eq!(facade.tick_spacing, state.tick_spacing);
        assert_eq!(facade.fee_rate, state.fee_rate);
        assert_eq!(facade.liquidity, state.liquidity);
        assert_eq!(facade.sqrt_price, state.sqrt_price);
        assert_eq!(facade.tick_current_index, state.tick_current_index);
    }

    #[test]
    fn test_empty_tick_array_facade_is_uninitialized() {
        let facade = empty_tick_array_facade(-5632);
        assert_eq!(facade.start_tick_index, -5632);
        assert!(facade.ticks.iter().all(|t| !t.initialized && t.liquidity_gross == 0));
    }

    #[test]
    fn test_quote_against_synthetic_pool() {
        // A pool at sqrt_price 2^64 (price 1.0) with flat liquidity and no
        // initialized ticks still quotes within the current tick array
        let state = sample_whirlpool(native_mint(), usdc_mint());
        let tick_arrays = [
            empty_tick_array_facade(0),
            empty_tick_array_facade(-5632),
            empty_tick_array_facade(-11264),
        ];

        let quote =
            swap_quote_by_input_token(1_000, true, 100, whirlpool_facade(&state), tick_arrays.into(), None, None)
                .unwrap();

        assert_eq!(quote.token_in, 1_000);
        assert!(quote.token_est_out > 0);
        assert!(quote.token_min_out <= quote.token_est_out);
        // fee_rate 3000 = 0.3% of the input
        assert_eq!(quote.trade_fee, 3);
    }

    #[tokio::test]
    #[ignore] // requires RPC_URL pointing at a mainnet RPC endpoint
    async fn test_mainnet_sol_usdc_quote() {
        use crate::context::get_whirlpools_context;
        use solana_client::nonblocking::rpc_client::RpcClient;
        use std::sync::Arc;

        let rpc_url = std::env::var("RPC_URL").expect("RPC_URL must be set");
        let ctx = get_whirlpools_context(Arc::new(RpcClient::new(rpc_url)));

        let sol = native_mint();
        let usdc = usdc_mint();
        // 0.1 SOL in, 1% slippage
        let (pool, quote) = get_pool_and_quote(&ctx, &sol, &usdc, &sol, 100_000_000, 100)
            .await
            .unwrap();

        println!("pool: {}", pool.address);
        println!("quote: {quote:?}");

        assert_eq!(pool.address, crate::constants::sol_usdc_whirlpool());
        assert!(quote.token_est_out > 0);
        assert!(quote.token_min_out < quote.token_est_out);
    }
}
