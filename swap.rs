//! Swap instruction assembly.
//!
//! Builds the ordered instruction sequence for a Whirlpool swap paid in
//! wrapped SOL: account setup, the `swap_v2` instruction itself, account
//! teardown, and recovery of the rent the fee payer advanced.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};

use crate::{
    constants::{memo_program_id, native_mint, spl_token_program_id, MAX_SQRT_PRICE, MIN_SQRT_PRICE},
    context::WhirlpoolsContext,
    quote::{ResolvedPool, SwapQuote},
    state::TICK_ARRAY_SIZE,
    types::SwapHelperError,
};

/// Anchor discriminator for the "swap_v2" instruction
/// Verified against the on-chain IDL at whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc
const SWAP_V2_DISCRIMINATOR: [u8; 8] = [43, 4, 237, 11, 26, 201, 30, 98];

/// PDA seeds (verified from the Whirlpool program source)
const TICK_ARRAY_SEED: &[u8] = b"tick_array";
const ORACLE_SEED: &[u8] = b"oracle";

/// Build the ordered instruction sequence for a quoted swap.
///
/// The order is load-bearing for on-chain execution:
/// 1. Create the user's wrapped-SOL associated token account, funded by the
///    fee payer (skipped when `wsol_account_exists`).
/// 2. The `swap_v2` instruction, signed by the user.
/// 3. Close the wrapped-SOL account; its whole balance, including the
///    rent-exemption lamports, lands back on the user.
/// 4. Transfer `rent_exempt_lamports` from the user to the fee payer,
///    recovering what the fee payer advanced in step 1.
///
/// No validation is performed here; amounts and account ownership are the
/// caller's problem, and only instruction-build errors are surfaced.
pub fn get_swap_instructions(
    fee_payer: &Pubkey,
    user: &Pubkey,
    ctx: &WhirlpoolsContext,
    pool: &ResolvedPool,
    quote: &SwapQuote,
    rent_exempt_lamports: u64,
    wsol_account_exists: bool,
) -> Result<Vec<Instruction>, SwapHelperError> {
    let token_program = spl_token_program_id();
    let wsol_mint = native_mint();
    let wsol_account =
        get_associated_token_address_with_program_id(user, &wsol_mint, &token_program);

    let mut instructions = Vec::with_capacity(4);

    if !wsol_account_exists {
        // Idempotent create: the fee payer fronts the rent-exemption lamports
        instructions.push(create_associated_token_account_idempotent(
            fee_payer,
            user,
            &wsol_mint,
            &token_program,
        ));
    }

    instructions.push(build_swap_v2_instruction(user, &ctx.program_id, pool, quote));

    // Closing returns the account's lamports (rent included) to the user
    instructions.push(spl_token_2022::instruction::close_account(
        &token_program,
        &wsol_account,
        user,
        user,
        &[],
    )?);

    // The close handed the advanced rent to the user; send it back
    instructions.push(solana_system_interface::instruction::transfer(
        user,
        fee_payer,
        rent_exempt_lamports,
    ));

    Ok(instructions)
}

/// Build the `swap_v2` instruction for a resolved pool and quote.
///
/// # Account structure (verified from the on-chain IDL)
///
/// 1. token_program_a
/// 2. token_program_b
/// 3. memo_program
/// 4. token_authority (signer)
/// 5. whirlpool (writable)
/// 6. token_mint_a
/// 7. token_mint_b
/// 8. token_owner_account_a (writable)
/// 9. token_vault_a (writable)
/// 10. token_owner_account_b (writable)
/// 11. token_vault_b (writable)
/// 12. tick_array_0 (writable)
/// 13. tick_array_1 (writable)
/// 14. tick_array_2 (writable)
/// 15. oracle (writable)
pub fn build_swap_v2_instruction(
    token_authority: &Pubkey,
    program_id: &Pubkey,
    pool: &ResolvedPool,
    quote: &SwapQuote,
) -> Instruction {
    let state = &pool.state;

    let token_owner_account_a = get_associated_token_address_with_program_id(
        token_authority,
        &state.token_mint_a,
        &pool.token_program_a,
    );
    let token_owner_account_b = get_associated_token_address_with_program_id(
        token_authority,
        &state.token_mint_b,
        &pool.token_program_b,
    );

    let tick_arrays = derive_tick_array_addresses(
        program_id,
        &pool.address,
        state.tick_current_index,
        state.tick_spacing,
        quote.a_to_b,
    );
    let oracle = get_oracle_address(program_id, &pool.address);

    // A->B pushes the price down, B->A pushes it up
    let sqrt_price_limit = if quote.a_to_b {
        MIN_SQRT_PRICE
    } else {
        MAX_SQRT_PRICE
    };

    // Data layout: discriminator + amount + other_amount_threshold
    // + sqrt_price_limit + amount_specified_is_input + a_to_b
    // + remaining_accounts_info (None)
    let mut data = Vec::with_capacity(43);
    data.extend_from_slice(&SWAP_V2_DISCRIMINATOR);
    data.extend_from_slice(&quote.token_in.to_le_bytes());
    data.extend_from_slice(&quote.token_min_out.to_le_bytes());
    data.extend_from_slice(&sqrt_price_limit.to_le_bytes());
    data.push(1); // amount_specified_is_input: exact-in
    data.push(quote.a_to_b as u8);
    data.push(0); // remaining_accounts_info: None

    let accounts = vec![
        AccountMeta::new_readonly(pool.token_program_a, false),
        AccountMeta::new_readonly(pool.token_program_b, false),
        AccountMeta::new_readonly(memo_program_id(), false),
        AccountMeta::new_readonly(*token_authority, true),
        AccountMeta::new(pool.address, false),
        AccountMeta::new_readonly(state.token_mint_a, false),
        AccountMeta::new_readonly(state.token_mint_b, false),
        AccountMeta::new(token_owner_account_a, false),
        AccountMeta::new(state.token_vault_a, false),
        AccountMeta::new(token_owner_account_b, false),
        AccountMeta::new(state.token_vault_b, false),
        AccountMeta::new(tick_arrays[0], false),
        AccountMeta::new(tick_arrays[1], false),
        AccountMeta::new(tick_arrays[2], false),
        AccountMeta::new(oracle, false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

/// Start indexes of the three tick arrays a swap may cross, ordered in the
/// direction of the swap
pub fn tick_array_start_indexes(
    tick_current_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
) -> [i32; 3] {
    let ticks_per_array = TICK_ARRAY_SIZE as i32 * i32::from(tick_spacing);
    let first = tick_current_index.div_euclid(ticks_per_array) * ticks_per_array;
    if a_to_b {
        [first, first - ticks_per_array, first - 2 * ticks_per_array]
    } else {
        [first, first + ticks_per_array, first + 2 * ticks_per_array]
    }
}

/// Addresses of the three tick arrays a swap may cross
pub fn derive_tick_array_addresses(
    program_id: &Pubkey,
    whirlpool: &Pubkey,
    tick_current_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
) -> [Pubkey; 3] {
    tick_array_start_indexes(tick_current_index, tick_spacing, a_to_b)
        .map(|start| get_tick_array_address(program_id, whirlpool, start))
}

/// Derive the tick array PDA for a start index
pub fn get_tick_array_address(
    program_id: &Pubkey,
    whirlpool: &Pubkey,
    start_tick_index: i32,
) -> Pubkey {
    // The start index is encoded as its decimal string in the seeds
    Pubkey::find_program_address(
        &[
            TICK_ARRAY_SEED,
            whirlpool.as_ref(),
            start_tick_index.to_string().as_bytes(),
        ],
        program_id,
    )
    .0
}

/// Derive the oracle PDA for a pool
pub fn get_oracle_address(program_id: &Pubkey, whirlpool: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[ORACLE_SEED, whirlpool.as_ref()], program_id).0
}
