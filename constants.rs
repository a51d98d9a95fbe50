//! Hardcoded constants for Whirlpool swap helpers.
//!
//! Contains the Whirlpool program and config ids, the three supported pool
//! addresses, special-cased mints, and token program ids.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Orca Whirlpool Program ID (mainnet)
pub const WHIRLPOOL_PROGRAM_ID: &str = "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc";

/// Orca Whirlpools Config account (mainnet)
pub const WHIRLPOOLS_CONFIG: &str = "2LecshUwdy9xi7meFgHtFJQNSKk4KdTrcpvaB56dP2NQ";

/// Tick spacing shared by the three supported pools
pub const DEFAULT_TICK_SPACING: u16 = 64;

/// SOL/USDC Whirlpool (mainnet), selected when either mint is USDC
pub const SOL_USDC_WHIRLPOOL: &str = "HJPjoWUrhoZzkNfRpHuieeFk9WcZWjwy6PBjZ81ngndJ";

/// SOL/USDT Whirlpool (mainnet), selected when either mint is USDT
pub const SOL_USDT_WHIRLPOOL: &str = "4fuUiYxTQ6QCrdSq9ouBYcTM7bqSwYTSyLueGZLTy4T4";

/// Fallback Whirlpool for any pair matching neither special-cased mint.
/// The lookup is a closed enumeration; pairs outside the supported ones
/// silently land here and may be routed incorrectly.
pub const FALLBACK_WHIRLPOOL: &str = "7qbRF6YsyGuLUVs6Y1q64bdVrfe4ZcUUz1JRdoVNUJnm";

/// USDC Mint (mainnet)
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// USDT Mint (mainnet)
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

/// Wrapped SOL mint (legacy SPL Token)
pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";

/// SPL Token Program ID
pub const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Token-2022 Program ID
pub const TOKEN_2022_PROGRAM_ID: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";

/// Memo Program ID, required by the `swap_v2` account list
pub const MEMO_PROGRAM_ID: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";

/// Tag callers prepend to log lines produced around these helpers
pub const LOG_TAG: &str = "[whirlpool-swap]";

/// Lowest sqrt price the Whirlpool program accepts (price limit when swapping A->B)
pub const MIN_SQRT_PRICE: u128 = 4_295_048_016;

/// Highest sqrt price the Whirlpool program accepts (price limit when swapping B->A)
pub const MAX_SQRT_PRICE: u128 = 79_226_673_515_401_279_992_447_579_055;

/// Get the Whirlpool program ID
pub fn whirlpool_program_id() -> Pubkey {
    Pubkey::from_str(WHIRLPOOL_PROGRAM_ID).expect("Invalid Whirlpool program ID")
}

/// Get the Whirlpools config account
pub fn whirlpools_config() -> Pubkey {
    Pubkey::from_str(WHIRLPOOLS_CONFIG).expect("Invalid Whirlpools config")
}

/// Get the SOL/USDC pool address
pub fn sol_usdc_whirlpool() -> Pubkey {
    Pubkey::from_str(SOL_USDC_WHIRLPOOL).expect("Invalid SOL/USDC pool address")
}

/// Get the SOL/USDT pool address
pub fn sol_usdt_whirlpool() -> Pubkey {
    Pubkey::from_str(SOL_USDT_WHIRLPOOL).expect("Invalid SOL/USDT pool address")
}

/// Get the fallback pool address
pub fn fallback_whirlpool() -> Pubkey {
    Pubkey::from_str(FALLBACK_WHIRLPOOL).expect("Invalid fallback pool address")
}

/// Get the USDC mint
pub fn usdc_mint() -> Pubkey {
    Pubkey::from_str(USDC_MINT).expect("Invalid USDC mint")
}

/// Get the USDT mint
pub fn usdt_mint() -> Pubkey {
    Pubkey::from_str(USDT_MINT).expect("Invalid USDT mint")
}

/// Get the wrapped SOL mint
pub fn native_mint() -> Pubkey {
    Pubkey::from_str(NATIVE_MINT).expect("Invalid native mint")
}

/// Get the SPL Token program ID
pub fn spl_token_program_id() -> Pubkey {
    Pubkey::from_str(SPL_TOKEN_PROGRAM_ID).expect("Invalid SPL Token program ID")
}

/// Get the Token-2022 program ID
pub fn token_2022_program_id() -> Pubkey {
    Pubkey::from_str(TOKEN_2022_PROGRAM_ID).expect("Invalid Token-2022 program ID")
}

/// Get the Memo program ID
pub fn memo_program_id() -> Pubkey {
    Pubkey::from_str(MEMO_PROGRAM_ID).expect("Invalid Memo program ID")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_parse() {
        assert_eq!(whirlpool_program_id().to_string(), WHIRLPOOL_PROGRAM_ID);
        assert_eq!(whirlpools_config().to_string(), WHIRLPOOLS_CONFIG);
        assert_eq!(sol_usdc_whirlpool().to_string(), SOL_USDC_WHIRLPOOL);
        assert_eq!(sol_usdt_whirlpool().to_string(), SOL_USDT_WHIRLPOOL);
        assert_eq!(fallback_whirlpool().to_string(), FALLBACK_WHIRLPOOL);
        assert_eq!(usdc_mint().to_string(), USDC_MINT);
        assert_eq!(usdt_mint().to_string(), USDT_MINT);
        assert_eq!(memo_program_id().to_string(), MEMO_PROGRAM_ID);
    }

    #[test]
    fn test_pools_are_distinct() {
        let pools = [
            sol_usdc_whirlpool(),
            sol_usdt_whirlpool(),
            fallback_whirlpool(),
        ];
        assert_ne!(pools[0], pools[1]);
        assert_ne!(pools[0], pools[2]);
        assert_ne!(pools[1], pools[2]);
    }

    #[test]
    fn test_ids_match_spl_crates() {
        assert_eq!(native_mint(), spl_token::native_mint::id());
        assert_eq!(spl_token_program_id(), spl_token::id());
        assert_eq!(token_2022_program_id(), spl_token_2022::id());
    }
}
