//! Pool routing: map a pair of token mints to a known Whirlpool address.
//!
//! This is a closed enumeration, not a routing algorithm. Two mints are
//! special-cased (USDC, USDT); everything else falls back to a single
//! default pool, which may be wrong for arbitrary pairs. The table makes
//! that limitation explicit instead of burying it in an `if` chain.

use solana_sdk::pubkey::Pubkey;

use crate::constants::{fallback_whirlpool, sol_usdc_whirlpool, sol_usdt_whirlpool, usdc_mint, usdt_mint};

/// Explicit mint -> pool mapping with a fallback pool.
///
/// A pair matches an entry when either of its mints equals the entry's
/// mint; matching is independent of argument order. Lookups never fail.
#[derive(Debug, Clone)]
pub struct PoolTable {
    entries: Vec<(Pubkey, Pubkey)>,
    fallback: Pubkey,
}

impl PoolTable {
    /// Build a table from `(mint, pool)` entries and a fallback pool
    pub fn new(entries: Vec<(Pubkey, Pubkey)>, fallback: Pubkey) -> Self {
        Self { entries, fallback }
    }

    /// The three hard-coded mainnet pools: USDC and USDT pairs against SOL,
    /// plus the fallback for everything else
    pub fn mainnet() -> Self {
        Self::new(
            vec![
                (usdc_mint(), sol_usdc_whirlpool()),
                (usdt_mint(), sol_usdt_whirlpool()),
            ],
            fallback_whirlpool(),
        )
    }

    /// Resolve the pool for a mint pair.
    ///
    /// Entries are checked in order against both argument positions; a pair
    /// matching no entry silently resolves to the fallback pool.
    pub fn lookup(&self, mint_a: &Pubkey, mint_b: &Pubkey) -> Pubkey {
        for (mint, pool) in &self.entries {
            if mint == mint_a || mint == mint_b {
                return *pool;
            }
        }
        self.fallback
    }

    /// The pool returned for pairs matching no entry
    pub fn fallback(&self) -> Pubkey {
        self.fallback
    }
}

/// Return the two mints in canonical pool order.
///
/// Whirlpools are initialized with token A ordered before token B by raw
/// pubkey bytes; the result is the same whichever way the pair is passed.
pub fn get_ab_mints(source_mint: &Pubkey, target_mint: &Pubkey) -> (Pubkey, Pubkey) {
    if source_mint <= target_mint {
        (*source_mint, *target_mint)
    } else {
        (*target_mint, *source_mint)
    }
}

/// Resolve a mint pair against the mainnet pool table
pub fn get_pool_address(mint_a: &Pubkey, mint_b: &Pubkey) -> Pubkey {
    PoolTable::mainnet().lookup(mint_a, mint_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::native_mint;

    #[test]
    fn test_lookup_usdc_either_position() {
        let table = PoolTable::mainnet();
        assert_eq!(table.lookup(&usdc_mint(), &native_mint()), sol_usdc_whirlpool());
        assert_eq!(table.lookup(&native_mint(), &usdc_mint()), sol_usdc_whirlpool());
    }

    #[test]
    fn test_lookup_usdt_either_position() {
        let table = PoolTable::mainnet();
        assert_eq!(table.lookup(&usdt_mint(), &native_mint()), sol_usdt_whirlpool());
        assert_eq!(table.lookup(&native_mint(), &usdt_mint()), sol_usdt_whirlpool());
    }

    #[test]
    fn test_lookup_unknown_pair_falls_back() {
        let table = PoolTable::mainnet();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(table.lookup(&a, &b), fallback_whirlpool());
        assert_eq!(table.lookup(&native_mint(), &a), fallback_whirlpool());
    }

    #[test]
    fn test_get_ab_mints_symmetric() {
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        assert_eq!(get_ab_mints(&x, &y), get_ab_mints(&y, &x));

        let (a, b) = get_ab_mints(&x, &y);
        assert!(a <= b);
        assert!([x, y].contains(&a) && [x, y].contains(&b));
    }

    #[test]
    fn test_get_pool_address_uses_mainnet_table() {
        assert_eq!(
            get_pool_address(&native_mint(), &usdc_mint()),
            sol_usdc_whirlpool()
        );
        assert_eq!(
            get_pool_address(&Pubkey::new_unique(), &Pubkey::new_unique()),
            fallback_whirlpool()
        );
    }
}
