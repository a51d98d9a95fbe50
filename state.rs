//! On-chain account layouts for the Whirlpool program.
//!
//! Only the two accounts this library reads are modeled: the pool itself
//! and its tick arrays. Layouts match the deployed mainnet program; the
//! 8-byte Anchor discriminator is validated before deserializing.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::io;

use crate::discriminator::account_discriminator;

/// Number of ticks held by one tick array account
pub const TICK_ARRAY_SIZE: usize = 88;

/// Whirlpool account state (653 bytes including discriminator)
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Whirlpool {
    pub whirlpools_config: Pubkey,
    pub whirlpool_bump: [u8; 1],
    pub tick_spacing: u16,
    pub tick_spacing_seed: [u8; 2],
    pub fee_rate: u16,
    pub protocol_fee_rate: u16,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,
    pub protocol_fee_owed_a: u64,
    pub protocol_fee_owed_b: u64,
    pub token_mint_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub fee_growth_global_a: u128,
    pub token_mint_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub fee_growth_global_b: u128,
    pub reward_last_updated_timestamp: u64,
    pub reward_infos: [WhirlpoolRewardInfo; 3],
}

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhirlpoolRewardInfo {
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub emissions_per_second_x64: u128,
    pub growth_global_x64: u128,
}

/// One initialized tick within a tick array
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub fee_growth_outside_a: u128,
    pub fee_growth_outside_b: u128,
    pub reward_growths_outside: [u128; 3],
}

/// Tick array account state (9988 bytes including discriminator)
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct TickArray {
    pub start_tick_index: i32,
    pub ticks: [Tick; TICK_ARRAY_SIZE],
    pub whirlpool: Pubkey,
}

impl Whirlpool {
    /// Deserialize a Whirlpool account from raw account data
    pub fn from_bytes(data: &[u8]) -> io::Result<Self> {
        Self::try_from_slice(strip_discriminator(data, "Whirlpool")?)
    }
}

impl TickArray {
    /// Deserialize a TickArray account from raw account data
    pub fn from_bytes(data: &[u8]) -> io::Result<Self> {
        Self::try_from_slice(strip_discriminator(data, "TickArray")?)
    }
}

/// Validate the Anchor account discriminator and return the payload bytes
fn strip_discriminator<'a>(data: &'a [u8], account_name: &str) -> io::Result<&'a [u8]> {
    if data.len() < 8 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{account_name} account data too short: {} bytes", data.len()),
        ));
    }
    let expected = account_discriminator(account_name);
    if data[..8] != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("account discriminator mismatch, expected {account_name}"),
        ));
    }
    Ok(&data[8..])
}

/// Synthetic pool state used by offline tests
#[cfg(test)]
pub(crate) fn sample_whirlpool(mint_a: Pubkey, mint_b: Pubkey) -> Whirlpool {
    Whirlpool {
        whirlpools_config: crate::constants::whirlpools_config(),
        whirlpool_bump: [254],
        tick_spacing: 64,
        tick_spacing_seed: [64, 0],
        fee_rate: 3000,
        protocol_fee_rate: 300,
        liquidity: 1_000_000_000_000,
        sqrt_price: 1 << 64,
        tick_current_index: 0,
        protocol_fee_owed_a: 0,
        protocol_fee_owed_b: 0,
        token_mint_a: mint_a,
        token_vault_a: Pubkey::new_unique(),
        fee_growth_global_a: 0,
        token_mint_b: mint_b,
        token_vault_b: Pubkey::new_unique(),
        fee_growth_global_b: 0,
        reward_last_updated_timestamp: 0,
        reward_infos: [WhirlpoolRewardInfo {
            mint: Pubkey::default(),
            vault: Pubkey::default(),
            authority: Pubkey::default(),
            emissions_per_second_x64: 0,
            growth_global_x64: 0,
        }; 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::to_vec;

    #[test]
    fn test_whirlpool_roundtrip() {
        let pool = sample_whirlpool(Pubkey::new_unique(), Pubkey::new_unique());

        let mut data = account_discriminator("Whirlpool").to_vec();
        data.extend_from_slice(&to_vec(&pool).unwrap());
        // On-chain Whirlpool accounts are exactly 653 bytes
        assert_eq!(data.len(), 653);

        let decoded = Whirlpool::from_bytes(&data).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn test_tick_array_roundtrip() {
        let tick_array = TickArray {
            start_tick_index: -5632,
            ticks: [Tick {
                initialized: false,
                liquidity_net: 0,
                liquidity_gross: 0,
                fee_growth_outside_a: 0,
                fee_growth_outside_b: 0,
                reward_growths_outside: [0; 3],
            }; TICK_ARRAY_SIZE],
            whirlpool: Pubkey::new_unique(),
        };

        let mut data = account_discriminator("TickArray").to_vec();
        data.extend_from_slice(&to_vec(&tick_array).unwrap());
        // On-chain TickArray accounts are exactly 9988 bytes
        assert_eq!(data.len(), 9988);

        let decoded = TickArray::from_bytes(&data).unwrap();
        assert_eq!(decoded.start_tick_index, tick_array.start_tick_index);
        assert_eq!(decoded.whirlpool, tick_array.whirlpool);
    }

    #[test]
    fn test_rejects_wrong_discriminator() {
        let pool = sample_whirlpool(Pubkey::new_unique(), Pubkey::new_unique());
        let mut data = account_discriminator("TickArray").to_vec();
        data.extend_from_slice(&to_vec(&pool).unwrap());

        assert!(Whirlpool::from_bytes(&data).is_err());
    }

    #[test]
    fn test_rejects_short_data() {
        assert!(Whirlpool::from_bytes(&[0u8; 4]).is_err());
        assert!(TickArray::from_bytes(&[]).is_err());
    }
}
