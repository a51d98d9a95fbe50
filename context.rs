//! Ephemeral context for Whirlpool operations.

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::{constants::whirlpool_program_id, pool::PoolTable};

/// Bundle of everything the quote fetcher and instruction builder need:
/// the Whirlpool program id, a throwaway signing identity, the RPC handle,
/// and the pool routing table.
///
/// The context is built fresh per call and discarded after use. The wallet
/// exists only because downstream account fetches want a signer-shaped
/// identity; it never signs anything real.
pub struct WhirlpoolsContext {
    pub program_id: Pubkey,
    pub wallet: Keypair,
    pub rpc: Arc<RpcClient>,
    pub pools: PoolTable,
}

/// Build a read-only context bound to the mainnet Whirlpool program and
/// the hard-coded mainnet pool table
pub fn get_whirlpools_context(rpc: Arc<RpcClient>) -> WhirlpoolsContext {
    WhirlpoolsContext {
        program_id: whirlpool_program_id(),
        wallet: Keypair::new(),
        rpc,
        pools: PoolTable::mainnet(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{fallback_whirlpool, WHIRLPOOL_PROGRAM_ID};

    fn offline_rpc() -> Arc<RpcClient> {
        // Constructing a client performs no network I/O
        Arc::new(RpcClient::new("http://localhost:8899".to_string()))
    }

    #[test]
    fn test_context_is_bound_to_program() {
        let ctx = get_whirlpools_context(offline_rpc());
        assert_eq!(ctx.program_id.to_string(), WHIRLPOOL_PROGRAM_ID);
    }

    #[test]
    fn test_context_wallets_are_throwaway() {
        use solana_sdk::signer::Signer;

        let rpc = offline_rpc();
        let a = get_whirlpools_context(rpc.clone());
        let b = get_whirlpools_context(rpc);
        // Fresh identity per context; nothing should ever depend on it
        assert_ne!(a.wallet.pubkey(), b.wallet.pubkey());
    }

    #[test]
    fn test_context_carries_mainnet_table() {
        let ctx = get_whirlpools_context(offline_rpc());
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(ctx.pools.lookup(&a, &b), fallback_whirlpool());
    }
}
