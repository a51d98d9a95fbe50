//! Anchor discriminator utilities.
//!
//! The Whirlpool program is an Anchor program; its instruction data and
//! account data are both prefixed with an 8-byte sha256-derived tag.

use sha2::{Digest, Sha256};

/// Compute an Anchor instruction discriminator: sha256("global:<name>")[0..8]
///
/// The constants used by this library are pre-computed and verified against
/// the on-chain IDL; tests cross-check them against this function.
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    discriminator("global", name)
}

/// Compute an Anchor account discriminator: sha256("account:<name>")[0..8]
pub fn account_discriminator(name: &str) -> [u8; 8] {
    discriminator("account", name)
}

fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{namespace}:{name}");
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    let hash_result = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result[..8]);
    discriminator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_v2_discriminator() {
        assert_eq!(
            instruction_discriminator("swap_v2"),
            [43, 4, 237, 11, 26, 201, 30, 98]
        );
    }

    #[test]
    fn test_account_discriminators() {
        assert_eq!(
            account_discriminator("Whirlpool"),
            [63, 149, 209, 12, 225, 128, 99, 9]
        );
        assert_eq!(
            account_discriminator("TickArray"),
            [69, 97, 189, 190, 110, 7, 66, 187]
        );
    }
}
