use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::GenConfig;

/// FNV-1a, 64 bit. Pure integer arithmetic so the same seed string maps to
/// the same stream on every platform.
fn hash_seed (seed: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn time_seed () -> String {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

/// One generation run owns exactly one of these streams.
pub fn seeded_rng (config: &GenConfig) -> rltk::RandomNumberGenerator {
    let seed = if config.use_random_seed {
        time_seed()
    } else {
        config.seed.clone()
    };
    rltk::RandomNumberGenerator::seeded(hash_seed(&seed))
}
