//! Derivation of RNG seeds from the game seed, day, and mechanic parameters.
//!
//! Two eras exist side by side: the legacy path just sums its inputs with
//! 32-bit wraparound, and the hashed path (introduced per-mechanic between
//! 1.4 and 1.6) runs XXH32 over the inputs. Each mechanic decides which era
//! applies via a capability check on [`GameVersion`]; the arithmetic itself
//! lives only here.

use xxhash_rust::xxh32::xxh32;

use crate::rng::MAX_INT;

/// Hash-based seed derivation: XXH32 (seed 0) over the little-endian byte
/// concatenation of five i32s, reinterpreted as i32.
///
/// Arguments are first reduced by truncated remainder mod `INT_MAX`. Inputs
/// already in the signed positive range pass through unchanged; the reduction
/// only matters for callers that hand over raw wrapped arithmetic.
pub fn hash_seed(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    let mut bytes = [0u8; 20];
    for (chunk, v) in bytes.chunks_exact_mut(4).zip([a, b, c, d, e]) {
        chunk.copy_from_slice(&(v % MAX_INT).to_le_bytes());
    }
    xxh32(&bytes, 0) as i32
}

/// Legacy seed derivation: the wrapping i32 sum of the inputs.
pub fn legacy_seed(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    a.wrapping_add(b).wrapping_add(c).wrapping_add(d).wrapping_add(e)
}

/// Single dispatch point between the two seeding eras, so mechanic code
/// carries the version boundary in one expression instead of repeating the
/// branch at every call site.
#[inline]
pub fn seed_for(use_hash: bool, a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    if use_hash { hash_seed(a, b, c, d, e) } else { legacy_seed(a, b, c, d, e) }
}
