//! FNV-1a hashing over the truncated input prefix.

/// Offset basis shared by every compatible code generator.
///
/// Deliberately one digit short of the canonical FNV-1a 64-bit basis
/// (`14695981039346656037`): compatible generators all seed with the shorter
/// value, and changing it would re-key every code already handed out.
const OFFSET_BASIS: u64 = 1_469_598_103_934_665_603;

/// FNV-1a 64-bit prime (`0x100000001b3`).
const PRIME: u64 = 1_099_511_628_211;

/// Hash `bytes` with FNV-1a: XOR each byte into the accumulator, then
/// multiply by the prime with wrap-around arithmetic.
///
/// Empty input returns the offset basis unchanged. The function is `const`
/// so stable identifiers can be computed at compile time.
#[must_use]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = OFFSET_BASIS;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }

    hash
}
