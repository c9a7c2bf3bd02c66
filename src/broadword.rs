//! Broadword (SWAR) and De Bruijn algorithms for bit manipulation.
//!
//! These algorithms operate on whole 32- or 64-bit words with a fixed number
//! of shifts, masks and multiplications, and never read a lookup table larger
//! than one cache line. They back the `table-free` strategy and are also
//! used by the default strategy where a table walk would be slower (64-bit
//! ones count, byte swapping).

/// Alternating single bits: `0101...`.
pub const M1: u64 = 0x5555_5555_5555_5555;

/// Alternating bit pairs: `00110011...`.
pub const M2: u64 = 0x3333_3333_3333_3333;

/// Alternating nibbles: `00001111...`.
pub const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;

/// Alternating bytes.
pub const M8: u64 = 0x00ff_00ff_00ff_00ff;

/// Alternating 16-bit lanes.
pub const M16: u64 = 0x0000_ffff_0000_ffff;

/// Constant with 1 in each byte's LSB position.
pub const L8: u64 = 0x0101_0101_0101_0101;

/// 64-bit De Bruijn sequence B(2, 6).
///
/// Every 6-bit window of this constant is distinct, so multiplying it by a
/// power of two `1 << p` and keeping the top 6 bits yields a unique index for
/// each `p`.
pub const DE_BRUIJN64: u64 = 0x03f7_9d71_b4ca_8b09;

/// 32-bit De Bruijn sequence B(2, 5).
pub const DE_BRUIJN32: u32 = 0x077c_b531;

/// Maps the top 6 bits of `(1 << p) * DE_BRUIJN64` back to `p`.
const DE_BRUIJN64_TAB: [u8; 64] = build_de_bruijn64_tab();

/// Maps the top 5 bits of `(1 << p) * DE_BRUIJN32` back to `p`.
const DE_BRUIJN32_TAB: [u8; 32] = build_de_bruijn32_tab();

const fn build_de_bruijn64_tab() -> [u8; 64] {
    let mut tab = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        tab[((DE_BRUIJN64 << i) >> 58) as usize] = i as u8;
        i += 1;
    }
    tab
}

const fn build_de_bruijn32_tab() -> [u8; 32] {
    let mut tab = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        tab[((DE_BRUIJN32 << i) >> 27) as usize] = i as u8;
        i += 1;
    }
    tab
}

/// Position of the single set bit in a power of two.
#[inline(always)]
fn bit_index64(pow2: u64) -> u32 {
    DE_BRUIJN64_TAB[(pow2.wrapping_mul(DE_BRUIJN64) >> 58) as usize] as u32
}

#[inline(always)]
fn bit_index32(pow2: u32) -> u32 {
    DE_BRUIJN32_TAB[(pow2.wrapping_mul(DE_BRUIJN32) >> 27) as usize] as u32
}

/// Count trailing zeros via De Bruijn multiplication. Returns 64 for 0.
#[inline]
pub fn ntz64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    // x & -x isolates the lowest set bit
    bit_index64(x & x.wrapping_neg())
}

/// Count trailing zeros via De Bruijn multiplication. Returns 32 for 0.
#[inline]
pub fn ntz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    bit_index32(x & x.wrapping_neg())
}

/// Count leading zeros via bit smearing and De Bruijn multiplication.
/// Returns 64 for 0.
#[inline]
pub fn nlz64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    // Every bit at or below the highest one is now set; keep only the top.
    63 - bit_index64(x ^ (x >> 1))
}

/// Count leading zeros via bit smearing and De Bruijn multiplication.
/// Returns 32 for 0.
#[inline]
pub fn nlz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    31 - bit_index32(x ^ (x >> 1))
}

/// Parallel bit count of a 64-bit word.
#[inline(always)]
pub fn popcount64(mut x: u64) -> u32 {
    x = x - ((x >> 1) & M1);
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    // Horizontal byte sum lands in the top byte.
    (x.wrapping_mul(L8) >> 56) as u32
}

/// Parallel bit count of a 32-bit word.
#[inline(always)]
pub fn popcount32(mut x: u32) -> u32 {
    x = x - ((x >> 1) & M1 as u32);
    x = (x & M2 as u32) + ((x >> 2) & M2 as u32);
    x = (x + (x >> 4)) & M4 as u32;
    x.wrapping_mul(L8 as u32) >> 24
}

/// Reverse the byte order of a 64-bit word with mask-and-shift steps.
#[inline]
pub fn swap_bytes64(mut x: u64) -> u64 {
    x = ((x >> 8) & M8) | ((x & M8) << 8);
    x = ((x >> 16) & M16) | ((x & M16) << 16);
    (x >> 32) | (x << 32)
}

/// Reverse the byte order of a 32-bit word with mask-and-shift steps.
#[inline]
pub fn swap_bytes32(mut x: u32) -> u32 {
    const M: u32 = M8 as u32;
    x = ((x >> 8) & M) | ((x & M) << 8);
    (x >> 16) | (x << 16)
}

/// Reverse the byte order of a 16-bit word.
#[inline]
pub fn swap_bytes16(x: u16) -> u16 {
    (x >> 8) | (x << 8)
}

/// Reverse all 64 bits: swap adjacent bits, pairs and nibbles, then bytes.
#[inline]
pub fn reverse64(mut x: u64) -> u64 {
    x = ((x >> 1) & M1) | ((x & M1) << 1);
    x = ((x >> 2) & M2) | ((x & M2) << 2);
    x = ((x >> 4) & M4) | ((x & M4) << 4);
    swap_bytes64(x)
}

/// Reverse all 32 bits.
#[inline]
pub fn reverse32(mut x: u32) -> u32 {
    const K1: u32 = M1 as u32;
    const K2: u32 = M2 as u32;
    const K4: u32 = M4 as u32;
    x = ((x >> 1) & K1) | ((x & K1) << 1);
    x = ((x >> 2) & K2) | ((x & K2) << 2);
    x = ((x >> 4) & K4) | ((x & K4) << 4);
    swap_bytes32(x)
}
