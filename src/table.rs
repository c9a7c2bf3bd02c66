//! 256-entry lookup tables for single-byte bit queries.
//!
//! Every table is indexed by an 8-bit value and built at compile time by a
//! `const fn`, so the data lives in read-only memory and needs no
//! initialization or synchronization.
//!
//! | Table | Entry for byte `b` |
//! |-------|--------------------|
//! | [`NLZ8`] | leading zeros of `b` (8 for 0) |
//! | [`NTZ8`] | trailing zeros of `b` (8 for 0) |
//! | [`POP8`] | number of set bits in `b` |
//! | [`REV8`] | `b` with its 8 bits reversed |

// The scan helpers are only reached by the default strategy.
#![cfg_attr(any(feature = "table-free", feature = "intrinsics"), allow(dead_code))]

/// Leading zero count of every byte value.
pub const NLZ8: [u8; 256] = build_nlz8();

/// Trailing zero count of every byte value.
pub const NTZ8: [u8; 256] = build_ntz8();

/// Population count of every byte value.
pub const POP8: [u8; 256] = build_pop8();

/// Bit reversal of every byte value.
pub const REV8: [u8; 256] = build_rev8();

const fn build_nlz8() -> [u8; 256] {
    let mut tab = [8u8; 256];
    let mut i = 1;
    while i < 256 {
        let mut x = i;
        let mut n = 0u8;
        while x & 0x80 == 0 {
            n += 1;
            x <<= 1;
        }
        tab[i] = n;
        i += 1;
    }
    tab
}

const fn build_ntz8() -> [u8; 256] {
    let mut tab = [8u8; 256];
    let mut i = 1;
    while i < 256 {
        let mut x = i;
        let mut n = 0u8;
        while x & 1 == 0 {
            n += 1;
            x >>= 1;
        }
        tab[i] = n;
        i += 1;
    }
    tab
}

const fn build_pop8() -> [u8; 256] {
    let mut tab = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        // pop(i) = pop(i >> 1) + low bit
        tab[i] = tab[i >> 1] + (i & 1) as u8;
        i += 1;
    }
    tab
}

const fn build_rev8() -> [u8; 256] {
    let mut tab = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut r = 0u8;
        let mut bit = 0;
        while bit < 8 {
            if i & (1 << bit) != 0 {
                r |= 0x80 >> bit;
            }
            bit += 1;
        }
        tab[i] = r;
        i += 1;
    }
    tab
}

/// Leading zeros of the low `width` bits of `x`, scanning whole bytes from
/// the most significant end.
///
/// `width` must be a multiple of 8 in `8..=64` and `x` must fit in it.
#[inline]
pub(crate) fn scan_leading(x: u64, width: u32) -> u32 {
    let mut shift = width;
    while shift > 0 {
        shift -= 8;
        let b = (x >> shift) as u8;
        if b != 0 {
            return (width - 8 - shift) + NLZ8[b as usize] as u32;
        }
    }
    width
}

/// Trailing zeros of the low `width` bits of `x`, scanning whole bytes from
/// the least significant end.
#[inline]
pub(crate) fn scan_trailing(x: u64, width: u32) -> u32 {
    // Bytes are consumed low to high, so the low half of a 64-bit word is
    // always settled before the high half is looked at.
    let mut shift = 0;
    while shift < width {
        let b = (x >> shift) as u8;
        if b != 0 {
            return shift + NTZ8[b as usize] as u32;
        }
        shift += 8;
    }
    width
}

/// Sum of per-byte population counts over the low `width` bits of `x`.
#[inline]
pub(crate) fn sum_pop(x: u64, width: u32) -> u32 {
    let mut n = 0u32;
    let mut shift = 0;
    while shift < width {
        n += POP8[(x >> shift) as u8 as usize] as u32;
        shift += 8;
    }
    n
}

/// Reverses the bits inside each of the low `width / 8` bytes of `x`,
/// leaving the byte order untouched.
#[inline]
pub(crate) fn reverse_each_byte(x: u64, width: u32) -> u64 {
    let mut r = 0u64;
    let mut shift = 0;
    while shift < width {
        r |= (REV8[(x >> shift) as u8 as usize] as u64) << shift;
        shift += 8;
    }
    r
}
