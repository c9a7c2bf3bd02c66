//! Leading zeros, trailing zeros and bit length.
//!
//! Each width variant widens its operand and calls one shared scan
//! parameterized by the width. The scan strategy is chosen at compile time:
//!
//! - Default: byte-by-byte walk through the [`NLZ8`](crate::table::NLZ8) /
//!   [`NTZ8`](crate::table::NTZ8) tables (at most `W / 8` steps)
//! - `table-free`: De Bruijn multiplication, offset by `32 - W` or `64 - W`
//! - `intrinsics`: `core`'s `leading_zeros` / `trailing_zeros`
//!
//! Feature priority (when multiple enabled): table-free > intrinsics > default

#[cfg(feature = "table-free")]
use crate::broadword;
#[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
use crate::table;

/// Leading zeros of `x`, which must fit in `width` bits.
#[inline(always)]
fn nlz(x: u64, width: u32) -> u32 {
    #[cfg(feature = "table-free")]
    {
        if width <= 32 {
            broadword::nlz32(x as u32) - (32 - width)
        } else {
            broadword::nlz64(x)
        }
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.leading_zeros() - (64 - width)
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        table::scan_leading(x, width)
    }
}

/// Trailing zeros of `x`, which must fit in `width` bits. Returns `width`
/// for 0.
#[inline(always)]
fn ntz(x: u64, width: u32) -> u32 {
    #[cfg(feature = "table-free")]
    {
        if x == 0 {
            width
        } else if width <= 32 {
            broadword::ntz32(x as u32)
        } else {
            broadword::ntz64(x)
        }
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        if x == 0 { width } else { x.trailing_zeros() }
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        table::scan_trailing(x, width)
    }
}

/// Number of leading zero bits in `x`; 8 for 0.
#[inline]
pub fn leading_zeros8(x: u8) -> u32 {
    nlz(x as u64, 8)
}

/// Number of leading zero bits in `x`; 16 for 0.
#[inline]
pub fn leading_zeros16(x: u16) -> u32 {
    nlz(x as u64, 16)
}

/// Number of leading zero bits in `x`; 32 for 0.
#[inline]
pub fn leading_zeros32(x: u32) -> u32 {
    nlz(x as u64, 32)
}

/// Number of leading zero bits in `x`; 64 for 0.
#[inline]
pub fn leading_zeros64(x: u64) -> u32 {
    nlz(x, 64)
}

/// Number of trailing zero bits in `x`; 8 for 0.
#[inline]
pub fn trailing_zeros8(x: u8) -> u32 {
    ntz(x as u64, 8)
}

/// Number of trailing zero bits in `x`; 16 for 0.
#[inline]
pub fn trailing_zeros16(x: u16) -> u32 {
    ntz(x as u64, 16)
}

/// Number of trailing zero bits in `x`; 32 for 0.
#[inline]
pub fn trailing_zeros32(x: u32) -> u32 {
    ntz(x as u64, 32)
}

/// Number of trailing zero bits in `x`; 64 for 0.
#[inline]
pub fn trailing_zeros64(x: u64) -> u32 {
    ntz(x, 64)
}

/// Minimum number of bits needed to represent `x`; 0 for 0.
///
/// Equal to `8 - leading_zeros8(x)` for every `x`.
#[inline]
pub fn len8(x: u8) -> u32 {
    8 - nlz(x as u64, 8)
}

/// Minimum number of bits needed to represent `x`; 0 for 0.
#[inline]
pub fn len16(x: u16) -> u32 {
    16 - nlz(x as u64, 16)
}

/// Minimum number of bits needed to represent `x`; 0 for 0.
#[inline]
pub fn len32(x: u32) -> u32 {
    32 - nlz(x as u64, 32)
}

/// Minimum number of bits needed to represent `x`; 0 for 0.
#[inline]
pub fn len64(x: u64) -> u32 {
    64 - nlz(x, 64)
}
