//! Bit-order and byte-order reversal.
//!
//! The default strategy reverses each byte through [`REV8`](crate::table::REV8)
//! and then reverses the byte order with the `reverse_bytes*` functions. The
//! `table-free` strategy uses the SWAR swap ladder from
//! [`broadword`](crate::broadword) and the `intrinsics` strategy uses
//! `reverse_bits` / `swap_bytes` from `core`.
//!
//! Feature priority (when multiple enabled): table-free > intrinsics > default

#[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
use crate::broadword;
#[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
use crate::table;

/// Reverses the bits of `x`.
#[inline]
pub fn reverse8(x: u8) -> u8 {
    #[cfg(feature = "table-free")]
    {
        (broadword::reverse32(x as u32) >> 24) as u8
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.reverse_bits()
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        table::REV8[x as usize]
    }
}

/// Reverses the bits of `x`.
#[inline]
pub fn reverse16(x: u16) -> u16 {
    #[cfg(feature = "table-free")]
    {
        (broadword::reverse32(x as u32) >> 16) as u16
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.reverse_bits()
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        reverse_bytes16(table::reverse_each_byte(x as u64, 16) as u16)
    }
}

/// Reverses the bits of `x`.
#[inline]
pub fn reverse32(x: u32) -> u32 {
    #[cfg(feature = "table-free")]
    {
        broadword::reverse32(x)
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.reverse_bits()
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        reverse_bytes32(table::reverse_each_byte(x as u64, 32) as u32)
    }
}

/// Reverses the bits of `x`.
#[inline]
pub fn reverse64(x: u64) -> u64 {
    #[cfg(feature = "table-free")]
    {
        broadword::reverse64(x)
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.reverse_bits()
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        reverse_bytes64(table::reverse_each_byte(x, 64))
    }
}

/// Reverses the byte order of `x`.
#[inline]
pub fn reverse_bytes16(x: u16) -> u16 {
    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.swap_bytes()
    }

    #[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
    {
        broadword::swap_bytes16(x)
    }
}

/// Reverses the byte order of `x`: byte 0 swaps with byte 3, 1 with 2.
#[inline]
pub fn reverse_bytes32(x: u32) -> u32 {
    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.swap_bytes()
    }

    #[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
    {
        broadword::swap_bytes32(x)
    }
}

/// Reverses the byte order of `x`: byte 0 swaps with byte 7, 1 with 6, and
/// so on.
#[inline]
pub fn reverse_bytes64(x: u64) -> u64 {
    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.swap_bytes()
    }

    #[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
    {
        broadword::swap_bytes64(x)
    }
}
