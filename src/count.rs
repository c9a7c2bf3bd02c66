//! Population count (number of set bits).
//!
//! - Default: per-byte [`POP8`](crate::table::POP8) lookups summed across
//!   the operand for widths up to 32; SWAR reduction for 64 bits, where
//!   eight table reads cost more than the multiply
//! - `table-free`: SWAR reduction for every width
//! - `intrinsics`: `count_ones()`, which lowers to POPCNT/CNT when the target
//!   has it
//!
//! Feature priority (when multiple enabled): table-free > intrinsics > default

#[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
use crate::broadword;
#[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
use crate::table;

/// Set bits in `x`, which must fit in `width <= 32` bits.
#[inline(always)]
fn pop_narrow(x: u32, width: u32) -> u32 {
    #[cfg(feature = "table-free")]
    {
        let _ = width;
        broadword::popcount32(x)
    }

    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        let _ = width;
        x.count_ones()
    }

    #[cfg(not(any(feature = "table-free", feature = "intrinsics")))]
    {
        table::sum_pop(x as u64, width)
    }
}

/// Number of set bits in `x`.
#[inline]
pub fn ones_count8(x: u8) -> u32 {
    pop_narrow(x as u32, 8)
}

/// Number of set bits in `x`.
#[inline]
pub fn ones_count16(x: u16) -> u32 {
    pop_narrow(x as u32, 16)
}

/// Number of set bits in `x`.
#[inline]
pub fn ones_count32(x: u32) -> u32 {
    pop_narrow(x, 32)
}

/// Number of set bits in `x`.
#[inline]
pub fn ones_count64(x: u64) -> u32 {
    #[cfg(all(feature = "intrinsics", not(feature = "table-free")))]
    {
        x.count_ones()
    }

    #[cfg(not(all(feature = "intrinsics", not(feature = "table-free"))))]
    {
        broadword::popcount64(x)
    }
}
