//! Platform-word (`usize`) variants.
//!
//! The word width is fixed by `target_pointer_width` when the crate is
//! compiled; each function forwards to the matching 32- or 64-bit variant
//! through the `word` alias module, so no width test happens at run time.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("wordbits supports only 32-bit and 64-bit targets");

#[cfg(target_pointer_width = "64")]
mod word {
    pub type Word = u64;
    pub use crate::count::ones_count64 as ones_count;
    pub use crate::reverse::{reverse_bytes64 as reverse_bytes, reverse64 as reverse};
    pub use crate::rotate::rotate_left64 as rotate_left;
    pub use crate::zeros::{
        len64 as len, leading_zeros64 as leading_zeros, trailing_zeros64 as trailing_zeros,
    };
}

#[cfg(target_pointer_width = "32")]
mod word {
    pub type Word = u32;
    pub use crate::count::ones_count32 as ones_count;
    pub use crate::reverse::{reverse_bytes32 as reverse_bytes, reverse32 as reverse};
    pub use crate::rotate::rotate_left32 as rotate_left;
    pub use crate::zeros::{
        len32 as len, leading_zeros32 as leading_zeros, trailing_zeros32 as trailing_zeros,
    };
}

/// Size of `usize` in bits (32 or 64).
pub const UINT_SIZE: u32 = usize::BITS;

/// Number of leading zero bits in `x`; [`UINT_SIZE`] for 0.
#[inline]
pub fn leading_zeros(x: usize) -> u32 {
    word::leading_zeros(x as word::Word)
}

/// Number of trailing zero bits in `x`; [`UINT_SIZE`] for 0.
#[inline]
pub fn trailing_zeros(x: usize) -> u32 {
    word::trailing_zeros(x as word::Word)
}

/// Number of set bits in `x`.
#[inline]
pub fn ones_count(x: usize) -> u32 {
    word::ones_count(x as word::Word)
}

/// Rotates `x` left by `k` bits. Negative `k` rotates right.
#[inline]
pub fn rotate_left(x: usize, k: isize) -> usize {
    word::rotate_left(x as word::Word, k) as usize
}

/// Rotates `x` right by `k` bits. Negative `k` rotates left.
#[inline]
pub fn rotate_right(x: usize, k: isize) -> usize {
    word::rotate_left(x as word::Word, k.wrapping_neg()) as usize
}

/// Reverses the bits of `x`.
#[inline]
pub fn reverse(x: usize) -> usize {
    word::reverse(x as word::Word) as usize
}

/// Reverses the byte order of `x`.
#[inline]
pub fn reverse_bytes(x: usize) -> usize {
    word::reverse_bytes(x as word::Word) as usize
}

/// Minimum number of bits needed to represent `x`; 0 for 0.
#[inline]
pub fn len(x: usize) -> u32 {
    word::len(x as word::Word)
}
