//! Left and right bit rotation.
//!
//! Rotation amounts are signed and unbounded: a negative amount rotates the
//! other way, and any amount is reduced modulo the width before use. Because
//! every width is a power of two, masking the two's complement bits of the
//! amount with `W - 1` is exactly the Euclidean remainder.

/// Rotates the low `width` bits of `x` left by `k` (mod `width`).
///
/// The result may carry bits above `width`; the caller narrows it.
#[inline(always)]
fn rotl(x: u64, k: isize, width: u32) -> u64 {
    let s = (k as usize as u32) & (width - 1);
    if s == 0 {
        // A right shift by the full width would overflow.
        return x;
    }
    (x << s) | (x >> (width - s))
}

/// Rotates `x` left by `k` bits. Negative `k` rotates right.
#[inline]
pub fn rotate_left8(x: u8, k: isize) -> u8 {
    rotl(x as u64, k, 8) as u8
}

/// Rotates `x` left by `k` bits. Negative `k` rotates right.
#[inline]
pub fn rotate_left16(x: u16, k: isize) -> u16 {
    rotl(x as u64, k, 16) as u16
}

/// Rotates `x` left by `k` bits. Negative `k` rotates right.
#[inline]
pub fn rotate_left32(x: u32, k: isize) -> u32 {
    rotl(x as u64, k, 32) as u32
}

/// Rotates `x` left by `k` bits. Negative `k` rotates right.
#[inline]
pub fn rotate_left64(x: u64, k: isize) -> u64 {
    rotl(x, k, 64)
}

/// Rotates `x` right by `k` bits. Negative `k` rotates left.
#[inline]
pub fn rotate_right8(x: u8, k: isize) -> u8 {
    rotate_left8(x, k.wrapping_neg())
}

/// Rotates `x` right by `k` bits. Negative `k` rotates left.
#[inline]
pub fn rotate_right16(x: u16, k: isize) -> u16 {
    rotate_left16(x, k.wrapping_neg())
}

/// Rotates `x` right by `k` bits. Negative `k` rotates left.
#[inline]
pub fn rotate_right32(x: u32, k: isize) -> u32 {
    rotate_left32(x, k.wrapping_neg())
}

/// Rotates `x` right by `k` bits. Negative `k` rotates left.
#[inline]
pub fn rotate_right64(x: u64, k: isize) -> u64 {
    rotate_left64(x, k.wrapping_neg())
}
