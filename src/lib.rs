//! # wordbits
//!
//! Bit manipulation primitives for fixed-width unsigned integers.
//!
//! Every operation comes in 8, 16, 32 and 64-bit variants plus a `usize`
//! variant whose width ([`UINT_SIZE`]) is fixed at compile time:
//!
//! | Family | Functions | Result |
//! |--------|-----------|--------|
//! | Leading zeros | [`leading_zeros8`] .. [`leading_zeros64`], [`leading_zeros`] | `0..=W` |
//! | Trailing zeros | [`trailing_zeros8`] .. [`trailing_zeros64`], [`trailing_zeros`] | `0..=W` |
//! | Ones count | [`ones_count8`] .. [`ones_count64`], [`ones_count`] | `0..=W` |
//! | Rotation | [`rotate_left8`] .. [`rotate_right64`], [`rotate_left`], [`rotate_right`] | `uW` |
//! | Bit reversal | [`reverse8`] .. [`reverse64`], [`reverse`] | `uW` |
//! | Byte reversal | [`reverse_bytes16`] .. [`reverse_bytes64`], [`reverse_bytes`] | `uW` |
//! | Bit length | [`len8`] .. [`len64`], [`len`] | `0..=W` |
//!
//! All functions are total, allocation-free and side-effect-free. Rotation
//! amounts may be negative (rotate the other way) or larger than the width
//! (reduced modulo the width).
//!
//! ## Quick Start
//!
//! ```
//! use wordbits::*;
//!
//! assert_eq!(leading_zeros8(0x01), 7);
//! assert_eq!(trailing_zeros32(0x100), 8);
//! assert_eq!(ones_count16(0xf0f0), 8);
//! assert_eq!(rotate_left8(0x81, 1), 0x03);
//! assert_eq!(rotate_left8(0x81, -1), 0xc0);
//! assert_eq!(reverse8(0x01), 0x80);
//! assert_eq!(reverse_bytes16(0x0102), 0x0201);
//! assert_eq!(len64(0), 0);
//! assert_eq!(len(255), 8);
//! ```
//!
//! ## Features
//!
//! Implementation strategies (compile-time, for benchmarking):
//! - Default: 256-entry lookup tables ([`table`]) for bit scans, narrow
//!   ones count and bit reversal
//! - `table-free` - De Bruijn multiplication and SWAR arithmetic
//!   ([`broadword`]), no table reads
//! - `intrinsics` - `core` integer methods, which lower to LZCNT/TZCNT/POPCNT
//!   style instructions when the target has them
//!
//! Feature priority (when multiple enabled): table-free > intrinsics > default
//!
//! Other features:
//! - `std` - Link the standard library (implements `std::error::Error`)
//! - `serde` - Serialization for the [`dispatch`] enums
//! - `cli` - Build the `wordbits` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod broadword;
mod count;
pub mod dispatch;
mod native;
mod reverse;
mod rotate;
pub mod table;
mod zeros;

pub use count::{ones_count8, ones_count16, ones_count32, ones_count64};
pub use dispatch::{Op, Width};
pub use native::{
    UINT_SIZE, len, leading_zeros, ones_count, reverse, reverse_bytes, rotate_left, rotate_right,
    trailing_zeros,
};
pub use reverse::{
    reverse_bytes16, reverse_bytes32, reverse_bytes64, reverse8, reverse16, reverse32, reverse64,
};
pub use rotate::{
    rotate_left8, rotate_left16, rotate_left32, rotate_left64, rotate_right8, rotate_right16,
    rotate_right32, rotate_right64,
};
pub use zeros::{
    leading_zeros8, leading_zeros16, leading_zeros32, leading_zeros64, len8, len16, len32, len64,
    trailing_zeros8, trailing_zeros16, trailing_zeros32, trailing_zeros64,
};
