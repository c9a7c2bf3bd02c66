//! Run-time selection of an operation and width.
//!
//! The fixed-width functions are the primary API. This module lets callers
//! that only learn the width at run time (command-line tools, interpreters,
//! test harnesses) pick a primitive by value, with operands carried in a
//! `u64` and checked against the chosen width.
//!
//! # Example
//!
//! ```
//! use wordbits::dispatch::{evaluate, Op, Width};
//!
//! assert_eq!(evaluate(Op::LeadingZeros, Width::W8, 0x01, 0), Ok(7));
//! assert_eq!(evaluate(Op::RotateLeft, Width::W16, 0x8001, 4), Ok(0x0018));
//! assert!(evaluate(Op::Reverse, Width::W8, 0x100, 0).is_err());
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{count, reverse, rotate, zeros};

/// Operand width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Width {
    /// 8 bits
    W8,
    /// 16 bits
    W16,
    /// 32 bits
    W32,
    /// 64 bits
    W64,
}

impl Width {
    /// All widths, narrowest first.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Width of the platform word.
    #[cfg(target_pointer_width = "64")]
    pub const NATIVE: Width = Width::W64;
    /// Width of the platform word.
    #[cfg(target_pointer_width = "32")]
    pub const NATIVE: Width = Width::W32;

    /// Number of bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// All-ones value of this width.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Width::W64 => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }

    /// Looks up the width with the given number of bits.
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(Error::InvalidWidth(other)),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for Width {
    type Err = Error;

    /// Parses `"8"`, `"16"`, `"32"`, `"64"` or `"native"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("native") {
            return Ok(Width::NATIVE);
        }
        match s.parse::<u32>() {
            Ok(bits) => Width::from_bits(bits),
            Err(_) => Err(Error::UnknownWidth),
        }
    }
}

/// A primitive operation family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Op {
    LeadingZeros,
    TrailingZeros,
    OnesCount,
    Len,
    RotateLeft,
    RotateRight,
    Reverse,
    ReverseBytes,
}

impl Op {
    /// Every operation family.
    pub const ALL: [Op; 8] = [
        Op::LeadingZeros,
        Op::TrailingZeros,
        Op::OnesCount,
        Op::Len,
        Op::RotateLeft,
        Op::RotateRight,
        Op::Reverse,
        Op::ReverseBytes,
    ];

    /// Kebab-case name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Op::LeadingZeros => "leading-zeros",
            Op::TrailingZeros => "trailing-zeros",
            Op::OnesCount => "ones-count",
            Op::Len => "len",
            Op::RotateLeft => "rotate-left",
            Op::RotateRight => "rotate-right",
            Op::Reverse => "reverse",
            Op::ReverseBytes => "reverse-bytes",
        }
    }

    /// True when the result is a count rather than a bit pattern.
    pub const fn returns_count(self) -> bool {
        matches!(
            self,
            Op::LeadingZeros | Op::TrailingZeros | Op::OnesCount | Op::Len
        )
    }

    /// True when the operation uses a rotation amount.
    pub const fn takes_amount(self) -> bool {
        matches!(self, Op::RotateLeft | Op::RotateRight)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from run-time dispatch.
///
/// The fixed-width functions never fail; these only arise when an operand,
/// width or operation arrives as an unchecked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Operand has bits set above the requested width.
    OperandOutOfRange {
        /// The operand as given
        value: u64,
        /// Requested width
        width: Width,
    },

    /// The operation has no variant at this width (byte reversal of 8 bits).
    UnsupportedWidth {
        /// Requested operation
        op: Op,
        /// Requested width
        width: Width,
    },

    /// Bit count that is not 8, 16, 32 or 64.
    InvalidWidth(u32),

    /// Width string that is neither a number nor `native`.
    UnknownWidth,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OperandOutOfRange { value, width } => {
                write!(f, "operand {:#x} does not fit in {} bits", value, width)
            }
            Error::UnsupportedWidth { op, width } => {
                write!(f, "{} is not defined for {}-bit operands", op, width)
            }
            Error::InvalidWidth(bits) => {
                write!(f, "invalid width {} (expected 8, 16, 32 or 64)", bits)
            }
            Error::UnknownWidth => {
                write!(f, "unknown width (expected 8, 16, 32, 64 or native)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Applies `op` at `width` to `x`.
///
/// `k` is the rotation amount and is ignored by every other operation.
/// Counts are returned widened to `u64`.
pub fn evaluate(op: Op, width: Width, x: u64, k: isize) -> Result<u64, Error> {
    if x & !width.mask() != 0 {
        return Err(Error::OperandOutOfRange { value: x, width });
    }

    let result = match (op, width) {
        (Op::LeadingZeros, Width::W8) => zeros::leading_zeros8(x as u8) as u64,
        (Op::LeadingZeros, Width::W16) => zeros::leading_zeros16(x as u16) as u64,
        (Op::LeadingZeros, Width::W32) => zeros::leading_zeros32(x as u32) as u64,
        (Op::LeadingZeros, Width::W64) => zeros::leading_zeros64(x) as u64,

        (Op::TrailingZeros, Width::W8) => zeros::trailing_zeros8(x as u8) as u64,
        (Op::TrailingZeros, Width::W16) => zeros::trailing_zeros16(x as u16) as u64,
        (Op::TrailingZeros, Width::W32) => zeros::trailing_zeros32(x as u32) as u64,
        (Op::TrailingZeros, Width::W64) => zeros::trailing_zeros64(x) as u64,

        (Op::OnesCount, Width::W8) => count::ones_count8(x as u8) as u64,
        (Op::OnesCount, Width::W16) => count::ones_count16(x as u16) as u64,
        (Op::OnesCount, Width::W32) => count::ones_count32(x as u32) as u64,
        (Op::OnesCount, Width::W64) => count::ones_count64(x) as u64,

        (Op::Len, Width::W8) => zeros::len8(x as u8) as u64,
        (Op::Len, Width::W16) => zeros::len16(x as u16) as u64,
        (Op::Len, Width::W32) => zeros::len32(x as u32) as u64,
        (Op::Len, Width::W64) => zeros::len64(x) as u64,

        (Op::RotateLeft, Width::W8) => rotate::rotate_left8(x as u8, k) as u64,
        (Op::RotateLeft, Width::W16) => rotate::rotate_left16(x as u16, k) as u64,
        (Op::RotateLeft, Width::W32) => rotate::rotate_left32(x as u32, k) as u64,
        (Op::RotateLeft, Width::W64) => rotate::rotate_left64(x, k),

        (Op::RotateRight, Width::W8) => rotate::rotate_right8(x as u8, k) as u64,
        (Op::RotateRight, Width::W16) => rotate::rotate_right16(x as u16, k) as u64,
        (Op::RotateRight, Width::W32) => rotate::rotate_right32(x as u32, k) as u64,
        (Op::RotateRight, Width::W64) => rotate::rotate_right64(x, k),

        (Op::Reverse, Width::W8) => reverse::reverse8(x as u8) as u64,
        (Op::Reverse, Width::W16) => reverse::reverse16(x as u16) as u64,
        (Op::Reverse, Width::W32) => reverse::reverse32(x as u32) as u64,
        (Op::Reverse, Width::W64) => reverse::reverse64(x),

        (Op::ReverseBytes, Width::W8) => {
            return Err(Error::UnsupportedWidth { op, width });
        }
        (Op::ReverseBytes, Width::W16) => reverse::reverse_bytes16(x as u16) as u64,
        (Op::ReverseBytes, Width::W32) => reverse::reverse_bytes32(x as u32) as u64,
        (Op::ReverseBytes, Width::W64) => reverse::reverse_bytes64(x),
    };

    Ok(result)
}
