//! Table-driven reference cases.
//!
//! Every byte value is shifted across the 64-bit range and checked against
//! per-byte answers computed by a plain bit loop, for every width the shifted
//! value still fits in. The reversal and byte-swap cases are fixed tables of
//! known answers.

use wordbits::*;

const DE_BRUIJN64: u64 = 0x03f7_9d71_b4ca_8b09;

#[derive(Clone, Copy)]
struct Entry {
    nlz: u32,
    ntz: u32,
    pop: u32,
}

/// Bit-loop answers for every byte value.
fn byte_entries() -> [Entry; 256] {
    let mut tab = [Entry {
        nlz: 8,
        ntz: 8,
        pop: 0,
    }; 256];
    for (i, entry) in tab.iter_mut().enumerate().skip(1) {
        let mut x = i;
        let mut n = 0;
        while x & 0x80 == 0 {
            n += 1;
            x <<= 1;
        }
        entry.nlz = n;

        let mut x = i;
        let mut n = 0;
        while x & 1 == 0 {
            n += 1;
            x >>= 1;
        }
        entry.ntz = n;

        let mut x = i;
        let mut n = 0;
        while x != 0 {
            n += (x & 1) as u32;
            x >>= 1;
        }
        entry.pop = n;
    }
    tab
}

/// Yields `(entry, k, x)` for every byte `i` and shift `k`, with `x = i << k`.
fn shifted_bytes() -> impl Iterator<Item = (Entry, u32, u64)> {
    let tab = byte_entries();
    (0..256usize).flat_map(move |i| (0..64 - 8).map(move |k| (tab[i], k, (i as u64) << k)))
}

#[test]
fn test_leading_zeros_shifted_bytes() {
    for (e, k, x) in shifted_bytes() {
        let want = |w: u32| if x == 0 { w } else { e.nlz + w - 8 - k };
        if x <= u8::MAX as u64 {
            assert_eq!(leading_zeros8(x as u8), want(8), "leading_zeros8({:#04x})", x);
        }
        if x <= u16::MAX as u64 {
            assert_eq!(leading_zeros16(x as u16), want(16), "leading_zeros16({:#06x})", x);
        }
        if x <= u32::MAX as u64 {
            assert_eq!(leading_zeros32(x as u32), want(32), "leading_zeros32({:#010x})", x);
            if UINT_SIZE == 32 {
                assert_eq!(leading_zeros(x as usize), want(32), "leading_zeros({:#x})", x);
            }
        }
        assert_eq!(leading_zeros64(x), want(64), "leading_zeros64({:#018x})", x);
        if UINT_SIZE == 64 {
            assert_eq!(leading_zeros(x as usize), want(64), "leading_zeros({:#x})", x);
        }
    }
}

#[test]
fn test_trailing_zeros_shifted_bytes() {
    for (e, k, x) in shifted_bytes() {
        let want = |w: u32| if x == 0 { w } else { e.ntz + k };
        if x <= u8::MAX as u64 {
            assert_eq!(trailing_zeros8(x as u8), want(8), "trailing_zeros8({:#04x})", x);
        }
        if x <= u16::MAX as u64 {
            assert_eq!(trailing_zeros16(x as u16), want(16), "trailing_zeros16({:#06x})", x);
        }
        if x <= u32::MAX as u64 {
            assert_eq!(trailing_zeros32(x as u32), want(32), "trailing_zeros32({:#010x})", x);
            if UINT_SIZE == 32 {
                assert_eq!(trailing_zeros(x as usize), want(32));
            }
        }
        assert_eq!(trailing_zeros64(x), want(64), "trailing_zeros64({:#018x})", x);
        if UINT_SIZE == 64 {
            assert_eq!(trailing_zeros(x as usize), want(64));
        }
    }
}

#[test]
fn test_ones_count_shifted_bytes() {
    for (e, _, x) in shifted_bytes() {
        if x <= u8::MAX as u64 {
            assert_eq!(ones_count8(x as u8), e.pop, "ones_count8({:#04x})", x);
        }
        if x <= u16::MAX as u64 {
            assert_eq!(ones_count16(x as u16), e.pop, "ones_count16({:#06x})", x);
        }
        if x <= u32::MAX as u64 {
            assert_eq!(ones_count32(x as u32), e.pop, "ones_count32({:#010x})", x);
            if UINT_SIZE == 32 {
                assert_eq!(ones_count(x as usize), e.pop);
            }
        }
        assert_eq!(ones_count64(x), e.pop, "ones_count64({:#018x})", x);
        if UINT_SIZE == 64 {
            assert_eq!(ones_count(x as usize), e.pop);
        }
    }
}

#[test]
fn test_len_shifted_bytes() {
    for (e, k, x) in shifted_bytes() {
        let want = if x == 0 { 0 } else { 8 - e.nlz + k };
        if x <= u8::MAX as u64 {
            assert_eq!(len8(x as u8), want, "len8({:#04x})", x);
        }
        if x <= u16::MAX as u64 {
            assert_eq!(len16(x as u16), want, "len16({:#06x})", x);
        }
        if x <= u32::MAX as u64 {
            assert_eq!(len32(x as u32), want, "len32({:#010x})", x);
            if UINT_SIZE == 32 {
                assert_eq!(len(x as usize), want);
            }
        }
        assert_eq!(len64(x), want, "len64({:#018x})", x);
        if UINT_SIZE == 64 {
            assert_eq!(len(x as usize), want);
        }
    }
}

#[test]
fn test_rotate_left_de_bruijn_pattern() {
    let m = DE_BRUIJN64;
    for k in 0..128u32 {
        let x8 = m as u8;
        let s = k & 0x7;
        let want8 = if s == 0 { x8 } else { x8 << s | x8 >> (8 - s) };
        assert_eq!(rotate_left8(x8, k as isize), want8, "rotate_left8(_, {})", k);

        let x16 = m as u16;
        let s = k & 0xf;
        let want16 = if s == 0 { x16 } else { x16 << s | x16 >> (16 - s) };
        assert_eq!(rotate_left16(x16, k as isize), want16, "rotate_left16(_, {})", k);

        let x32 = m as u32;
        let s = k & 0x1f;
        let want32 = if s == 0 { x32 } else { x32 << s | x32 >> (32 - s) };
        assert_eq!(rotate_left32(x32, k as isize), want32, "rotate_left32(_, {})", k);

        let s = k & 0x3f;
        let want64 = if s == 0 { m } else { m << s | m >> (64 - s) };
        assert_eq!(rotate_left64(m, k as isize), want64, "rotate_left64(_, {})", k);

        let x = m as usize;
        assert_eq!(rotate_left(x, k as isize), x.rotate_left(k % UINT_SIZE));
    }
}

#[test]
fn test_rotate_right_de_bruijn_pattern() {
    let m = DE_BRUIJN64;
    for k in 0..128u32 {
        let x8 = m as u8;
        let s = k & 0x7;
        let want8 = if s == 0 { x8 } else { x8 >> s | x8 << (8 - s) };
        assert_eq!(rotate_right8(x8, k as isize), want8, "rotate_right8(_, {})", k);

        let x16 = m as u16;
        let s = k & 0xf;
        let want16 = if s == 0 { x16 } else { x16 >> s | x16 << (16 - s) };
        assert_eq!(rotate_right16(x16, k as isize), want16, "rotate_right16(_, {})", k);

        let x32 = m as u32;
        let s = k & 0x1f;
        let want32 = if s == 0 { x32 } else { x32 >> s | x32 << (32 - s) };
        assert_eq!(rotate_right32(x32, k as isize), want32, "rotate_right32(_, {})", k);

        let s = k & 0x3f;
        let want64 = if s == 0 { m } else { m >> s | m << (64 - s) };
        assert_eq!(rotate_right64(m, k as isize), want64, "rotate_right64(_, {})", k);

        let x = m as usize;
        assert_eq!(rotate_right(x, k as isize), x.rotate_right(k % UINT_SIZE));
    }
}

/// Checks that the `W`-bit reversal of the low bits of `x64` is the top `W`
/// bits of `want64`.
fn check_reverse(x64: u64, want64: u64) {
    let x8 = x64 as u8;
    assert_eq!(reverse8(x8), (want64 >> 56) as u8, "reverse8({:#04x})", x8);

    let x16 = x64 as u16;
    assert_eq!(reverse16(x16), (want64 >> 48) as u16, "reverse16({:#06x})", x16);

    let x32 = x64 as u32;
    assert_eq!(reverse32(x32), (want64 >> 32) as u32, "reverse32({:#010x})", x32);
    if UINT_SIZE == 32 {
        assert_eq!(reverse(x32 as usize), (want64 >> 32) as usize);
    }

    assert_eq!(reverse64(x64), want64, "reverse64({:#018x})", x64);
    if UINT_SIZE == 64 {
        assert_eq!(reverse(x64 as usize), want64 as usize);
    }
}

#[test]
fn test_reverse_each_bit() {
    for i in 0..64 {
        check_reverse(1u64 << i, 1u64 << (63 - i));
    }
}

#[test]
fn test_reverse_patterns() {
    let cases: &[(u64, u64)] = &[
        (0, 0),
        (0x1, 0x8 << 60),
        (0x2, 0x4 << 60),
        (0x3, 0xc << 60),
        (0x4, 0x2 << 60),
        (0x5, 0xa << 60),
        (0x6, 0x6 << 60),
        (0x7, 0xe << 60),
        (0x8, 0x1 << 60),
        (0x9, 0x9 << 60),
        (0xa, 0x5 << 60),
        (0xb, 0xd << 60),
        (0xc, 0x3 << 60),
        (0xd, 0xb << 60),
        (0xe, 0x7 << 60),
        (0xf, 0xf << 60),
        (0x0568_6487, 0xe126_16a0_0000_0000),
        (0x0123_4567_89ab_cdef, 0xf7b3_d591_e6a2_c480),
    ];
    for &(x, r) in cases {
        check_reverse(x, r);
        check_reverse(r, x);
    }
}

fn check_reverse_bytes(x64: u64, want64: u64) {
    let x16 = x64 as u16;
    assert_eq!(reverse_bytes16(x16), (want64 >> 48) as u16, "reverse_bytes16({:#06x})", x16);

    let x32 = x64 as u32;
    assert_eq!(reverse_bytes32(x32), (want64 >> 32) as u32, "reverse_bytes32({:#010x})", x32);
    if UINT_SIZE == 32 {
        assert_eq!(reverse_bytes(x32 as usize), (want64 >> 32) as usize);
    }

    assert_eq!(reverse_bytes64(x64), want64, "reverse_bytes64({:#018x})", x64);
    if UINT_SIZE == 64 {
        assert_eq!(reverse_bytes(x64 as usize), want64 as usize);
    }
}

#[test]
fn test_reverse_bytes_patterns() {
    let cases: &[(u64, u64)] = &[
        (0, 0),
        (0x01, 0x01 << 56),
        (0x0123, 0x2301 << 48),
        (0x01_2345, 0x45_2301 << 40),
        (0x0123_4567, 0x6745_2301 << 32),
        (0x01_2345_6789, 0x89_6745_2301 << 24),
        (0x0123_4567_89ab, 0xab89_6745_2301 << 16),
        (0x01_2345_6789_abcd, 0xcd_ab89_6745_2301 << 8),
        (0x0123_4567_89ab_cdef, 0xefcd_ab89_6745_2301),
    ];
    for &(x, r) in cases {
        check_reverse_bytes(x, r);
        check_reverse_bytes(r, x);
    }
}

#[test]
fn test_uint_size() {
    assert_eq!(UINT_SIZE as usize, std::mem::size_of::<usize>() * 8);
}
