//! GS1 UPC-A encoding tables and fixed patterns.
//!
//! All of these are standard-mandated constants; they never change at
//! runtime and are safe to read from any number of threads.

use crate::bits::BitRun;

/// Quiet zone flanking the symbol on each side (9 blank modules).
pub const QUIET_ZONE: BitRun = BitRun::new(0, 9);
/// Start/end guard pattern.
pub const SIDE_GUARD: BitRun = BitRun::new(0b101, 3);
/// Center guard separating the left and right digit groups.
pub const CENTER_GUARD: BitRun = BitRun::new(0b01010, 5);

/// Width of a digit code in modules.
pub const DIGIT_WIDTH: u8 = 7;

/// Total symbol width in modules: two quiet zones, three guards and
/// twelve 7-module digits.
pub const SYMBOL_WIDTH: usize = 9 + 3 + 6 * 7 + 5 + 6 * 7 + 3 + 9;

/// L-codes: patterns for the six left-half digits (odd parity).
pub const L_CODES: [u16; 10] = [
    0b0001101, // 0
    0b0011001, // 1
    0b0010011, // 2
    0b0111101, // 3
    0b0100011, // 4
    0b0110001, // 5
    0b0101111, // 6
    0b0111011, // 7
    0b0110111, // 8
    0b0001011, // 9
];

/// R-codes: patterns for the six right-half digits (even parity, the
/// bitwise complement of the L-codes).
pub const R_CODES: [u16; 10] = [
    0b1110010, // 0
    0b1100110, // 1
    0b1101100, // 2
    0b1000010, // 3
    0b1011100, // 4
    0b1001110, // 5
    0b1010000, // 6
    0b1000100, // 7
    0b1001000, // 8
    0b1110100, // 9
];
