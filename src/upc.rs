use core::fmt;
use core::iter;
use core::str::FromStr;

use crate::bits::BitRun;
use crate::error::UpcError;
use crate::tables::{
    CENTER_GUARD, DIGIT_WIDTH, L_CODES, QUIET_ZONE, R_CODES, SIDE_GUARD, SYMBOL_WIDTH,
};

/// Look up the L-code pattern for a left-half digit.
///
/// Digits taken from a validated [`UpcA`] are always in range; this
/// checked form is for callers working with raw digit values.
pub fn left_code(digit: u8) -> Result<BitRun, UpcError> {
    L_CODES
        .get(digit as usize)
        .map(|&bits| BitRun::new(bits, DIGIT_WIDTH))
        .ok_or(UpcError::DigitOutOfRange(digit))
}

/// Look up the R-code pattern for a right-half digit.
pub fn right_code(digit: u8) -> Result<BitRun, UpcError> {
    R_CODES
        .get(digit as usize)
        .map(|&bits| BitRun::new(bits, DIGIT_WIDTH))
        .ok_or(UpcError::DigitOutOfRange(digit))
}

/// A validated 12-digit UPC-A identifier.
///
/// Construction validates the input, so every `UpcA` holds exactly twelve
/// digits in 0-9 and can always produce its 113-module bar sequence.
///
/// ```
/// use upca::UpcA;
///
/// let upc: UpcA = "036000291452".parse()?;
/// assert_eq!(upc.to_string(), "036000291452");
/// assert_eq!(upc.bits().count(), 113);
/// # Ok::<(), upca::UpcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcA {
    digits: [u8; 12],
}

impl UpcA {
    /// Parses a UPC from its decimal string form. The whole input must be
    /// exactly twelve ASCII digits; no surrounding characters are allowed.
    pub fn new(upc: &str) -> Result<Self, UpcError> {
        upc.parse()
    }

    /// Replaces the stored UPC. On validation failure the previous value
    /// is kept unchanged.
    pub fn set_upc(&mut self, upc: &str) -> Result<(), UpcError> {
        *self = upc.parse()?;
        Ok(())
    }

    /// The twelve digits, most significant first.
    #[inline]
    pub const fn digits(&self) -> &[u8; 12] {
        &self.digits
    }

    /// The UPC re-joined into its decimal string form.
    pub fn upc(&self) -> String {
        self.to_string()
    }

    /// The modulo-10 check digit implied by the first eleven digits.
    ///
    /// Validation does not enforce it; compare against the stored twelfth
    /// digit with [`UpcA::has_valid_check_digit`] if you need to.
    pub fn check_digit(&self) -> u8 {
        let sum: u32 = self.digits[..11]
            .iter()
            .enumerate()
            .map(|(i, &d)| if i % 2 == 0 { 3 * d as u32 } else { d as u32 })
            .sum();
        ((10 - sum % 10) % 10) as u8
    }

    /// Whether the stored twelfth digit matches the computed check digit.
    pub fn has_valid_check_digit(&self) -> bool {
        self.digits[11] == self.check_digit()
    }

    /// Iterator over the runs making up the symbol: quiet zone, start
    /// guard, six L-coded digits, center guard, six R-coded digits, end
    /// guard, quiet zone.
    pub const fn symbol(&self) -> Symbol {
        Symbol { digits: self.digits, part: SymbolPart::LeadIn }
    }

    /// The full bar sequence, one `bool` per module, 113 in total.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        self.symbol().flatten()
    }

    /// Rendering configuration for this UPC with the default module
    /// width of 1.
    pub const fn render(self) -> UpcARender {
        UpcARender { inner: self, scale: 1, inverted: false }
    }

    /// Encodes the symbol as an in-memory PNG, `module_width` pixels per
    /// module. The image is square with a white background.
    pub fn to_png(&self, module_width: u16) -> Result<Vec<u8>, UpcError> {
        self.render().set_scale(module_width).to_png()
    }
}

impl FromStr for UpcA {
    type Err = UpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 12 || !raw.iter().all(|b| b.is_ascii_digit()) {
            return Err(UpcError::InvalidUpc(s.to_owned()));
        }

        let mut digits = [0u8; 12];
        for (digit, byte) in digits.iter_mut().zip(raw) {
            *digit = byte - b'0';
        }
        Ok(Self { digits })
    }
}

impl TryFrom<u64> for UpcA {
    type Error = UpcError;

    /// Zero-pads the value to twelve digits. Values wider than twelve
    /// digits are rejected.
    fn try_from(upc: u64) -> Result<Self, Self::Error> {
        format!("{upc:012}").parse()
    }
}

impl fmt::Display for UpcA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum SymbolPart {
    LeadIn,
    StartGuard,
    Left(usize),
    CenterGuard,
    Right(usize),
    EndGuard,
    LeadOut,
    Done,
}

/// Iterator yielding the symbol as [`BitRun`]s, left to right.
#[derive(Debug, Clone)]
pub struct Symbol {
    digits: [u8; 12],
    part: SymbolPart,
}

impl iter::Iterator for Symbol {
    type Item = BitRun;

    fn next(&mut self) -> Option<Self::Item> {
        use SymbolPart::*;

        let (item, next) = match self.part {
            LeadIn => (QUIET_ZONE, StartGuard),
            StartGuard => (SIDE_GUARD, Left(0)),
            Left(i) => {
                let run = BitRun::new(L_CODES[self.digits[i] as usize], DIGIT_WIDTH);
                (run, if i == 5 { CenterGuard } else { Left(i + 1) })
            }
            CenterGuard => (CENTER_GUARD, Right(0)),
            Right(i) => {
                let run = BitRun::new(R_CODES[self.digits[i + 6] as usize], DIGIT_WIDTH);
                (run, if i == 5 { EndGuard } else { Right(i + 1) })
            }
            EndGuard => (SIDE_GUARD, LeadOut),
            LeadOut => (QUIET_ZONE, Done),
            Done => return None,
        };

        self.part = next;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        use SymbolPart::*;

        let count = match self.part {
            LeadIn => 17,
            StartGuard => 16,
            Left(i) => 15 - i,
            CenterGuard => 9,
            Right(i) => 8 - i,
            EndGuard => 2,
            LeadOut => 1,
            Done => 0,
        };
        (count, Some(count))
    }
}

impl iter::ExactSizeIterator for Symbol {}
impl iter::FusedIterator for Symbol {}

/// Rendering configuration: a [`UpcA`] plus module width (scale) and an
/// optional color inversion.
///
/// The raster is square: both sides equal the symbol width times the
/// scale, matching the classic GD-based rendition of this symbology.
#[derive(Debug, Clone, Copy)]
pub struct UpcARender {
    inner: UpcA,
    scale: u16,
    inverted: bool,
}

impl UpcARender {
    /// Raster width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        SYMBOL_WIDTH as u32 * self.scale as u32
    }

    /// Raster height in pixels. Equal to the width.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.width()
    }

    /// The module width in pixels.
    pub const fn scale(&self) -> u16 {
        self.scale
    }

    /// Sets the module width in pixels. Must be at least 1.
    pub const fn set_scale(mut self, scale: u16) -> Self {
        assert!(scale >= 1, "module width must be at least 1");
        self.scale = scale;
        self
    }

    /// Returns whether the render is set to inverted colors.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether the render should swap bar and background values.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// One scaled scanline, `width()` values. Every row of the raster is
    /// identical since the bars span the full height.
    pub fn scanline(&self) -> impl Iterator<Item = bool> {
        let scale = self.scale as usize;
        let invert = self.inverted;
        self.inner
            .bits()
            .flat_map(move |bit| iter::repeat(bit ^ invert).take(scale))
    }

    /// The whole raster, row-major, `width() * height()` values.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let this = *self;
        (0..this.height()).flat_map(move |_| this.scanline())
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (slot, bit) in target.iter_mut().zip(self.bits()) {
            *slot = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Encodes the raster as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, UpcError> {
        crate::render::encode_png(self)
    }
}
