use std::error::Error;
use std::fmt;

use once_cell::sync::Lazy;

/// Number of demo octaves scanned, [2^0, 2^1) through [2^7, 2^8)
pub const OCTAVE_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum FloatScanError {
    InvalidRange,
    InvalidStep,
    UnsupportedBounds,
}

impl fmt::Display for FloatScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FloatScanError::InvalidRange => write!(f, "Range start must be below range end"),
            FloatScanError::InvalidStep => write!(f, "Step size must be positive"),
            FloatScanError::UnsupportedBounds => {
                write!(f, "Exact f32 counting requires finite positive bounds")
            }
        }
    }
}

impl Error for FloatScanError {}

pub type FloatScanResult<T> = std::result::Result<T, FloatScanError>;

/// Half-open scan range [start, end) walked with a fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    start: f64,
    end: f64,
    step: f64,
}

impl FloatRange {
    pub fn new(start: f64, end: f64, step: f64) -> FloatScanResult<Self> {
        if !(start < end) {
            return Err(FloatScanError::InvalidRange);
        }
        if !(step > 0.0) {
            return Err(FloatScanError::InvalidStep);
        }
        Ok(FloatRange { start, end, step })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Range label in the "start-end" form the reporting side displays
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Counts fixed-size steps from `start` that stay strictly below `end`.
///
/// This is an accumulation scan: the running value is advanced by repeated
/// addition, so rounding can drift near the boundary and the count may differ
/// from the closed-form `ceil((end - start) / step)` there. On the demo
/// octaves every partial sum is exactly representable and no drift occurs.
pub fn count_fixed_steps(range: &FloatRange) -> usize {
    let mut current = range.start;
    let mut count = 0;

    while current < range.end {
        count += 1;
        current += range.step;
    }

    count
}

/// Exact number of distinct f32 values in [start, end).
///
/// Bounds must be finite and positive; over that domain the f32 bit patterns
/// increase monotonically with the value, so the count is the difference of
/// the two patterns. This is the precise counterpart of the fixed-step scan
/// for measuring float density.
pub fn count_representable_f32(start: f32, end: f32) -> FloatScanResult<u32> {
    if !(start < end) {
        return Err(FloatScanError::InvalidRange);
    }
    if start <= 0.0 || !end.is_finite() {
        return Err(FloatScanError::UnsupportedBounds);
    }

    Ok(end.to_bits() - start.to_bits())
}

// Demo table: range [2^i, 2^(i+1)) scanned with step 2^(i-23), the f32 ulp
// spacing of that octave
static OCTAVES: Lazy<Vec<FloatRange>> = Lazy::new(|| {
    (0..OCTAVE_COUNT as i32)
        .map(|i| FloatRange {
            start: 2f64.powi(i),
            end: 2f64.powi(i + 1),
            step: 2f64.powi(i - 23),
        })
        .collect()
});

/// The eight demo octaves [2^i, 2^(i+1)) with step 2^(i-23)
pub fn octave_ranges() -> &'static [FloatRange] {
    &OCTAVES
}

/// Scans every demo octave, pairing each range label with its step count
pub fn scan_octaves() -> Vec<(String, usize)> {
    octave_ranges()
        .iter()
        .map(|range| (range.label(), count_fixed_steps(range)))
        .collect()
}
