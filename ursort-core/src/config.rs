//! Sort configuration: element kind, pass order, and direction
//!
//! A configuration is a plain immutable value. Construction performs no
//! validation; the sort call resolves and checks the configuration, so an
//! out-of-range kind code supplied by a boundary caller surfaces there as
//! [`SortError::UnsupportedKind`](crate::SortError::UnsupportedKind).

/// Element kinds supported by the sorter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SortKind {
    /// Unsigned integers or fixed-width byte strings; bytes are already
    /// order-preserving and no key transform is applied
    RawBytes = 0,
    /// Two's-complement signed integers of any fixed width
    SignedInteger = 1,
    /// IEEE-754 single precision; element width must be 4 bytes
    Float32 = 2,
    /// IEEE-754 double precision; element width must be 8 bytes
    Float64 = 3,
}

impl SortKind {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SortKind::RawBytes),
            1 => Some(SortKind::SignedInteger),
            2 => Some(SortKind::Float32),
            3 => Some(SortKind::Float64),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Element width this kind requires, if it constrains one
    ///
    /// Only the floating-point kinds pin the width; integer and raw-byte
    /// kinds accept any fixed width the caller supplies.
    pub const fn required_width(self) -> Option<usize> {
        match self {
            SortKind::Float32 => Some(4),
            SortKind::Float64 => Some(8),
            SortKind::RawBytes | SortKind::SignedInteger => None,
        }
    }
}

impl core::fmt::Display for SortKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SortKind::RawBytes => write!(f, "raw-bytes"),
            SortKind::SignedInteger => write!(f, "signed-integer"),
            SortKind::Float32 => write!(f, "float32"),
            SortKind::Float64 => write!(f, "float64"),
        }
    }
}

/// Byte-pass order for the counting-sort engine
///
/// `LsbFirst` is the correct choice for numeric kinds: composing stable
/// per-digit passes from least to most significant significance is what
/// yields a total numeric order. `MsbFirst` over multi-byte numeric keys
/// produces digit-order, not value-order, and is kept only because
/// `RawBytes` + `MsbFirst` selects the dedicated string path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PassOrder {
    /// Least-significant byte first (numeric default)
    LsbFirst = 0,
    /// Most-significant byte first (string mode selector)
    MsbFirst = 1,
}

impl PassOrder {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PassOrder::LsbFirst),
            1 => Some(PassOrder::MsbFirst),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Requested output ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Smallest to largest
    Ascending = 0,
    /// Largest to smallest
    Descending = 1,
}

impl Direction {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Ascending),
            1 => Some(Direction::Descending),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Immutable configuration for one or more sort calls
///
/// The kind is stored as its raw code so that a configuration can also be
/// built from untrusted input (wire fields, CLI flags) without validating
/// at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortConfig {
    kind_code: u8,
    pass_order: PassOrder,
    direction: Direction,
}

impl SortConfig {
    /// Create a configuration from typed parts
    pub const fn new(kind: SortKind, pass_order: PassOrder, direction: Direction) -> Self {
        Self {
            kind_code: kind.to_u8(),
            pass_order,
            direction,
        }
    }

    /// Create a configuration from a raw kind code
    ///
    /// The code is not checked here; an undefined code is reported as
    /// `UnsupportedKind` by the sort call that uses the configuration.
    pub const fn from_raw(kind_code: u8, pass_order: PassOrder, direction: Direction) -> Self {
        Self {
            kind_code,
            pass_order,
            direction,
        }
    }

    /// Raw kind code as stored
    pub const fn kind_code(&self) -> u8 {
        self.kind_code
    }

    /// Resolve the kind, rejecting undefined codes
    pub const fn kind(&self) -> crate::Result<SortKind> {
        match SortKind::from_u8(self.kind_code) {
            Some(kind) => Ok(kind),
            None => Err(crate::SortError::UnsupportedKind),
        }
    }

    /// Configured pass order
    pub const fn pass_order(&self) -> PassOrder {
        self.pass_order
    }

    /// Configured direction
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKind::RawBytes, PassOrder::LsbFirst, Direction::Ascending)
    }
}
