//! Truth tables of two-input boolean functions.
//!
//! A function `f(a, b)` over two boolean inputs is fully described by its four
//! outputs. We pack them into a 4-bit integer where bit `2*a + b` holds `f(a, b)`:
//!
//! ```text
//! bit 3: f(T, T)   <- most significant
//! bit 2: f(T, F)
//! bit 1: f(F, T)
//! bit 0: f(F, F)
//! ```
//!
//! Written MSB-first this is the bit string of outputs over `(T,T), (T,F), (F,T), (F,F)`,
//! so e.g. `a ∧ b` is `1000` (8) and `a ⊕ b` is `0110` (6).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::operation::{Operation, OperationEntry, OPERATIONS};

/// Input pairs in evaluation order, most significant bit first.
pub const INPUTS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// Truth table id of a two-input boolean function.
///
/// # Invariants
///
/// - The wrapped value is always in `[0, 15]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TruthTable(u8);

// Constructors
impl TruthTable {
    pub const FALSE: TruthTable = TruthTable(0);
    pub const TRUE: TruthTable = TruthTable(0b1111);

    /// Creates a truth table from its id, or `None` if `id > 15`.
    pub const fn new(id: u8) -> Option<Self> {
        if id < 16 {
            Some(TruthTable(id))
        } else {
            None
        }
    }

    /// Creates a truth table without the range check.
    ///
    /// The caller must ensure that `id <= 15`.
    pub(crate) const fn from_id_unchecked(id: u8) -> Self {
        debug_assert!(id < 16);
        TruthTable(id)
    }

    /// Creates a truth table from outputs in `(T,T), (T,F), (F,T), (F,F)` order.
    pub fn from_bits(bits: [bool; 4]) -> Self {
        let id = bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8);
        TruthTable(id)
    }
}

// Getters
impl TruthTable {
    /// Returns the id in `[0, 15]`.
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Returns the outputs in `(T,T), (T,F), (F,T), (F,F)` order.
    pub fn bits(self) -> [bool; 4] {
        INPUTS.map(|(a, b)| self.eval(a, b))
    }

    /// Evaluates the function this table denotes.
    pub const fn eval(self, a: bool, b: bool) -> bool {
        let shift = ((a as u8) << 1) | b as u8;
        (self.0 >> shift) & 1 != 0
    }

    pub fn operation(self) -> &'static OperationEntry {
        &OPERATIONS[self.0 as usize]
    }

    pub fn kind(self) -> Operation {
        self.operation().operation
    }
}

/// Computes the truth table of `f` by evaluating it on all four input pairs.
///
/// ```
/// use truth_ops::classify;
///
/// assert_eq!(classify(|a, _| a).id(), 12);
/// assert_eq!(classify(|a, b| a && b).id(), 8);
/// ```
pub fn classify<F>(f: F) -> TruthTable
where
    F: Fn(bool, bool) -> bool,
{
    let table = TruthTable::from_bits(INPUTS.map(|(a, b)| f(a, b)));
    debug!("classify: {} (id = {})", table, table.id());
    table
}

impl From<TruthTable> for u8 {
    fn from(table: TruthTable) -> Self {
        table.0
    }
}

impl TryFrom<i64> for TruthTable {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u8::try_from(id)
            .ok()
            .and_then(TruthTable::new)
            .ok_or(Error::InvalidTableId(id))
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

impl FromStr for TruthTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidBitString(s.to_string());
        if s.len() != 4 {
            return Err(invalid());
        }
        let mut bits = [false; 4];
        for (bit, c) in bits.iter_mut().zip(s.chars()) {
            *bit = match c {
                '0' => false,
                '1' => true,
                _ => return Err(invalid()),
            };
        }
        Ok(TruthTable::from_bits(bits))
    }
}

impl Not for TruthTable {
    type Output = Self;

    fn not(self) -> Self::Output {
        TruthTable(!self.0 & 0b1111)
    }
}

impl BitAnd for TruthTable {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        TruthTable(self.0 & rhs.0)
    }
}

impl BitOr for TruthTable {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        TruthTable(self.0 | rhs.0)
    }
}

impl BitXor for TruthTable {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        TruthTable(self.0 ^ rhs.0)
    }
}
