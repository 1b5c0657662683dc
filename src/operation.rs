//! The 16 canonical binary logic operations.
//!
//! Every two-input boolean function is exactly one of these. The static
//! [`OPERATIONS`] table is indexed by [`TruthTable`] id, so lookup is a plain
//! array access and the mapping is a bijection over `[0, 15]` by construction.

use std::fmt;

use log::trace;

use crate::error::Error;
use crate::table::TruthTable;

/// Canonical binary operation, with the truth table id as its discriminant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Operation {
    False = 0,
    Nor = 1,
    NotAAndB = 2,
    NotA = 3,
    AAndNotB = 4,
    NotB = 5,
    Xor = 6,
    Nand = 7,
    And = 8,
    Xnor = 9,
    B = 10,
    Implies = 11,
    A = 12,
    ImpliedBy = 13,
    Or = 14,
    True = 15,
}

impl Operation {
    /// All operations in truth table order.
    pub fn all() -> impl Iterator<Item = Operation> {
        OPERATIONS.iter().map(|entry| entry.operation)
    }

    /// Applies the operation to `a` and `b`.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operation::False => false,
            Operation::Nor => !(a || b),
            Operation::NotAAndB => !a && b,
            Operation::NotA => !a,
            Operation::AAndNotB => a && !b,
            Operation::NotB => !b,
            Operation::Xor => a != b,
            Operation::Nand => !(a && b),
            Operation::And => a && b,
            Operation::Xnor => a == b,
            Operation::B => b,
            Operation::Implies => !a || b,
            Operation::A => a,
            Operation::ImpliedBy => a || !b,
            Operation::Or => a || b,
            Operation::True => true,
        }
    }

    pub fn table(self) -> TruthTable {
        TruthTable::from_id_unchecked(self as u8)
    }

    pub fn entry(self) -> &'static OperationEntry {
        &OPERATIONS[self as usize]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().name)
    }
}

/// Row of the operation table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OperationEntry {
    /// 1-based position in the table (`id + 1`).
    pub ordinal: u8,
    pub name: &'static str,
    pub operation: Operation,
}

impl OperationEntry {
    const fn new(ordinal: u8, name: &'static str, operation: Operation) -> Self {
        OperationEntry { ordinal, name, operation }
    }
}

/// Operation table, indexed by truth table id.
pub static OPERATIONS: [OperationEntry; 16] = [
    OperationEntry::new(1, "FALSE", Operation::False),
    OperationEntry::new(2, "A NOR B", Operation::Nor),
    OperationEntry::new(3, "NOT A AND B", Operation::NotAAndB),
    OperationEntry::new(4, "NOT A", Operation::NotA),
    OperationEntry::new(5, "A AND NOT B", Operation::AAndNotB),
    OperationEntry::new(6, "NOT B", Operation::NotB),
    OperationEntry::new(7, "A XOR B", Operation::Xor),
    OperationEntry::new(8, "A NAND B", Operation::Nand),
    OperationEntry::new(9, "A AND B", Operation::And),
    OperationEntry::new(10, "A XNOR B (Equivalence)", Operation::Xnor),
    OperationEntry::new(11, "B", Operation::B),
    OperationEntry::new(12, "A IMPLIES B", Operation::Implies),
    OperationEntry::new(13, "A", Operation::A),
    OperationEntry::new(14, "B IMPLIES A", Operation::ImpliedBy),
    OperationEntry::new(15, "A OR B", Operation::Or),
    OperationEntry::new(16, "TRUE", Operation::True),
];

/// Looks up the operation for a raw truth table id.
///
/// Fails with [`Error::InvalidTableId`] if `id` is outside `[0, 15]`.
///
/// ```
/// use truth_ops::{lookup, Error};
///
/// let entry = lookup(12).unwrap();
/// assert_eq!((entry.ordinal, entry.name), (13, "A"));
/// assert_eq!(lookup(16), Err(Error::InvalidTableId(16)));
/// ```
pub fn lookup(id: i64) -> Result<&'static OperationEntry, Error> {
    let table = TruthTable::try_from(id)?;
    let entry = table.operation();
    trace!("lookup({}) -> #{} ({})", id, entry.ordinal, entry.name);
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::table::classify;

    #[test]
    fn test_table_is_indexed_by_id() {
        for (id, entry) in OPERATIONS.iter().enumerate() {
            assert_eq!(entry.operation as usize, id);
            assert_eq!(entry.ordinal as usize, id + 1);
        }
    }

    #[test]
    fn test_apply_matches_table() {
        for op in Operation::all() {
            assert_eq!(classify(|a, b| op.apply(a, b)), op.table(), "operation {}", op);
        }
    }

    #[test]
    fn test_lookup() {
        let entry = lookup(12).unwrap();
        assert_eq!((entry.ordinal, entry.name), (13, "A"));
        let entry = lookup(8).unwrap();
        assert_eq!((entry.ordinal, entry.name), (9, "A AND B"));
        let entry = lookup(6).unwrap();
        assert_eq!((entry.ordinal, entry.name), (7, "A XOR B"));
        assert_eq!(lookup(0).unwrap().name, "FALSE");
        assert_eq!(lookup(15).unwrap().name, "TRUE");
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(lookup(16), Err(Error::InvalidTableId(16)));
        assert_eq!(lookup(-1), Err(Error::InvalidTableId(-1)));
        assert_eq!(lookup(i64::MIN), Err(Error::InvalidTableId(i64::MIN)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Xnor.to_string(), "A XNOR B (Equivalence)");
        assert_eq!(Operation::ImpliedBy.to_string(), "B IMPLIES A");
    }

    #[test]
    fn test_entry_roundtrip() {
        for op in Operation::all() {
            assert_eq!(op.entry().operation, op);
            assert_eq!(op.table().kind(), op);
        }
    }
}
