//! # truth-ops: classifying two-input boolean functions
//!
//! There are exactly 16 boolean functions of two inputs. **`truth-ops`** evaluates
//! a function on all four input pairs, packs the outputs into a 4-bit
//! [`TruthTable`], and maps it to one of the 16 canonical [`Operation`]s
//! (FALSE, NOR, XOR, NAND, AND, IMPLIES, ...).
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_ops::combinators::{implies, xor};
//! use truth_ops::{classify, lookup};
//!
//! // (a → b) ∧ (b → a) is equivalence
//! let t = classify(|a, b| implies(a, b) && implies(b, a));
//! assert_eq!(t.to_string(), "1001");
//! assert_eq!(t.operation().name, "A XNOR B (Equivalence)");
//!
//! let t = classify(xor);
//! let entry = lookup(t.id() as i64).unwrap();
//! assert_eq!((entry.ordinal, entry.name), (7, "A XOR B"));
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: [`TruthTable`] and [`classify`].
//! - **[`operation`]**: the static [`OPERATIONS`] table and [`lookup`].
//! - **[`combinators`]**: `implies`, `implied_by`, `xor` and friends for writing expressions.

pub mod combinators;
pub mod error;
pub mod operation;
pub mod table;

pub use error::Error;
pub use operation::{lookup, Operation, OperationEntry, OPERATIONS};
pub use table::{classify, TruthTable};

/// Result of classifying one labelled function.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Classification<'a> {
    pub label: &'a str,
    pub table: TruthTable,
    pub entry: &'static OperationEntry,
}

/// Classifies every labelled function, preserving input order.
///
/// ```
/// use truth_ops::classify_all;
///
/// let exprs: [(&str, fn(bool, bool) -> bool); 2] = [("and", |a, b| a && b), ("lhs", |a, _| a)];
/// let res = classify_all(exprs);
/// assert_eq!(res[0].entry.ordinal, 9);
/// assert_eq!(res[1].entry.name, "A");
/// ```
pub fn classify_all<'a, I, F>(exprs: I) -> Vec<Classification<'a>>
where
    I: IntoIterator<Item = (&'a str, F)>,
    F: Fn(bool, bool) -> bool,
{
    exprs
        .into_iter()
        .map(|(label, f)| {
            let table = classify(f);
            Classification {
                label,
                table,
                entry: table.operation(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_classify_all_keeps_order() {
        let exprs: Vec<(&str, fn(bool, bool) -> bool)> = vec![
            ("true", |_, _| true),
            ("nor", combinators::nor),
            ("false", |_, _| false),
        ];
        let res = classify_all(exprs);
        let labels: Vec<&str> = res.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["true", "nor", "false"]);
        let ordinals: Vec<u8> = res.iter().map(|c| c.entry.ordinal).collect();
        assert_eq!(ordinals, [16, 2, 1]);
    }

    #[test]
    fn test_classify_all_empty() {
        let exprs: Vec<(&str, fn(bool, bool) -> bool)> = vec![];
        assert!(classify_all(exprs).is_empty());
    }
}
