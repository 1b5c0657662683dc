//! Boolean combinators for building two-input expressions.

/// Material implication `a → b`, i.e. `¬a ∨ b`.
pub fn implies(a: bool, b: bool) -> bool {
    !a || b
}

/// Converse implication `a ← b`, i.e. `a ∨ ¬b`.
pub fn implied_by(a: bool, b: bool) -> bool {
    a || !b
}

pub fn xor(a: bool, b: bool) -> bool {
    a != b
}

pub fn xnor(a: bool, b: bool) -> bool {
    a == b
}

pub fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

pub fn nor(a: bool, b: bool) -> bool {
    !(a || b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUTS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

    #[test]
    fn test_implies() {
        let res: Vec<bool> = INPUTS.iter().map(|&(a, b)| implies(a, b)).collect();
        assert_eq!(res, [true, false, true, true]);
    }

    #[test]
    fn test_implied_by() {
        let res: Vec<bool> = INPUTS.iter().map(|&(a, b)| implied_by(a, b)).collect();
        assert_eq!(res, [true, true, false, true]);
        for (a, b) in INPUTS {
            assert_eq!(implied_by(a, b), implies(b, a));
        }
    }

    #[test]
    fn test_xor_family() {
        for (a, b) in INPUTS {
            assert_eq!(xor(a, b), !xnor(a, b));
            assert_eq!(nand(a, b), !(a && b));
            assert_eq!(nor(a, b), !a && !b);
        }
        assert!(xor(true, false));
        assert!(!xor(true, true));
    }
}
