//! Operator vocabulary for rule expressions.
//!
//! driven-script expressions use single-character operators only; multi-character sequences like
//! `>=` are tokenized as two adjacent operator tokens. The lexer classifies by membership in
//! this set, so the grammar carries no precedence or fixity metadata.
//!
//! ## Notes
//! - `-` is in this set even though `--` opens a line comment; comment rules are tried first.
//! - `=` is in this set even though `=` in a rule header opens the expression body; once inside
//!   an expression it is an ordinary operator character.

/// Every character classified as an operator inside a rule expression.
pub const OPERATOR_CHARS: &str = "=<>!&|+*/%-";

/// Check membership in the expression operator class.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_class_membership() {
        for c in OPERATOR_CHARS.chars() {
            assert!(is_operator_char(c), "{c:?} should be an operator");
        }
        for c in ['a', '0', '(', '.', ' ', '@'] {
            assert!(!is_operator_char(c), "{c:?} should not be an operator");
        }
    }
}
