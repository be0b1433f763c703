//! The public formula wrapper

use std::fmt;

use crate::error::FormulaResult;
use crate::lexer::tokenize;
use crate::token::{render_sequence, Token};

/// A spreadsheet formula, tokenized eagerly at construction.
///
/// The input uses the familiar ergonomic dialect: bare cell references and
/// comma-separated arguments, with an optional leading `=`. Rendering
/// produces ODF's `of:=` dialect with bracketed, dot-prefixed references and
/// semicolon-separated arguments.
///
/// No semantic validation is performed; a well-formed but meaningless
/// formula translates without complaint. Malformed input (stray characters,
/// unbalanced parentheses) is rejected here rather than surfacing later,
/// deep inside document serialization.
///
/// # Example
/// ```rust
/// use scrivener_formula::Formula;
///
/// let f = Formula::new("IF(A1=2,B1,C1)").unwrap();
/// assert_eq!(f.to_odf(), "of:=IF([.A1]=2;[.B1];[.C1])");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    tokens: Vec<Token>,
}

impl Formula {
    /// Tokenize a formula string, stripping a single leading `=` if present.
    pub fn new(source: &str) -> FormulaResult<Self> {
        let body = source.trim();
        let body = body.strip_prefix('=').unwrap_or(body);
        Ok(Formula {
            tokens: tokenize(body)?,
        })
    }

    /// Render the formula in ODF dialect, with the `of:=` prefix.
    pub fn to_odf(&self) -> String {
        let mut out = String::from("of:=");
        render_sequence(&self.tokens, &mut out);
        out
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_odf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_if() {
        let f = Formula::new("IF(A1=2,B1,C1)").unwrap();
        assert_eq!(f.to_odf(), "of:=IF([.A1]=2;[.B1];[.C1])");
    }

    #[test]
    fn test_leading_equals_is_stripped() {
        let with = Formula::new("=SUM(A1:A3)").unwrap();
        let without = Formula::new("SUM(A1:A3)").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_range_renders_as_single_bracket() {
        let f = Formula::new("SUM(B1:D1)").unwrap();
        assert_eq!(f.to_odf(), "of:=SUM([.B1:.D1])");
    }

    #[test]
    fn test_multi_token_argument() {
        // An argument may be an arithmetic expression; the separator is only
        // re-inserted between non-operator neighbors.
        let f = Formula::new("SUM(A1+B1,C1)").unwrap();
        assert_eq!(f.to_odf(), "of:=SUM([.A1]+[.B1];[.C1])");
    }

    #[test]
    fn test_nested_calls() {
        let f = Formula::new("IF(SUM(A1:A3)>10,MAX(B1,B2),0)").unwrap();
        assert_eq!(
            f.to_odf(),
            "of:=IF(SUM([.A1:.A3])>10;MAX([.B1];[.B2]);0)"
        );
    }

    #[test]
    fn test_equality_normalization() {
        let f = Formula::new("IF(A1==2,1,0)").unwrap();
        assert_eq!(f.to_odf(), "of:=IF([.A1]=2;1;0)");

        let f = Formula::new("IF(A1!=2,1,0)").unwrap();
        assert_eq!(f.to_odf(), "of:=IF([.A1]<>2;1;0)");
    }

    #[test]
    fn test_bare_arithmetic() {
        let f = Formula::new("=A1*2+3").unwrap();
        assert_eq!(f.to_odf(), "of:=[.A1]*2+3");
    }

    #[test]
    fn test_display_matches_to_odf() {
        let f = Formula::new("SUM(A1:A3)").unwrap();
        assert_eq!(f.to_string(), f.to_odf());
    }

    #[test]
    fn test_malformed_formula_fails_at_construction() {
        assert!(Formula::new("SUM(A1").is_err());
        assert!(Formula::new("A1 ~ B1").is_err());
    }
}
