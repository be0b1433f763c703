//! Formula lexer
//!
//! A left-to-right scanner that turns the ergonomic input dialect
//! (`IF(A1=2,B1,C1)`) into a [`Token`] tree. Function arguments are produced
//! by recursing the full lexer over the parenthesized body, so nesting works
//! to arbitrary depth without any string substitution.

use crate::error::{FormulaError, FormulaResult};
use crate::token::Token;

/// Operator and separator symbols, longest first so that multi-character
/// operators win over their single-character prefixes.
const OPERATORS: &[&str] = &[
    "!=", "<=", ">=", "<>", "==", "+", "-", "*", "/", "^", "%", "&", "|", ">", "<", "=", ",", ";",
];

/// Tokenize one formula body (no leading `=`).
pub fn tokenize(input: &str) -> FormulaResult<Vec<Token>> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn run(mut self) -> FormulaResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            let c = self.peek_char().unwrap();

            if c.is_ascii_alphabetic() || c == '_' || c == '$' {
                tokens.push(self.scan_name()?);
            } else if c.is_ascii_digit()
                || (c == '.' && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()))
            {
                tokens.push(self.scan_number()?);
            } else if let Some(op) = self.scan_operator() {
                match op {
                    // Argument separators are re-inserted at render time.
                    "," | ";" => {}
                    "==" => tokens.push(Token::Operator("=")),
                    "!=" => tokens.push(Token::Operator("<>")),
                    _ => tokens.push(Token::Operator(op)),
                }
            } else {
                return Err(FormulaError::Parse(format!(
                    "unexpected character '{}' at offset {}",
                    c, self.pos
                )));
            }
        }

        Ok(tokens)
    }

    /// Scan an identifier and classify it: a function call if followed by a
    /// parenthesized body, a range if followed by `:`, otherwise a bare
    /// reference.
    fn scan_name(&mut self) -> FormulaResult<Token> {
        let name = self.scan_word();

        match self.peek_char() {
            Some('(') => {
                let body = self.scan_paren_body()?;
                Ok(Token::Function(name, tokenize(body)?))
            }
            Some(':') => {
                self.advance();
                let end = self.scan_word();
                if end.is_empty() {
                    return Err(FormulaError::Parse(format!(
                        "expected identifier after ':' at offset {}",
                        self.pos
                    )));
                }
                Ok(Token::Reference(format!("{name}:{end}")))
            }
            _ => Ok(Token::Reference(name)),
        }
    }

    /// Consume a run of identifier characters.
    fn scan_word(&mut self) -> String {
        let start = self.pos;
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    /// Consume a balanced `( ... )` group and return the inner body.
    fn scan_paren_body(&mut self) -> FormulaResult<&'a str> {
        self.advance(); // consume '('
        let start = self.pos;
        let mut depth = 1usize;

        while let Some(c) = self.peek_char() {
            self.advance();
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&self.input[start..self.pos - 1]);
                    }
                }
                _ => {}
            }
        }

        Err(FormulaError::UnbalancedParens(self.input.to_string()))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek_char().is_some_and(|c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[start..self.pos];
        let number: f64 = text
            .parse()
            .map_err(|_| FormulaError::Parse(format!("invalid number literal '{text}'")))?;
        Ok(Token::Number(number))
    }

    /// Longest-match scan against the fixed operator set.
    fn scan_operator(&mut self) -> Option<&'static str> {
        for op in OPERATORS {
            if self.input[self.pos..].starts_with(op) {
                self.pos += op.len();
                return Some(op);
            }
        }
        None
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_literals_and_operators() {
        let tokens = tokenize("1+2.5").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(1.0), Token::Operator("+"), Token::Number(2.5)]
        );
    }

    #[test]
    fn test_operator_normalization() {
        let tokens = tokenize("A1==2").unwrap();
        assert_eq!(tokens[1], Token::Operator("="));

        let tokens = tokenize("A1!=2").unwrap();
        assert_eq!(tokens[1], Token::Operator("<>"));
    }

    #[test]
    fn test_longest_operator_wins() {
        let tokens = tokenize("A1<=2").unwrap();
        assert_eq!(tokens[1], Token::Operator("<="));

        let tokens = tokenize("A1<>2").unwrap();
        assert_eq!(tokens[1], Token::Operator("<>"));
    }

    #[test]
    fn test_separators_are_dropped() {
        let tokens = tokenize("A1,B1;C1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Reference("A1".into()),
                Token::Reference("B1".into()),
                Token::Reference("C1".into()),
            ]
        );
    }

    #[test]
    fn test_range_is_one_token() {
        let tokens = tokenize("B1:D1").unwrap();
        assert_eq!(tokens, vec![Token::Reference("B1:D1".into())]);
    }

    #[test]
    fn test_function_call() {
        let tokens = tokenize("SUM(A1:A3)").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Function(
                "SUM".into(),
                vec![Token::Reference("A1:A3".into())]
            )]
        );
    }

    #[test]
    fn test_nested_function_call() {
        let tokens = tokenize("IF(A1>0,SUM(B1:B3),0)").unwrap();
        let Token::Function(name, args) = &tokens[0] else {
            panic!("expected function token");
        };
        assert_eq!(name, "IF");
        // A1 > 0 SUM(...) 0, with the commas stripped
        assert_eq!(args.len(), 5);
        assert!(matches!(&args[3], Token::Function(inner, _) if inner == "SUM"));
    }

    #[test]
    fn test_unbalanced_parens() {
        let err = tokenize("SUM(A1").unwrap_err();
        assert!(matches!(err, FormulaError::UnbalancedParens(_)));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("A1 @ B1").unwrap_err();
        assert!(matches!(err, FormulaError::Parse(_)));
    }
}
