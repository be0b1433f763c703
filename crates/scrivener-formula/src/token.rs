//! Formula token tree and ODF rendering
//!
//! A formula is tokenized once into an immutable token sequence. Argument
//! separators (`,`/`;`) are stripped by the lexer and re-inserted here at
//! render time, between two adjacent non-operator tokens. That rule is what
//! lets a single argument span several tokens (`SUM(A1+B1;C1)`).

use std::fmt::Write;

/// A single formula token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Bare identifier: a cell reference (`A1`), a range (`B1:D1`), or a name
    Reference(String),
    /// Operator symbol, already normalized (`==` -> `=`, `!=` -> `<>`)
    Operator(&'static str),
    /// Function call with its arguments flattened into one token sequence
    Function(String, Vec<Token>),
}

impl Token {
    /// True for operator tokens; the renderer never places a separator
    /// adjacent to one of these.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Token::Number(n) => {
                let _ = write!(out, "{n}");
            }
            Token::Operator(op) => out.push_str(op),
            Token::Reference(text) => render_reference(text, out),
            Token::Function(name, args) => {
                out.push_str(name);
                out.push('(');
                render_sequence(args, out);
                out.push(')');
            }
        }
    }
}

/// Render a token sequence, re-inserting the `;` argument separators lost at
/// tokenization.
pub(crate) fn render_sequence(tokens: &[Token], out: &mut String) {
    let mut previous: Option<&Token> = None;
    for token in tokens {
        if let Some(prev) = previous {
            if !prev.is_operator() && !token.is_operator() {
                out.push(';');
            }
        }
        token.render_into(out);
        previous = Some(token);
    }
}

/// Render a reference token in ODF form.
///
/// Cell references become `[.A1]`; a colon range becomes a single bracketed
/// token with both endpoints dotted, `[.B1:.D1]`. Identifiers that do not
/// look like cell references (named ranges, bare constants) pass through
/// verbatim.
fn render_reference(text: &str, out: &mut String) {
    if let Some((start, end)) = text.split_once(':') {
        if is_cell_reference(start) && is_cell_reference(end) {
            let _ = write!(out, "[.{start}:.{end}]");
            return;
        }
    } else if is_cell_reference(text) {
        let _ = write!(out, "[.{text}]");
        return;
    }
    out.push_str(text);
}

/// Check whether a bare identifier has the shape of a cell reference:
/// optional `$`, letters, optional `$`, digits, nothing else.
pub(crate) fn is_cell_reference(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    if chars.get(i) == Some(&'$') {
        i += 1;
    }

    let letter_start = i;
    while i < chars.len() && chars[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i == letter_start {
        return false;
    }

    if chars.get(i) == Some(&'$') {
        i += 1;
    }

    let digit_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == digit_start {
        return false;
    }

    i == chars.len()
}
