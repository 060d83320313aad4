//! Character scanner.
//!
//! The scanner owns the source text and a cursor. Every read goes through a
//! lookahead that transparently skips insignificant characters (control
//! characters, separators and whitespace) while keeping line and column
//! counters up to date:
//! - each skipped or returned character bumps the column first
//! - a skipped newline bumps the line and resets the column to zero
//!
//! `peek` only looks; `advance` commits the cursor and both counters.
//!
//! The scanner also counts how many objects and arrays are open, so the
//! recursive productions stop at the context's nesting limit instead of
//! exhausting the stack.

use crate::error::{ParseContext, ReadError, Result};

/// Check whether a character is invisible to the grammar.
pub fn is_insignificant(ch: char) -> bool {
    ch.is_control() || ch.is_whitespace()
}

/// Outcome of a lookahead, not yet committed.
#[derive(Debug, Clone, Copy)]
struct Lookahead {
    ch: char,
    next_pos: usize,
    line: usize,
    column: usize,
}

/// Cursor over a fully buffered source text.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
    ctx: &'a ParseContext,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str, ctx: &'a ParseContext) -> Self {
        Self {
            source,
            pos: 0,
            line: 0,
            column: 0,
            depth: 0,
            ctx,
        }
    }

    /// Zero-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column counter of the cursor. After a read this is one past the
    /// zero-based column of the character just returned.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of objects and arrays currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Origin suffix for errors raised against this source.
    pub fn origin(&self) -> String {
        self.ctx.origin_suffix()
    }

    /// Returns `true` once the whole buffer has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos == self.source.len()
    }

    /// Return the next significant character without consuming it.
    pub fn peek(&self) -> Result<char> {
        self.look_ahead().map(|la| la.ch)
    }

    /// Returns `true` if the next significant character is `ch`.
    pub fn peek_is(&self, ch: char) -> Result<bool> {
        Ok(self.peek()? == ch)
    }

    /// Consume and return the next significant character.
    pub fn advance(&mut self) -> Result<char> {
        let la = self.look_ahead()?;
        self.pos = la.next_pos;
        self.line = la.line;
        self.column = la.column;
        Ok(la.ch)
    }

    /// Consume the next significant character, which must be `expected`.
    pub fn expect(&mut self, expected: char) -> Result<()> {
        let found = self.advance()?;
        if found != expected {
            return Err(ReadError::Syntax {
                line: self.line,
                // The column was already bumped for `found`.
                column: self.column - 1,
                expected,
                found,
                origin: self.ctx.origin_suffix(),
            });
        }
        Ok(())
    }

    /// Consume every character of `literal` in order.
    pub fn expect_literal(&mut self, literal: &str) -> Result<()> {
        for ch in literal.chars() {
            self.expect(ch)?;
        }
        Ok(())
    }

    /// Zero-based `(line, column)` of the next significant character.
    pub fn position_ahead(&self) -> Result<(usize, usize)> {
        self.look_ahead().map(|la| (la.line, la.column - 1))
    }

    /// Build an error for a lookahead character no production accepts.
    /// The reported position is that of the peeked character.
    pub fn unexpected_value(&self) -> ReadError {
        match self.look_ahead() {
            Ok(la) => ReadError::UnexpectedValue {
                line: la.line,
                column: la.column - 1,
                found: la.ch,
                origin: self.ctx.origin_suffix(),
            },
            Err(e) => e,
        }
    }

    /// Open one level of nesting before the next significant character,
    /// failing once the context's limit would be exceeded.
    pub fn enter(&mut self) -> Result<()> {
        if self.depth >= self.ctx.max_depth {
            let (line, column) = self.position_ahead()?;
            return Err(ReadError::NestingTooDeep {
                line,
                column,
                limit: self.ctx.max_depth,
                origin: self.ctx.origin_suffix(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Close the innermost level of nesting.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn look_ahead(&self) -> Result<Lookahead> {
        let mut line = self.line;
        let mut column = self.column;

        for (offset, ch) in self.source[self.pos..].char_indices() {
            column += 1;

            if is_insignificant(ch) {
                if ch == '\n' {
                    line += 1;
                    column = 0;
                }
                continue;
            }

            return Ok(Lookahead {
                ch,
                next_pos: self.pos + offset + ch.len_utf8(),
                line,
                column,
            });
        }

        Err(ReadError::UnexpectedEndOfInput(self.ctx.origin_suffix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ParseContext {
        ParseContext::new(None)
    }

    #[test]
    fn test_is_insignificant() {
        assert!(is_insignificant(' '));
        assert!(is_insignificant('\t'));
        assert!(is_insignificant('\r'));
        assert!(is_insignificant('\n'));
        assert!(is_insignificant('\u{0000}'));
        assert!(is_insignificant('\u{00A0}'));
        assert!(is_insignificant('\u{2028}'));
        assert!(is_insignificant('\u{3000}'));
        assert!(!is_insignificant('a'));
        assert!(!is_insignificant('"'));
        assert!(!is_insignificant('\u{00E9}'));
    }

    #[test]
    fn test_peek_does_not_move() {
        let ctx = ctx();
        let sc = Scanner::new("  \n x", &ctx);
        assert_eq!(sc.peek().unwrap(), 'x');
        assert_eq!(sc.peek().unwrap(), 'x');
        assert_eq!(sc.line(), 0);
        assert_eq!(sc.column(), 0);
        assert!(!sc.at_end());
    }

    #[test]
    fn test_advance_tracks_position() {
        let ctx = ctx();
        let mut sc = Scanner::new("ab\n  c", &ctx);
        assert_eq!(sc.advance().unwrap(), 'a');
        assert_eq!((sc.line(), sc.column()), (0, 1));
        assert_eq!(sc.advance().unwrap(), 'b');
        assert_eq!((sc.line(), sc.column()), (0, 2));
        assert_eq!(sc.advance().unwrap(), 'c');
        assert_eq!((sc.line(), sc.column()), (1, 3));
        assert!(sc.at_end());
    }

    #[test]
    fn test_end_of_input() {
        let ctx = ctx();
        let mut sc = Scanner::new(" \t\r\n", &ctx);
        assert!(matches!(sc.peek(), Err(ReadError::UnexpectedEndOfInput(_))));
        assert!(matches!(sc.advance(), Err(ReadError::UnexpectedEndOfInput(_))));
        assert!(!sc.at_end());
    }

    #[test]
    fn test_expect_mismatch_reports_column_of_character() {
        let ctx = ctx();
        let mut sc = Scanner::new("{\n  x", &ctx);
        sc.expect('{').unwrap();
        let err = sc.expect('"').unwrap_err();
        match err {
            ReadError::Syntax {
                line,
                column,
                expected,
                found,
                ..
            } => {
                assert_eq!((line, column), (1, 2));
                assert_eq!(expected, '"');
                assert_eq!(found, 'x');
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_expect_literal() {
        let ctx = ctx();
        let mut sc = Scanner::new("true", &ctx);
        sc.expect_literal("true").unwrap();
        assert!(sc.at_end());

        let mut sc = Scanner::new("nul l", &ctx);
        sc.expect_literal("null").unwrap();

        let mut sc = Scanner::new("fase", &ctx);
        let err = sc.expect_literal("false").unwrap_err();
        assert_eq!(err.position(), Some((0, 2)));
    }

    #[test]
    fn test_multibyte_characters() {
        let ctx = ctx();
        let mut sc = Scanner::new("\u{00E9}\u{3000}\u{1F600}", &ctx);
        assert_eq!(sc.advance().unwrap(), '\u{00E9}');
        assert_eq!(sc.advance().unwrap(), '\u{1F600}');
        assert_eq!(sc.column(), 3);
        assert!(sc.at_end());
    }

    #[test]
    fn test_enter_stops_at_limit() {
        let ctx = ParseContext::new(Some("n.json")).with_max_depth(2);
        let mut sc = Scanner::new(" \n  [[[", &ctx);
        sc.enter().unwrap();
        sc.expect('[').unwrap();
        sc.enter().unwrap();
        sc.expect('[').unwrap();
        assert_eq!(sc.depth(), 2);

        let err = sc.enter().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nesting too deep: line 1, column 4, limit 2 in <n.json>"
        );
        assert_eq!(sc.depth(), 2);

        sc.leave();
        sc.leave();
        sc.leave();
        assert_eq!(sc.depth(), 0);
    }

    #[test]
    fn test_position_ahead() {
        let ctx = ctx();
        let mut sc = Scanner::new("a\n  b", &ctx);
        assert_eq!(sc.position_ahead().unwrap(), (0, 0));
        sc.advance().unwrap();
        assert_eq!(sc.position_ahead().unwrap(), (1, 2));
        assert_eq!((sc.line(), sc.column()), (0, 1));
    }

    #[test]
    fn test_error_origin() {
        let ctx = ParseContext::new(Some("doc.json"));
        let mut sc = Scanner::new("", &ctx);
        let err = sc.advance().unwrap_err();
        assert_eq!(err.to_string(), "Unexpected end of input in <doc.json>");
    }
}
