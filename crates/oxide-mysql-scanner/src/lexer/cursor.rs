//! Byte cursor with pushback for the scanner.
//!
//! The cursor reads the source one byte at a time and keeps the line,
//! column and offset counters in step. Bytes handed back with
//! [`Cursor::unread`] are replayed before the source advances, and every
//! counter effect of the matching [`Cursor::advance`] is reversed, so a
//! run of `n` unreads followed by `n` advances lands on the same position.

use super::Position;

/// A byte cursor over an immutable source.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source bytes.
    src: &'a [u8],
    /// Index of the next source byte not yet read.
    next: usize,
    /// Pushed-back bytes, replayed last-in first-out before the source.
    pending: Vec<u8>,
    /// Logical position of the next byte `advance` returns.
    pos: Position,
    /// Column value held before each consumed newline, innermost last.
    line_widths: Vec<u32>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `src`.
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            next: 0,
            pending: Vec::new(),
            pos: Position::start(),
            line_widths: Vec::new(),
        }
    }

    /// Returns the position of the next byte.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Returns the byte offset of the next byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos.offset
    }

    /// Returns the next byte without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        match self.pending.last() {
            Some(&b) => Some(b),
            None => self.src.get(self.next).copied(),
        }
    }

    /// Consumes and returns the next byte, or `None` at end of input.
    pub fn advance(&mut self) -> Option<u8> {
        let b = match self.pending.pop() {
            Some(b) => b,
            None => {
                let b = *self.src.get(self.next)?;
                self.next += 1;
                b
            }
        };
        if b == b'\n' {
            self.line_widths.push(self.pos.column);
            self.pos.line += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += 1;
        }
        self.pos.offset += 1;
        Some(b)
    }

    /// Consumes the next byte if it satisfies `pred`.
    pub fn advance_if(&mut self, pred: impl FnOnce(u8) -> bool) -> Option<u8> {
        if self.peek().is_some_and(pred) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes bytes while `pred` holds and returns how many were taken.
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let mut n = 0;
        while self.advance_if(&mut pred).is_some() {
            n += 1;
        }
        n
    }

    /// Pushes `b` back so the next `advance` returns it, reversing the
    /// counter effects that advancing over `b` had.
    pub fn unread(&mut self, b: u8) {
        self.pending.push(b);
        if b == b'\n' {
            self.pos.line = self.pos.line.saturating_sub(1).max(1);
            self.pos.column = self.line_widths.pop().unwrap_or(0);
        } else {
            self.pos.column = self.pos.column.saturating_sub(1);
        }
        self.pos.offset = self.pos.offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'b'));
        assert_eq!(cursor.position(), Position::new(1, 2, 2));
        assert_eq!(cursor.advance(), Some(b'\n'));
        assert_eq!(cursor.position(), Position::new(2, 0, 3));
        assert_eq!(cursor.advance(), Some(b'c'));
        assert_eq!(cursor.position(), Position::new(2, 1, 4));
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.advance(), Some(b'x'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_unread_replays_before_source() {
        let mut cursor = Cursor::new("xy");
        assert_eq!(cursor.advance(), Some(b'x'));
        cursor.unread(b'x');
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.advance(), Some(b'x'));
        assert_eq!(cursor.advance(), Some(b'y'));
    }

    #[test]
    fn test_unread_across_newlines_restores_column() {
        let mut cursor = Cursor::new("abc\n\nde");
        let mut read = Vec::new();
        for _ in 0..6 {
            read.push(cursor.advance().unwrap());
        }
        let before = cursor.position();
        assert_eq!(before, Position::new(3, 1, 6));

        for &b in read.iter().rev().take(4) {
            cursor.unread(b);
        }
        assert_eq!(cursor.position(), Position::new(1, 2, 2));

        for _ in 0..4 {
            cursor.advance();
        }
        assert_eq!(cursor.position(), before);
    }

    #[test]
    fn test_advance_while() {
        let mut cursor = Cursor::new("123abc");
        assert_eq!(cursor.advance_while(|b| b.is_ascii_digit()), 3);
        assert_eq!(cursor.peek(), Some(b'a'));
    }
}
