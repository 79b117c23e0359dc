use std::{fmt::Formatter, str::Chars};

/// 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, derive_more::Display)]
pub struct Line(pub usize);

/// Forward-only position inside a source string that keeps track of the current line.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    line: Line,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("line", &self.line).field("offset", &self.offset()).finish()
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.offset()) == (other.source, other.offset())
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), line: Line(1) }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Byte offset into the source.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Consumes the next char if it is `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes chars while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.next();
        }
    }

    /// Source text between `self` and a later cursor `end` over the same source.
    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        debug_assert!(std::ptr::eq(self.source, end.source));
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line.0 += 1;
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slice_until() {
        let mut cursor: Cursor = "ab\ncd\n\n".into();

        cursor.next(); // 'a'

        let start = cursor.clone();

        cursor.next(); // 'b'
        cursor.next(); // '\n'
        cursor.next(); // 'c'

        assert_eq!(start.slice_until(&cursor), "b\nc");
        assert_eq!(start.slice_until(&start), "");
    }

    #[test]
    fn tracks_lines() {
        let mut cursor = Cursor::new("a\n\nb");
        assert_eq!(cursor.line(), Line(1));

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.line(), Line(1));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.line(), Line(2));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.line(), Line(3));

        assert_eq!(cursor.next(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), Line(3));
    }

    #[test]
    fn peeking_does_not_advance() {
        let mut cursor = Cursor::new("1.5");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.peek_next(), Some('.'));
        assert_eq!(cursor.offset(), 0);

        assert!(!cursor.next_if_eq('.'));
        assert!(cursor.next_if_eq('1'));
        assert!(cursor.next_if_eq('.'));
        assert_eq!(cursor.peek_next(), None);

        cursor.advance_while(|c| c.is_ascii_digit());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn empty_source() {
        let mut cursor: Cursor = "".into();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), Line(1));
    }

    #[test]
    fn line_display() {
        assert_eq!(Line(42).to_string(), "42");
    }
}
