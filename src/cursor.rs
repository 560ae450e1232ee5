//! Pointer-based cursor for line scanning.
//!
//! Uses raw pointers internally so the classifier's per-byte loops
//! compile without bounds checks, wrapped in a safe API.

use crate::limits::TAB_STOP;

/// A forward-only cursor over the input buffer.
///
/// The cursor is bounds-checked at creation; every accessor checks
/// against `end` before dereferencing.
///
/// # Example
/// ```
/// use mdblock::cursor::Cursor;
///
/// let input = b"  \tcode\r\nnext";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.skip_indent(), 4);
/// assert_eq!(cursor.peek(), Some(b'c'));
/// cursor.advance(cursor.find_line_end());
/// cursor.eat_line_end();
/// assert_eq!(cursor.peek(), Some(b'n'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    ptr: *const u8,
    end: *const u8,
    base: *const u8,
    _marker: std::marker::PhantomData<&'a [u8]>,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self::new_at(input, 0)
    }

    /// Create a cursor positioned at `offset`.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        assert!(offset <= input.len());
        let base = input.as_ptr();
        // SAFETY: offset and len are within the same allocation
        let (ptr, end) = unsafe { (base.add(offset), base.add(input.len())) };
        Self {
            ptr,
            end,
            base,
            _marker: std::marker::PhantomData,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        // SAFETY: ptr >= base by construction
        unsafe { self.ptr.offset_from(self.base) as usize }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        // SAFETY: end >= ptr by construction
        unsafe { self.end.offset_from(self.ptr) as usize }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.ptr >= self.end
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            // SAFETY: not at EOF
            Some(unsafe { *self.ptr })
        }
    }

    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// True at end of input or on a `\r` / `\n` terminator byte.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\r') | Some(b'\n'))
    }

    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        // SAFETY: caller checked for EOF, verified in debug
        self.ptr = unsafe { self.ptr.add(1) };
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.remaining());
        // SAFETY: n <= remaining
        self.ptr = unsafe { self.ptr.add(n) };
    }

    /// Skip a run of `b`, returning how many bytes were consumed.
    #[inline]
    pub fn skip_run(&mut self, b: u8) -> usize {
        let start = self.offset();
        while self.at(b) {
            self.bump();
        }
        self.offset() - start
    }

    /// Skip spaces only (tabs are significant for indentation).
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_run(b' ')
    }

    /// Consume leading spaces and tabs, returning the indentation width.
    ///
    /// A tab rounds the running total up to the next multiple of
    /// [`TAB_STOP`]; the width therefore depends only on what was already
    /// consumed on this line, not on the absolute column.
    #[inline]
    pub fn skip_indent(&mut self) -> u32 {
        let mut indent = 0u32;
        loop {
            match self.peek() {
                Some(b' ') => indent = indent.saturating_add(1),
                Some(b'\t') => indent = indent.saturating_add(TAB_STOP) & !(TAB_STOP - 1),
                _ => break,
            }
            self.bump();
        }
        indent
    }

    /// Distance to the next `\r` or `\n`, or to end of input.
    #[inline]
    pub fn find_line_end(&self) -> usize {
        memchr::memchr2(b'\r', b'\n', self.remaining_slice()).unwrap_or(self.remaining())
    }

    /// Consume an optional `\r` followed by an optional `\n`.
    ///
    /// Handles `\n`, `\r\n`, a lone `\r` and a final unterminated line.
    #[inline]
    pub fn eat_line_end(&mut self) {
        if self.at(b'\r') {
            self.bump();
        }
        if self.at(b'\n') {
            self.bump();
        }
    }

    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        // SAFETY: ptr and end are valid pointers from the same allocation
        unsafe { std::slice::from_raw_parts(self.ptr, self.remaining()) }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
