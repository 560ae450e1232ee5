//! Compact byte ranges into the parsed buffer.
//!
//! Lines never copy their content; they carry a `Range` that is resolved
//! against the input only when a text event is emitted.

/// Half-open byte range `start..end` into the input buffer.
///
/// `u32` offsets keep a classified line at 16 bytes, which is what lets
/// the pending line buffer stay inline for typical blocks.
///
/// # Example
/// ```
/// use mdblock::Range;
///
/// let input = b"# Title\n";
/// let range = Range::new(2, 7);
/// assert_eq!(range.slice(input), b"Title");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a range from buffer offsets.
    ///
    /// Offsets must fit in `u32`; [`crate::parse`] rejects longer input
    /// up front, and debug builds assert it here.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        debug_assert!(start <= end);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Resolve the range against the buffer it was taken from.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
