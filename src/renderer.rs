//! The callback surface the parser drives.
//!
//! The parser never builds a tree: every structural decision is delivered
//! immediately to a [`Renderer`]. Implementations decide what to do with
//! the events (write HTML, record them, count them) and may stop the
//! parse at any point by returning an error.

/// Block kinds reported through [`Renderer::enter_block`] and
/// [`Renderer::leave_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Wraps the whole parse; entered once before the first line and left
    /// once after the last.
    Document,
    /// ATX or setext heading.
    Heading,
    /// Thematic break.
    HorizontalRule,
    /// Indented code block.
    Code,
    /// Paragraph.
    Paragraph,
}

/// Per-block payload passed alongside the [`BlockType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockDetail {
    /// No detail; every block except headings.
    #[default]
    None,
    /// Heading level in `1..=6`.
    Heading { level: u8 },
}

/// Inline span kinds.
///
/// The block engine passes inline content through as opaque text and
/// never opens a span itself; the variants exist so renderers and inline
/// layers built on top share one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanType {
    Emphasis,
    Strong,
    Code,
}

/// Per-span payload passed alongside the [`SpanType`].
///
/// None of the current span kinds carries data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanDetail {
    #[default]
    None,
}

/// How a text run should be interpreted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Prose and heading content.
    Normal,
    /// Verbatim content of a code block.
    CodeBlock,
}

/// Receiver of parse events.
///
/// Every method except [`debug_log`](Renderer::debug_log) may fail; the
/// first error stops the parse and is returned from [`crate::parse`]
/// wrapped in [`crate::ParseError::Aborted`]. No event follows a failing
/// one.
///
/// # Example
/// ```
/// use mdblock::{BlockDetail, BlockType, Options, Renderer, TextKind};
///
/// #[derive(Default)]
/// struct HeadingCounter(usize);
///
/// impl Renderer for HeadingCounter {
///     type Error = std::convert::Infallible;
///
///     fn enter_block(&mut self, block: BlockType, _: BlockDetail) -> Result<(), Self::Error> {
///         if block == BlockType::Heading {
///             self.0 += 1;
///         }
///         Ok(())
///     }
///
///     fn leave_block(&mut self, _: BlockType, _: BlockDetail) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn text(&mut self, _: TextKind, _: &[u8]) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let mut counter = HeadingCounter::default();
/// mdblock::parse(b"# One\n\nTwo\n===\n", &mut counter, &Options::default()).unwrap();
/// assert_eq!(counter.0, 2);
/// ```
pub trait Renderer {
    /// Value a callback returns to abort the parse.
    type Error;

    fn enter_block(&mut self, block: BlockType, detail: BlockDetail) -> Result<(), Self::Error>;

    fn leave_block(&mut self, block: BlockType, detail: BlockDetail) -> Result<(), Self::Error>;

    fn enter_span(&mut self, _span: SpanType, _detail: SpanDetail) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_span(&mut self, _span: SpanType, _detail: SpanDetail) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Deliver a run of text. `text` borrows either the input buffer or a
    /// static run of spaces/newline; it is never empty.
    fn text(&mut self, kind: TextKind, text: &[u8]) -> Result<(), Self::Error>;

    /// Diagnostic hook. Never affects control flow.
    fn debug_log(&mut self, message: &str) {
        log::debug!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Renderer for Silent {
        type Error = ();

        fn enter_block(&mut self, _: BlockType, _: BlockDetail) -> Result<(), ()> {
            Ok(())
        }

        fn leave_block(&mut self, _: BlockType, _: BlockDetail) -> Result<(), ()> {
            Ok(())
        }

        fn text(&mut self, _: TextKind, _: &[u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_span_callbacks_default_to_ok() {
        let mut r = Silent;
        assert_eq!(r.enter_span(SpanType::Emphasis, SpanDetail::None), Ok(()));
        assert_eq!(r.leave_span(SpanType::Emphasis, SpanDetail::None), Ok(()));
        r.debug_log("ignored");
    }

    #[test]
    fn test_block_detail_default() {
        assert_eq!(BlockDetail::default(), BlockDetail::None);
        assert_eq!(SpanDetail::default(), SpanDetail::None);
    }
}
