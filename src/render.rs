//! HTML renderer.
//!
//! Turns parse events straight into HTML in a reusable byte buffer.
//! Typical output is ~1.25x the input, so that much is reserved up front.

use std::convert::Infallible;

use crate::escape;
use crate::renderer::{BlockDetail, BlockType, Renderer, SpanDetail, SpanType, TextKind};

/// [`Renderer`] that writes HTML.
///
/// The newline the parser emits after every prose line becomes a soft
/// break between lines; the one after the last line of a block is
/// dropped so headings and paragraphs close on the same line.
///
/// # Example
/// ```
/// use mdblock::{HtmlRenderer, Options};
///
/// let mut html = HtmlRenderer::with_capacity_for(32);
/// mdblock::parse(b"Title\n=====\n\n    a < b\n", &mut html, &Options::default()).unwrap();
/// assert_eq!(
///     html.into_string(),
///     "<h1>Title</h1>\n<pre><code>a &lt; b\n</code></pre>\n"
/// );
/// ```
#[derive(Debug)]
pub struct HtmlRenderer {
    out: Vec<u8>,
    /// A prose newline was seen and not yet written.
    pending_newline: bool,
}

impl HtmlRenderer {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Pre-allocate for an input of `input_len` bytes.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            pending_newline: false,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take the output as a `String`, replacing invalid UTF-8 that came
    /// from a non-UTF-8 input buffer.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Mutable access to the output buffer, used to swap in a caller's
    /// buffer without copying.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    #[inline]
    fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    #[inline]
    fn heading_tag(&mut self, open: &'static str, level: u8, close: &'static str) {
        debug_assert!((1..=6).contains(&level));
        self.write_str(open);
        self.out.push(b'0' + level);
        self.write_str(close);
    }

    #[inline]
    fn flush_newline(&mut self) {
        if self.pending_newline {
            self.out.push(b'\n');
            self.pending_newline = false;
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    type Error = Infallible;

    fn enter_block(&mut self, block: BlockType, detail: BlockDetail) -> Result<(), Infallible> {
        self.pending_newline = false;
        match (block, detail) {
            (BlockType::Document, _) => {}
            (BlockType::Heading, BlockDetail::Heading { level }) => {
                self.heading_tag("<h", level, ">");
            }
            (BlockType::Heading, BlockDetail::None) => self.write_str("<h1>"),
            (BlockType::HorizontalRule, _) => self.write_str("<hr />\n"),
            (BlockType::Code, _) => self.write_str("<pre><code>"),
            (BlockType::Paragraph, _) => self.write_str("<p>"),
        }
        Ok(())
    }

    fn leave_block(&mut self, block: BlockType, detail: BlockDetail) -> Result<(), Infallible> {
        self.pending_newline = false;
        match (block, detail) {
            (BlockType::Document | BlockType::HorizontalRule, _) => {}
            (BlockType::Heading, BlockDetail::Heading { level }) => {
                self.heading_tag("</h", level, ">\n");
            }
            (BlockType::Heading, BlockDetail::None) => self.write_str("</h1>\n"),
            (BlockType::Code, _) => self.write_str("</code></pre>\n"),
            (BlockType::Paragraph, _) => self.write_str("</p>\n"),
        }
        Ok(())
    }

    fn enter_span(&mut self, span: SpanType, _: SpanDetail) -> Result<(), Infallible> {
        self.flush_newline();
        self.write_str(match span {
            SpanType::Emphasis => "<em>",
            SpanType::Strong => "<strong>",
            SpanType::Code => "<code>",
        });
        Ok(())
    }

    fn leave_span(&mut self, span: SpanType, _: SpanDetail) -> Result<(), Infallible> {
        self.write_str(match span {
            SpanType::Emphasis => "</em>",
            SpanType::Strong => "</strong>",
            SpanType::Code => "</code>",
        });
        Ok(())
    }

    fn text(&mut self, kind: TextKind, text: &[u8]) -> Result<(), Infallible> {
        match kind {
            TextKind::Normal if text == b"\n" => self.pending_newline = true,
            TextKind::Normal => {
                self.flush_newline();
                escape::escape_text_into(&mut self.out, text);
            }
            TextKind::CodeBlock => escape::escape_text_into(&mut self.out, text),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_new() {
        let html = HtmlRenderer::new();
        assert!(html.as_bytes().is_empty());
    }

    #[test]
    fn test_paragraph_soft_breaks() {
        let mut html = HtmlRenderer::new();
        html.enter_block(BlockType::Paragraph, BlockDetail::None).unwrap();
        html.text(TextKind::Normal, b"one").unwrap();
        html.text(TextKind::Normal, b"\n").unwrap();
        html.text(TextKind::Normal, b"two").unwrap();
        html.text(TextKind::Normal, b"\n").unwrap();
        html.leave_block(BlockType::Paragraph, BlockDetail::None).unwrap();
        assert_eq!(html.into_string(), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let mut html = HtmlRenderer::new();
            let detail = BlockDetail::Heading { level };
            html.enter_block(BlockType::Heading, detail).unwrap();
            html.text(TextKind::Normal, b"T").unwrap();
            html.leave_block(BlockType::Heading, detail).unwrap();
            assert_eq!(html.into_string(), format!("<h{level}>T</h{level}>\n"));
        }
    }

    #[test]
    fn test_code_keeps_newlines() {
        let mut html = HtmlRenderer::new();
        html.enter_block(BlockType::Code, BlockDetail::None).unwrap();
        html.text(TextKind::CodeBlock, b"  ").unwrap();
        html.text(TextKind::CodeBlock, b"<x>").unwrap();
        html.text(TextKind::CodeBlock, b"\n").unwrap();
        html.leave_block(BlockType::Code, BlockDetail::None).unwrap();
        assert_eq!(html.into_string(), "<pre><code>  &lt;x&gt;\n</code></pre>\n");
    }

    #[test]
    fn test_spans() {
        let mut html = HtmlRenderer::new();
        html.enter_span(SpanType::Strong, SpanDetail::None).unwrap();
        html.text(TextKind::Normal, b"b").unwrap();
        html.leave_span(SpanType::Strong, SpanDetail::None).unwrap();
        assert_eq!(html.into_string(), "<strong>b</strong>");
    }

    #[test]
    fn test_horizontal_rule() {
        let mut html = HtmlRenderer::new();
        html.enter_block(BlockType::HorizontalRule, BlockDetail::None).unwrap();
        html.leave_block(BlockType::HorizontalRule, BlockDetail::None).unwrap();
        assert_eq!(html.as_bytes(), b"<hr />\n");
    }

    #[test]
    fn test_into_string_lossy() {
        let mut html = HtmlRenderer::new();
        html.text(TextKind::CodeBlock, &[0xff]).unwrap();
        assert_eq!(html.into_string(), "\u{fffd}");
    }
}
