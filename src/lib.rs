//! mdblock: streaming Markdown block parser
//!
//! Converts a flat text buffer into block events (document, headings,
//! thematic breaks, indented code, paragraphs) delivered through a
//! caller-supplied [`Renderer`].
//!
//! # Design Principles
//! - No AST: every block is emitted as soon as its boundary is known
//! - No regex: pure byte-level scanning over the immutable input
//! - No backtracking: one line of lookahead (setext headings), O(n) time
//! - Minimal allocations: lines are ranges into the input buffer
//!
//! Inline syntax is not interpreted; block content is passed through as
//! opaque text runs.

pub mod block;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod limits;
pub mod range;
pub mod render;
pub mod renderer;

pub use block::{BlockParser, Line, LineClassifier, LineType};
pub use error::{
    ParseError, STATUS_INPUT_TOO_LARGE, STATUS_INTERNAL, STATUS_OUT_OF_MEMORY, status_of,
};
pub use range::Range;
pub use render::HtmlRenderer;
pub use renderer::{BlockDetail, BlockType, Renderer, SpanDetail, SpanType, TextKind};

use limits::CODE_INDENT;

/// Bit flag: ATX headings need no space after the opening `#` run, and
/// any trailing `#` run is stripped.
pub const FLAG_PERMISSIVE_ATX_HEADERS: u32 = 0x0001;

/// Bit flag: never recognize indented code.
pub const FLAG_NO_INDENTED_CODE: u32 = 0x0002;

/// Parsing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Accept `#Heading` and strip a trailing `#` run even when it is not
    /// preceded by a space.
    pub permissive_atx_headers: bool,
    /// Treat indented lines as ordinary text.
    pub no_indented_code: bool,
}

impl Options {
    /// Build options from `FLAG_*` bits; unknown bits are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            permissive_atx_headers: bits & FLAG_PERMISSIVE_ATX_HEADERS != 0,
            no_indented_code: bits & FLAG_NO_INDENTED_CODE != 0,
        }
    }

    pub const fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.permissive_atx_headers {
            bits |= FLAG_PERMISSIVE_ATX_HEADERS;
        }
        if self.no_indented_code {
            bits |= FLAG_NO_INDENTED_CODE;
        }
        bits
    }

    /// Indentation at which a line becomes indented code; unreachable when
    /// indented code is disabled.
    pub const fn code_indent(&self) -> u32 {
        if self.no_indented_code {
            u32::MAX
        } else {
            CODE_INDENT
        }
    }
}

/// Parse `input`, driving `renderer` with block and text events.
///
/// Exactly one Document enter/leave pair brackets the events of a
/// successful parse. The first failing callback stops the parse; its
/// error comes back as [`ParseError::Aborted`] and no further events are
/// delivered.
///
/// Input longer than [`limits::MAX_INPUT_LEN`] (4 GiB) is rejected with
/// [`ParseError::InputTooLarge`] before any event is delivered.
///
/// # Example
/// ```
/// use mdblock::{HtmlRenderer, Options};
///
/// let mut html = HtmlRenderer::new();
/// mdblock::parse(b"# Hello\n\nWorld\n", &mut html, &Options::default()).unwrap();
/// assert_eq!(html.into_string(), "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn parse<R: Renderer>(
    input: &[u8],
    renderer: &mut R,
    options: &Options,
) -> Result<(), ParseError<R::Error>> {
    BlockParser::new(input, renderer, options).parse()
}

/// Convert Markdown to HTML.
///
/// # Example
/// ```
/// let html = mdblock::to_html("Title\n---\n\n***\n");
/// assert_eq!(html, "<h2>Title</h2>\n<hr />\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut html = HtmlRenderer::with_capacity_for(input.len());
    render_html(input.as_bytes(), &mut html, options);
    html.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut html = HtmlRenderer::with_capacity(0);
    std::mem::swap(html.buffer_mut(), out);
    render_html(input.as_bytes(), &mut html, &Options::default());
    std::mem::swap(html.buffer_mut(), out);
}

fn render_html(input: &[u8], html: &mut HtmlRenderer, options: &Options) {
    if let Err(err) = parse(input, html, options) {
        // The HTML renderer never aborts; this is allocation failure or a
        // debug-build invariant check.
        log::error!("markdown parse failed: {err}");
    }
}
