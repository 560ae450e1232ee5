//! Line classification.
//!
//! Each physical line is classified on its own, given only the type of the
//! block currently being accumulated (the pivot). The classifier never
//! fails: anything it does not recognize is `Text`.

use crate::cursor::Cursor;
use crate::limits::{MAX_HEADING_LEVEL, MIN_THEMATIC_BREAK_MARKERS};
use crate::{Options, Range};

/// Structural type of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineType {
    /// Empty or whitespace-only.
    Blank,
    /// `***`, `- - -`, `___` and friends.
    ThematicBreak,
    /// `# Heading`.
    AtxHeading,
    /// First line of a paragraph that a following underline turned into a
    /// heading. Never produced by the classifier; the assembler rewrites
    /// `Text` into it.
    SetextHeading,
    /// `===` or `---` directly under a paragraph line.
    SetextUnderline,
    /// Line indented by at least the code threshold, or a blank line inside
    /// indented code.
    IndentedCode,
    /// Anything else.
    Text,
}

/// One classified physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub kind: LineType,
    /// Heading level for ATX headings, setext underlines and rewritten
    /// setext heading lines.
    pub level: Option<u8>,
    /// Significant content, without indentation, trailing spaces, the
    /// terminator, or (for ATX headings) the closing `#` run.
    pub content: Range,
    /// Leading whitespace width. For indented code this is relative to the
    /// code threshold.
    pub indent: u32,
}

/// Classifies lines of a single buffer under a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    input: &'a [u8],
    code_indent: u32,
    permissive_atx: bool,
}

impl<'a> LineClassifier<'a> {
    pub fn new(input: &'a [u8], options: &Options) -> Self {
        Self {
            input,
            code_indent: options.code_indent(),
            permissive_atx: options.permissive_atx_headers,
        }
    }

    /// Classify the line starting at `start`.
    ///
    /// Returns the line and the offset of the next line, which is past the
    /// terminator (`\n`, `\r\n` or `\r`). The returned offset is greater
    /// than `start` unless `start` is already at end of input.
    pub fn classify(&self, start: usize, pivot: LineType) -> (Line, usize) {
        let mut cursor = Cursor::new_at(self.input, start);
        let mut indent = cursor.skip_indent();
        let mut content_start = cursor.offset();
        let mut level = None;

        let kind = if cursor.at_line_end() {
            indent = 0;
            // Blank lines inside indented code belong to it; trailing ones
            // are dropped when the block is flushed.
            if pivot == LineType::IndentedCode {
                LineType::IndentedCode
            } else {
                LineType::Blank
            }
        } else if matches!(pivot, LineType::Blank | LineType::IndentedCode)
            && indent >= self.code_indent
        {
            // Indented code cannot interrupt a paragraph, so the checks
            // below never see a line indented past the threshold unless the
            // pivot is prose.
            indent -= self.code_indent;
            LineType::IndentedCode
        } else if let Some((hashes, after)) = self.atx_heading_start(cursor) {
            level = Some(hashes);
            content_start = after.offset();
            cursor = after;
            LineType::AtxHeading
        } else if let Some(underline) = self.setext_underline(cursor, pivot) {
            level = Some(underline);
            LineType::SetextUnderline
        } else if is_thematic_break(cursor) {
            LineType::ThematicBreak
        } else {
            LineType::Text
        };

        cursor.advance(cursor.find_line_end());
        let mut content_end = cursor.offset();
        if kind == LineType::AtxHeading {
            content_end = self.trim_closing_hashes(content_start, content_end);
        }
        content_end = trim_trailing_spaces(self.input, content_start, content_end);
        cursor.eat_line_end();

        let line = Line {
            kind,
            level,
            content: Range::from_usize(content_start, content_end),
            indent,
        };
        (line, cursor.offset())
    }

    /// Match an ATX opening `#` run of 1..=6 hashes.
    ///
    /// Returns the level and a cursor at the first content byte.
    fn atx_heading_start(&self, mut cursor: Cursor<'a>) -> Option<(u8, Cursor<'a>)> {
        if !cursor.at(b'#') {
            return None;
        }

        let hashes = cursor.skip_run(b'#');
        if hashes > MAX_HEADING_LEVEL as usize {
            return None;
        }

        if !self.permissive_atx && !cursor.at(b' ') && !cursor.at_line_end() {
            return None;
        }

        cursor.skip_spaces();
        Some((hashes as u8, cursor))
    }

    /// Match a setext underline. Only a paragraph line can be underlined.
    fn setext_underline(&self, mut cursor: Cursor<'a>, pivot: LineType) -> Option<u8> {
        if pivot != LineType::Text {
            return None;
        }

        let marker = cursor.peek()?;
        let level = match marker {
            b'=' => 1,
            b'-' => 2,
            _ => return None,
        };

        cursor.skip_run(marker);
        cursor.skip_spaces();
        if !cursor.at_line_end() {
            return None;
        }

        Some(level)
    }

    /// Strip an optional closing `#` run (and the spaces before it) from
    /// ATX heading content.
    ///
    /// The run only counts as closing when it is the whole content or is
    /// preceded by a space; with permissive headers any trailing run goes.
    fn trim_closing_hashes(&self, start: usize, end: usize) -> usize {
        let input = self.input;
        let mut pos = trim_trailing_spaces(input, start, end);
        while pos > start && input[pos - 1] == b'#' {
            pos -= 1;
        }

        if pos == start || input[pos - 1] == b' ' || self.permissive_atx {
            pos
        } else {
            end
        }
    }
}

/// Thematic break: one of `-`, `_`, `*` repeated at least three times,
/// optionally separated by spaces. Whatever follows the run belongs to the
/// break and is never emitted.
fn is_thematic_break(mut cursor: Cursor<'_>) -> bool {
    let marker = match cursor.peek() {
        Some(b @ (b'-' | b'_' | b'*')) => b,
        _ => return false,
    };

    let mut count = 0;
    loop {
        count += cursor.skip_run(marker);
        if cursor.skip_spaces() == 0 {
            break;
        }
    }

    count >= MIN_THEMATIC_BREAK_MARKERS
}

#[inline]
fn trim_trailing_spaces(input: &[u8], start: usize, mut end: usize) -> usize {
    while end > start && input[end - 1] == b' ' {
        end -= 1;
    }
    end
}
