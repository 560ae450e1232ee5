//! Block assembler.
//!
//! Pulls classified lines one at a time, groups them into blocks and hands
//! every completed block to the emitter. Only one line of lookahead is
//! ever needed: a setext underline retroactively turns the pending
//! paragraph into a heading.

use smallvec::SmallVec;

use crate::error::ParseError;
use crate::limits::{INITIAL_LINE_CAPACITY, MAX_INPUT_LEN};
use crate::renderer::{BlockDetail, BlockType, Renderer};
use crate::Options;

use super::emit::{checked, emit_block, Block};
use super::line::{Line, LineClassifier, LineType};

/// What the pending line buffer currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pivot {
    /// Nothing pending; the last thing seen was a blank line, a
    /// self-contained block, or the start of input.
    NoBlock,
    /// Lines of this type are being accumulated.
    Accumulating(LineType),
}

impl Pivot {
    /// Line type the classifier sees as context.
    #[inline]
    fn line_type(self) -> LineType {
        match self {
            Pivot::NoBlock => LineType::Blank,
            Pivot::Accumulating(kind) => kind,
        }
    }
}

/// Single-pass block parser driving a [`Renderer`].
pub struct BlockParser<'a, 'r, R: Renderer> {
    input: &'a [u8],
    classifier: LineClassifier<'a>,
    renderer: &'r mut R,
    /// Scan offset; only ever moves forward.
    offset: usize,
    pivot: Pivot,
    /// Lines of the block being built. Truncated, not freed, after each
    /// flush.
    lines: SmallVec<[Line; INITIAL_LINE_CAPACITY]>,
}

impl<'a, 'r, R: Renderer> BlockParser<'a, 'r, R> {
    pub fn new(input: &'a [u8], renderer: &'r mut R, options: &Options) -> Self {
        Self {
            input,
            classifier: LineClassifier::new(input, options),
            renderer,
            offset: 0,
            pivot: Pivot::NoBlock,
            lines: SmallVec::new(),
        }
    }

    /// Parse the whole buffer, bracketed by one Document enter/leave pair.
    pub fn parse(mut self) -> Result<(), ParseError<R::Error>> {
        if let Err(err) = check_input_len(self.input.len()) {
            self.renderer.debug_log("Input exceeds the 4 GiB limit.");
            return Err(err);
        }

        let result = self.renderer.enter_block(BlockType::Document, BlockDetail::None);
        checked(self.renderer, result, "enter_block").map_err(ParseError::Aborted)?;

        while self.offset < self.input.len() {
            let (line, next) = self.classifier.classify(self.offset, self.pivot.line_type());
            debug_assert!(next > self.offset);
            self.offset = next;
            self.process_line(line)?;
        }

        if self.pivot != Pivot::NoBlock {
            self.flush()?;
        }

        let result = self.renderer.leave_block(BlockType::Document, BlockDetail::None);
        checked(self.renderer, result, "leave_block").map_err(ParseError::Aborted)
    }

    fn process_line(&mut self, line: Line) -> Result<(), ParseError<R::Error>> {
        match line.kind {
            // Self-contained blocks never merge with their neighbours.
            LineType::ThematicBreak | LineType::AtxHeading => {
                self.flush()?;
                self.push(line)?;
                self.flush()?;
                self.pivot = Pivot::NoBlock;
            }
            LineType::SetextUnderline => {
                self.resolve_setext(line)?;
                self.pivot = Pivot::NoBlock;
            }
            kind if kind != self.pivot.line_type() => {
                self.flush()?;
                if kind == LineType::Blank {
                    self.pivot = Pivot::NoBlock;
                } else {
                    self.push(line)?;
                    self.pivot = Pivot::Accumulating(kind);
                }
            }
            // Runs of blank lines between blocks are absorbed.
            LineType::Blank => {}
            _ => self.push(line)?,
        }
        Ok(())
    }

    /// Turn the pending paragraph into a heading and flush it. The
    /// underline itself contributes no content.
    fn resolve_setext(&mut self, underline: Line) -> Result<(), ParseError<R::Error>> {
        match self.lines.first_mut() {
            Some(first) if first.kind == LineType::Text => {
                first.kind = LineType::SetextHeading;
                first.level = underline.level;
            }
            _ => {
                if cfg!(debug_assertions) {
                    self.renderer
                        .debug_log("setext underline without a pending paragraph");
                    return Err(ParseError::Internal(
                        "setext underline without a pending paragraph",
                    ));
                }
            }
        }
        self.flush()
    }

    fn push(&mut self, line: Line) -> Result<(), ParseError<R::Error>> {
        if self.lines.len() == self.lines.capacity() {
            let additional = self.lines.capacity().max(INITIAL_LINE_CAPACITY);
            if self.lines.try_reserve_exact(additional).is_err() {
                self.renderer.debug_log("Failed to grow the pending line buffer.");
                return Err(ParseError::OutOfMemory);
            }
        }
        self.lines.push(line);
        Ok(())
    }

    /// Emit the pending lines as one block and clear the buffer.
    fn flush(&mut self) -> Result<(), ParseError<R::Error>> {
        let Some(first) = self.lines.first().copied() else {
            return Ok(());
        };

        let (kind, detail) = match first.kind {
            LineType::Blank => {
                self.lines.clear();
                return Ok(());
            }
            LineType::ThematicBreak => (BlockType::HorizontalRule, BlockDetail::None),
            LineType::AtxHeading | LineType::SetextHeading => match first.level {
                Some(level) => (BlockType::Heading, BlockDetail::Heading { level }),
                None => {
                    if cfg!(debug_assertions) {
                        self.lines.clear();
                        self.renderer.debug_log("heading line without a level");
                        return Err(ParseError::Internal("heading line without a level"));
                    }
                    (BlockType::Heading, BlockDetail::Heading { level: 1 })
                }
            },
            LineType::IndentedCode => (BlockType::Code, BlockDetail::None),
            LineType::Text => (BlockType::Paragraph, BlockDetail::None),
            LineType::SetextUnderline => {
                self.lines.clear();
                if cfg!(debug_assertions) {
                    self.renderer.debug_log("setext underline flushed as a block");
                    return Err(ParseError::Internal("setext underline flushed as a block"));
                }
                return Ok(());
            }
        };

        let mut len = self.lines.len();
        if kind == BlockType::Code {
            // Blank lines absorbed at the end of a code block are not part
            // of it; a code block always starts with a non-blank line.
            while len > 1 && self.lines[len - 1].content.is_empty() {
                len -= 1;
            }
        }

        #[cfg(feature = "trace")]
        log::trace!("flush {kind:?} ({len} lines) at offset {}", self.offset);

        let block = Block {
            kind,
            detail,
            lines: &self.lines[..len],
        };
        let result = emit_block(self.input, self.renderer, block);
        self.lines.clear();
        result.map_err(ParseError::Aborted)
    }
}

/// Line ranges hold `u32` offsets; anything longer would wrap.
fn check_input_len<E>(len: usize) -> Result<(), ParseError<E>> {
    if len > MAX_INPUT_LEN {
        Err(ParseError::InputTooLarge(len))
    } else {
        Ok(())
    }
}
