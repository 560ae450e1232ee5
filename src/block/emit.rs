//! Emission of one completed block through the renderer.

use crate::limits::INDENT_CHUNK;
use crate::renderer::{BlockDetail, BlockType, Renderer, TextKind};

use super::line::Line;

const SPACES: &[u8; INDENT_CHUNK] = b"                ";
const NEWLINE: &[u8] = b"\n";

/// A completed block: its type, detail and the lines it was built from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Block<'l> {
    pub kind: BlockType,
    pub detail: BlockDetail,
    pub lines: &'l [Line],
}

/// Emit enter, content and leave events for `block`.
///
/// Stops at the first failing callback; events already delivered stand.
pub(crate) fn emit_block<R: Renderer>(
    input: &[u8],
    renderer: &mut R,
    block: Block<'_>,
) -> Result<(), R::Error> {
    let result = renderer.enter_block(block.kind, block.detail);
    checked(renderer, result, "enter_block")?;

    match block.kind {
        BlockType::HorizontalRule => {}
        BlockType::Code => emit_verbatim(input, renderer, block.lines)?,
        _ => emit_normal(input, renderer, block.lines)?,
    }

    let result = renderer.leave_block(block.kind, block.detail);
    checked(renderer, result, "leave_block")
}

/// Prose: each line's content followed by a newline, including the last.
fn emit_normal<R: Renderer>(input: &[u8], renderer: &mut R, lines: &[Line]) -> Result<(), R::Error> {
    for line in lines {
        emit_text(renderer, TextKind::Normal, line.content.slice(input))?;
        emit_text(renderer, TextKind::Normal, NEWLINE)?;
    }
    Ok(())
}

/// Code: indentation relative to the code threshold, content, newline.
fn emit_verbatim<R: Renderer>(
    input: &[u8],
    renderer: &mut R,
    lines: &[Line],
) -> Result<(), R::Error> {
    for line in lines {
        let mut indent = line.indent as usize;
        while indent > INDENT_CHUNK {
            emit_text(renderer, TextKind::CodeBlock, SPACES)?;
            indent -= INDENT_CHUNK;
        }
        emit_text(renderer, TextKind::CodeBlock, &SPACES[..indent])?;
        emit_text(renderer, TextKind::CodeBlock, line.content.slice(input))?;
        emit_text(renderer, TextKind::CodeBlock, NEWLINE)?;
    }
    Ok(())
}

/// Deliver a text run, skipping empty ones.
#[inline]
fn emit_text<R: Renderer>(renderer: &mut R, kind: TextKind, text: &[u8]) -> Result<(), R::Error> {
    if text.is_empty() {
        return Ok(());
    }
    let result = renderer.text(kind, text);
    checked(renderer, result, "text")
}

/// Log which callback aborted before handing its error back.
pub(crate) fn checked<R: Renderer>(
    renderer: &mut R,
    result: Result<(), R::Error>,
    callback: &str,
) -> Result<(), R::Error> {
    if result.is_err() {
        renderer.debug_log(&format!("Aborted from {callback}() callback."));
    }
    result
}
