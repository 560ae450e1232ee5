//! Structural constants shared by the classifier and the block renderer.

/// Minimum indentation for a line to start or continue indented code.
pub const CODE_INDENT: u32 = 4;

/// Tab rounding granularity for indentation.
///
/// Must be a power of two: the running indent is rounded up with a mask.
pub const TAB_STOP: u32 = 4;

/// Deepest ATX heading (`######`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Fewest marker characters that make a thematic break.
pub const MIN_THEMATIC_BREAK_MARKERS: usize = 3;

/// Inline capacity of the pending line buffer before it spills to the heap.
pub const INITIAL_LINE_CAPACITY: usize = 32;

/// Width of the static space run used to emit code indentation.
pub const INDENT_CHUNK: usize = 16;

/// Largest input a parse accepts; line ranges are `u32` offsets.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;
