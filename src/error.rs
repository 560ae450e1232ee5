//! Parse failure taxonomy.

/// Status reported when the pending line buffer could not grow.
pub const STATUS_OUT_OF_MEMORY: i32 = -1;

/// Status reported when an internal invariant check fails (debug builds).
pub const STATUS_INTERNAL: i32 = -2;

/// Status reported when the input exceeds [`crate::limits::MAX_INPUT_LEN`].
pub const STATUS_INPUT_TOO_LARGE: i32 = -3;

/// Why a parse stopped early.
///
/// `E` is the renderer's error type; a callback failure is handed back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError<E> {
    #[error("aborted by renderer callback")]
    Aborted(E),
    #[error("pending line buffer could not grow")]
    OutOfMemory,
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
    #[error("input of {0} bytes exceeds the 4 GiB limit")]
    InputTooLarge(usize),
}

impl<E> ParseError<E>
where
    E: Copy + Into<i32>,
{
    /// Integer status for C-style callers: the callback's own value for an
    /// abort, one of the negative `STATUS_*` constants otherwise.
    pub fn status(&self) -> i32 {
        match self {
            Self::Aborted(code) => (*code).into(),
            Self::OutOfMemory => STATUS_OUT_OF_MEMORY,
            Self::Internal(_) => STATUS_INTERNAL,
            Self::InputTooLarge(_) => STATUS_INPUT_TOO_LARGE,
        }
    }
}

/// Collapse a parse result into a status code, `0` meaning success.
pub fn status_of<E>(result: &Result<(), ParseError<E>>) -> i32
where
    E: Copy + Into<i32>,
{
    match result {
        Ok(()) => 0,
        Err(err) => err.status(),
    }
}
