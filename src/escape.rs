//! HTML escaping for text runs.
//!
//! Fast path: find the first escapable byte with memchr and bulk-copy the
//! clean prefix; only then fall back to the lookup table.

use memchr::{memchr, memchr3};

/// Bytes that must be escaped in HTML text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into `out`.
///
/// # Example
/// ```
/// use mdblock::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"a < b && \"c\"");
/// assert_eq!(out, b"a &lt; b &amp;&amp; &quot;c&quot;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let Some(first) = first_text_escape(input) else {
        out.extend_from_slice(input);
        return;
    };

    out.extend_from_slice(&input[..first]);
    let mut pos = first;
    while pos < input.len() {
        let run_start = pos;
        while pos < input.len() && !TEXT_ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        out.extend_from_slice(&input[run_start..pos]);

        if let Some(&b) = input.get(pos) {
            out.extend_from_slice(match b {
                b'<' => b"&lt;" as &[u8],
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                _ => b"&quot;",
            });
            pos += 1;
        }
    }
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    match (memchr3(b'<', b'>', b'&', input), memchr(b'"', input)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
