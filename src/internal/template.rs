//! Positional placeholder expansion for alias templates.
//!
//! A template is scanned once, left to right:
//! - `{{` emits `{` and `}}` emits `}`
//! - `{N}` emits the N-th argument of the triggering input, where argument 0 is the
//!   first token after the alias itself
//! - any other brace is copied as-is
//!
//! Because `{{` is consumed before anything else at a given position, `{{0}}` renders as
//! the literal `{0}` and `{{{0}}}` renders the first argument wrapped in braces.

use super::error::{AliasError, Result};

/// Expand `template` against the whitespace-split input `tokens`, where `tokens[0]` is
/// the alias that triggered the expansion.
pub fn expand<S: AsRef<str>>(template: &str, tokens: &[S]) -> Result<String> {
    let args = tokens.get(1..).unwrap_or_default();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if let Some((index, len)) = placeholder(tail) {
            let arg = args.get(index).ok_or(AliasError::IndexOutOfRange {
                index,
                available: args.len(),
            })?;
            out.push_str(arg.as_ref());
            rest = &tail[len..];
            continue;
        }

        // lone brace
        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Parse a `{N}` at the start of `s`, returning N and the byte length of the placeholder.
/// Indices too large for `usize` saturate, so they always end up out of range.
fn placeholder(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix('{')?;
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with('}') {
        return None;
    }
    let index = body[..digits].parse::<usize>().unwrap_or(usize::MAX);
    Some((index, digits + 2))
}
