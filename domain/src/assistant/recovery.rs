//! Normalization of free-text model output into a decodable JSON document.
//!
//! Models wrap JSON in markdown fences, prepend pleasantries, and append
//! commentary. [`extract_json`] applies a best-effort normalization pass
//! so that decoding can be attempted on the cleanest candidate text. It
//! never parses into a target type itself; decoding success or failure is
//! the caller's signal.

/// Extract the most plausible JSON document from raw model output.
///
/// 1. Trim whitespace.
/// 2. If the text opens with a fenced code block marker, drop the fence
///    line (including a language tag) and a trailing closing fence.
/// 3. If the remainder is not already a clean JSON document, slice the
///    outermost `{..}` or `[..]` span, matching braces outside string
///    literals.
///
/// Returns the normalized text; an empty or hopeless input comes back
/// as-is (trimmed) and will fail the caller's decode.
pub fn extract_json(raw: &str) -> String {
    let mut text = raw.trim();

    if text.starts_with("```") {
        text = match text.find('\n') {
            Some(idx) => &text[idx + 1..],
            None => "",
        };
        text = text.trim();
        if let Some(stripped) = text.strip_suffix("```") {
            text = stripped.trim();
        }
    }

    if serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok() {
        return text.to_string();
    }

    outermost_json_span(text)
        .map(str::to_string)
        .unwrap_or_else(|| text.to_string())
}

/// Slice from the first `{`/`[` to its matching close bracket, skipping
/// brackets inside string literals. Falls back to the last close bracket
/// in the text when the match never closes.
fn outermost_json_span(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|&b| b == b'{' || b == b'[')?;
    let (open, close) = if bytes[start] == b'{' {
        (b'{', b'}')
    } else {
        (b'[', b']')
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    // Unbalanced: take everything up to the last close bracket.
    let end = bytes.iter().rposition(|&b| b == close)?;
    (end > start).then(|| &text[start..=end])
}
