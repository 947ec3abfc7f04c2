/// Best-effort extraction of the first balanced JSON object from model
/// output.
///
/// Models wrap their JSON in markdown fences, add commentary around it, or
/// skip it entirely. This peels a fenced block first, then returns the first
/// `{ ... }` span whose braces balance. Returns `None` when no complete
/// object is present.
///
/// The scan counts only `{`/`}`; braces inside string literals are not
/// tracked. The requested schema's outer shape is always an object, so this
/// is sufficient in practice.
pub fn extract_json_object(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let raw = raw.replace('\r', "");
    let text = strip_code_fence(&raw);

    let start = text.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..=start + offset].trim().to_string());
                }
            }
            _ => {}
        }
    }

    // Opened but never closed: truncated output
    None
}

/// Peel the contents of the first fenced code block, dropping a leading
/// `json` language tag. Text without a closing fence is scanned as-is.
fn strip_code_fence(raw: &str) -> &str {
    if let Some(open) = raw.find("```") {
        let inner = &raw[open + 3..];
        if let Some(close) = inner.find("```") {
            let mut inside = &inner[..close];
            if inside
                .get(..4)
                .map_or(false, |tag| tag.eq_ignore_ascii_case("json"))
            {
                inside = &inside[4..];
            }
            return inside.trim();
        }
    }
    raw
}
