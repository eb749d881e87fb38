//! Brace balance check for rendered documents.
//!
//! `//` comments run to the end of the line and are skipped.

/// Byte offset of the first `}` without a matching `{`, or of the end of
/// the text if some `{` is never closed. `None` when balanced.
pub fn first_unbalanced(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (line_start, line) in line_offsets(text) {
        let code = line.split("//").next().unwrap_or("");
        for (i, ch) in code.char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return Some(line_start + i),
                },
                _ => {}
            }
        }
    }
    (depth != 0).then_some(text.len())
}

/// Whether every `{` has a matching `}`.
pub fn is_balanced(text: &str) -> bool {
    first_unbalanced(text).is_none()
}

fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}
