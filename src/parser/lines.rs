//! Logical line splitting across mixed newline conventions.
//!
//! Uploaded files arrive with CRLF, LF or bare CR line endings, sometimes
//! mixed within one file. The splitter treats all three as terminators,
//! matching CRLF first so it is never split into two lines.

/// Split raw text into logical lines across `\r\n`, `\n` and `\r`.
///
/// Line content is returned verbatim (no trimming). A trailing newline
/// produces a final empty entry, which callers skip as a blank line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                // CRLF counts as a single terminator
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Index of the first line that is not empty or whitespace-only.
///
/// This is the shared "first meaningful line" lookup: the header line for
/// parsing and delimiter sniffing, and the anchor for row counting.
pub fn first_content_line(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| !line.trim().is_empty())
}
