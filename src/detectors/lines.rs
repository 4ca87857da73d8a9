//! Line splitting and trimming
//!
//! Source files arrive with any mix of line endings. A line ends at `\n`,
//! `\r`, `\r\n`, vertical tab, form feed, the ASCII file/group/record
//! separators, NEL, LINE SEPARATOR or PARAGRAPH SEPARATOR.

/// True for a character that ends a line.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Unicode whitespace plus the ASCII information separators (`\x1c`..=`\x1f`).
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strip leading and trailing [`is_space`] characters.
pub fn trim(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Number of leading [`is_space`] characters.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| is_space(*c)).count()
}

/// Split text into lines. `\r\n` counts as a single break, breaks are not
/// kept, and a trailing break does not add an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
