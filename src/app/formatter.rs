/// Extensions where indentation or blank-line layout carries meaning.
pub const WHITESPACE_SENSITIVE_EXTENSIONS: &[&str] = &["py", "yaml", "yml", "md", "swift", "go"];

pub const BINARY_PLACEHOLDER: &str = "This is a binary file.";

/// Append-only Markdown document, one section per included file.
///
/// Each section starts with a `# <path>` heading and ends with a blank line,
/// so the document can be split back apart on heading lines.
#[derive(Debug, Default)]
pub struct DigestDocument {
    buf: String,
}

impl DigestDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text_section(&mut self, relative_path: &str, extension: &str, content: &str) {
        self.buf.push_str(&format!("# {}\n\n", relative_path));
        self.buf.push_str(&format!("```{}\n", extension));
        self.buf.push_str(content);
        self.buf.push_str("\n```\n\n");
    }

    pub fn push_binary_section(&mut self, relative_path: &str) {
        self.buf.push_str(&format!("# {}\n\n", relative_path));
        self.buf.push_str(BINARY_PLACEHOLDER);
        self.buf.push_str("\n\n");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

pub fn is_whitespace_sensitive(extension: &str) -> bool {
    let ext = extension.to_lowercase();
    WHITESPACE_SENSITIVE_EXTENSIONS.contains(&ext.as_str())
}

/// Line-oriented cleanup: trailing whitespace is dropped, whitespace-only lines
/// become empty, and the leading run of spaces and tabs is kept as-is.
/// Lines are rejoined with `\n` whatever the original line endings were.
pub fn normalize_whitespace(content: &str) -> String {
    split_lines(content)
        .into_iter()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            let indent_len = line
                .find(|c: char| c != ' ' && c != '\t')
                .unwrap_or(line.len());
            format!("{}{}", &line[..indent_len], trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// Splits on every newline character, `\r\n` counting once. Empty lines are kept.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    lines.push(&content[start..]);
    lines
}
