//! # Output Region
//!
//! The single area every handler writes its result into. Content is always
//! replaced wholesale; nothing accumulates between writes.
//!
//! Content is kept structured (`Block`s) rather than as markup, so each
//! adapter renders it in its own medium:
//!
//! - [`OutputContent::to_html`]: HTML with every interpolated value escaped
//! - [`OutputContent::to_plain_text`]: one line per block, for the CLI
//! - the TUI output panel maps blocks onto styled ratatui lines

/// Color of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
}

impl Tone {
    pub fn css_name(self) -> &'static str {
        match self {
            Tone::Red => "red",
            Tone::Orange => "orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading; `level` is the HTML heading level (3 or 4 here).
    Heading { level: u8, text: String },
    Paragraph(String),
    /// A bold label followed by its value, e.g. `ID: 101`.
    Field { label: String, value: String },
    /// A bold, colored paragraph: icon then message.
    Alert {
        icon: &'static str,
        tone: Tone,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputContent {
    pub blocks: Vec<Block>,
}

impl OutputContent {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn to_html(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { level, text } => {
                    format!("<h{level}>{}</h{level}>", escape_html(text))
                }
                Block::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
                Block::Field { label, value } => format!(
                    "<p><strong>{}:</strong> {}</p>",
                    escape_html(label),
                    escape_html(value)
                ),
                Block::Alert {
                    icon,
                    tone,
                    message,
                } => format!(
                    "<p style=\"color:{}; font-weight:bold;\">{} {}</p>",
                    tone.css_name(),
                    icon,
                    escape_html(message)
                ),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { text, .. } | Block::Paragraph(text) => text.clone(),
                Block::Field { label, value } => format!("{label}: {value}"),
                Block::Alert { icon, message, .. } => format!("{icon} {message}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The one shared presentation target. Last write wins.
#[derive(Debug, Default)]
pub struct OutputRegion {
    content: Option<OutputContent>,
}

impl OutputRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, content: OutputContent) {
        self.content = Some(content);
    }

    pub fn content(&self) -> Option<&OutputContent> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn to_html(&self) -> String {
        self.content
            .as_ref()
            .map(OutputContent::to_html)
            .unwrap_or_default()
    }

    pub fn to_plain_text(&self) -> String {
        self.content
            .as_ref()
            .map(OutputContent::to_plain_text)
            .unwrap_or_default()
    }
}

/// Escapes text for interpolation into HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replaces control characters (other than newline) so remote text can't
/// drive the terminal.
pub fn sanitize_terminal(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\n' { '\u{FFFD}' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_to_html_escapes_every_interpolated_value() {
        let content = OutputContent::new(vec![
            Block::Heading {
                level: 3,
                text: "<script>alert(1)</script>".to_string(),
            },
            Block::Paragraph("<img src=x onerror=alert(1)>".to_string()),
            Block::Field {
                label: "Title".to_string(),
                value: "<b>bold</b>".to_string(),
            },
            Block::Alert {
                icon: "⚠️",
                tone: Tone::Orange,
                message: "Error <404>".to_string(),
            },
        ]);

        let html = content.to_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert_eq!(
            html,
            "<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>\n\
             <p>&lt;img src=x onerror=alert(1)&gt;</p>\n\
             <p><strong>Title:</strong> &lt;b&gt;bold&lt;/b&gt;</p>\n\
             <p style=\"color:orange; font-weight:bold;\">⚠️ Error &lt;404&gt;</p>"
        );
    }

    #[test]
    fn test_plain_text_rendering() {
        let content = OutputContent::new(vec![
            Block::Heading {
                level: 4,
                text: "Done".to_string(),
            },
            Block::Field {
                label: "ID".to_string(),
                value: "7".to_string(),
            },
        ]);
        assert_eq!(content.to_plain_text(), "Done\nID: 7");
    }

    #[test]
    fn test_region_replace_does_not_accumulate() {
        let mut region = OutputRegion::new();
        assert!(region.is_empty());
        assert_eq!(region.to_html(), "");

        region.replace(OutputContent::new(vec![Block::Paragraph("first".to_string())]));
        region.replace(OutputContent::new(vec![Block::Paragraph("second".to_string())]));

        assert_eq!(region.to_plain_text(), "second");
    }

    #[test]
    fn test_sanitize_terminal_keeps_newlines() {
        assert_eq!(sanitize_terminal("a\x1b[2Jb\nc"), "a\u{FFFD}[2Jb\nc");
    }
}
