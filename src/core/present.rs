//! # Presentation
//!
//! Turns handler outcomes into [`OutputContent`]. Errors go through
//! [`present`], which applies the kind → icon/color/message policy:
//!
//! | kind    | icon | tone   | message                           |
//! |---------|------|--------|-----------------------------------|
//! | network | 📱   | red    | fixed network phrase              |
//! | client  | ⚠️   | orange | caller's message                  |
//! | server  | ❌   | red    | fixed server phrase               |
//! | generic | ❌   | red    | caller's message                  |

use crate::api::{ErrorKind, Post};
use crate::core::output::{Block, OutputContent, OutputRegion, Tone};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Please check your connection.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error: Something went wrong on the server.";

/// Builds the alert for an error of `kind`.
pub fn error_content(kind: ErrorKind, message: &str) -> OutputContent {
    let (icon, tone, message) = match kind {
        ErrorKind::Network => ("📱", Tone::Red, NETWORK_ERROR_MESSAGE),
        ErrorKind::Client => ("⚠️", Tone::Orange, message),
        ErrorKind::Server => ("❌", Tone::Red, SERVER_ERROR_MESSAGE),
        ErrorKind::Generic => ("❌", Tone::Red, message),
    };
    OutputContent::new(vec![Block::Alert {
        icon,
        tone,
        message: message.to_string(),
    }])
}

/// Renders an error into the region, replacing whatever was there.
pub fn present(region: &mut OutputRegion, kind: ErrorKind, message: &str) {
    region.replace(error_content(kind, message));
}

/// Title as a heading, body as a paragraph. Used by both GET handlers.
pub fn post_content(post: &Post) -> OutputContent {
    OutputContent::new(vec![
        Block::Heading {
            level: 3,
            text: post.title.clone(),
        },
        Block::Paragraph(post.body.clone()),
    ])
}

pub fn submitted_content(post: &Post) -> OutputContent {
    confirmation("Post submitted successfully!", post)
}

pub fn updated_content(post: &Post) -> OutputContent {
    confirmation("Post updated successfully!", post)
}

fn confirmation(heading: &str, post: &Post) -> OutputContent {
    let field = |label: &str, value: String| Block::Field {
        label: label.to_string(),
        value,
    };
    OutputContent::new(vec![
        Block::Heading {
            level: 4,
            text: heading.to_string(),
        },
        field("ID", post.id.to_string()),
        field("Title", post.title.clone()),
        field("Body", post.body.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::post;

    fn alert(region: &OutputRegion) -> (&'static str, Tone, String) {
        match region.content().map(|c| c.blocks.as_slice()) {
            Some([Block::Alert { icon, tone, message }]) => (*icon, *tone, message.clone()),
            other => panic!("expected a single alert, got {other:?}"),
        }
    }

    #[test]
    fn test_network_message_is_always_overridden() {
        let mut region = OutputRegion::new();
        for caller_message in ["PUT request failed due to network error.", "", "anything"] {
            present(&mut region, ErrorKind::Network, caller_message);
            assert_eq!(alert(&region), ("📱", Tone::Red, NETWORK_ERROR_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_server_message_is_always_overridden() {
        let mut region = OutputRegion::new();
        present(&mut region, ErrorKind::Server, "Error 503: Server error.");
        assert_eq!(alert(&region), ("❌", Tone::Red, SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_client_message_is_preserved_in_orange() {
        let mut region = OutputRegion::new();
        present(&mut region, ErrorKind::Client, "Error 404: Client error.");
        assert_eq!(
            alert(&region),
            ("⚠️", Tone::Orange, "Error 404: Client error.".to_string())
        );
        assert_eq!(region.to_plain_text(), "⚠️ Error 404: Client error.");
    }

    #[test]
    fn test_generic_message_is_preserved_in_red() {
        let mut region = OutputRegion::new();
        present(&mut region, ErrorKind::default(), "Something odd.");
        assert_eq!(alert(&region), ("❌", Tone::Red, "Something odd.".to_string()));
    }

    #[test]
    fn test_second_presentation_replaces_first() {
        let mut region = OutputRegion::new();
        present(&mut region, ErrorKind::Client, "first");
        present(&mut region, ErrorKind::Generic, "second");
        assert_eq!(region.content().map(|c| c.blocks.len()), Some(1));
        assert_eq!(region.to_plain_text(), "❌ second");
    }

    #[test]
    fn test_post_content_is_heading_and_paragraph() {
        let content = post_content(&post(1, "A", "B"));
        assert_eq!(content.to_html(), "<h3>A</h3>\n<p>B</p>");
    }

    #[test]
    fn test_submitted_confirmation_lists_fields() {
        let content = submitted_content(&post(101, "Hi", "There"));
        assert_eq!(
            content.to_plain_text(),
            "Post submitted successfully!\nID: 101\nTitle: Hi\nBody: There"
        );
    }

    #[test]
    fn test_updated_confirmation_escapes_user_text() {
        let content = updated_content(&post(3, "<i>x</i>", "a & b"));
        let html = content.to_html();
        assert!(html.starts_with("<h4>Post updated successfully!</h4>"));
        assert!(html.contains("<p><strong>Title:</strong> &lt;i&gt;x&lt;/i&gt;</p>"));
        assert!(html.contains("<p><strong>Body:</strong> a &amp; b</p>"));
    }
}
