// src/views/mod.rs
//! Server-rendered HTML for the locale-prefixed pages.

pub mod catalog;
pub mod forms;
pub mod home;
pub mod info;
pub mod layout;
pub mod product;

pub use layout::{PageContext, PageMeta, Theme};

/// Escapes text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Success or failure notice shown above a form after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn render(&self) -> String {
        let (class, role, text) = match self {
            Banner::Success(text) => ("banner banner-success", "status", text),
            Banner::Error(text) => ("banner banner-error", "alert", text),
        };
        format!(r#"<div class="{class}" role="{role}">{}</div>"#, escape(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"R&D" 'lab'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;lab&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn banner_escapes_its_text() {
        let html = Banner::Error("<oops>".into()).render();
        assert!(html.contains("&lt;oops&gt;"));
        assert!(html.contains(r#"role="alert""#));
    }
}
