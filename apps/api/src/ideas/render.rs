//! Representation rendering — one resolved idea, three wire shapes.
//!
//! Corpus lines may carry HTML entities and `<br/>` line-break markers. The
//! HTML page embeds them verbatim; the plain-text shape decodes entities and
//! turns markers into newlines; the JSON shape drops markers entirely.

use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Internal line-break marker used inside corpus lines.
const BREAK_MARKER: &str = "<br/>";

/// The representation dimension of `GET idea`, dispatched explicitly by the
/// router rather than through handler inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    PlainText,
    Json,
}

/// HTML page template with `{{idea}}` and `{{idea_hash}}` placeholders,
/// loaded once at startup.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    pub fn new(template: String) -> Self {
        PageTemplate { template }
    }

    pub fn render(&self, idea: &str, idea_hash: &str) -> String {
        self.template
            .replace("{{idea}}", idea)
            .replace("{{idea_hash}}", idea_hash)
    }
}

#[derive(Debug, Serialize)]
pub struct IdeaBody {
    pub hash: String,
    pub idea: String,
    pub permalink: String,
}

/// Renders the formatted idea in the negotiated representation.
pub fn render_idea(
    representation: Representation,
    template: &PageTemplate,
    idea: &str,
    idea_hash: &str,
    base_url: &str,
) -> Response {
    match representation {
        Representation::Html => Html(template.render(idea, idea_hash)).into_response(),
        Representation::PlainText => {
            let text = html_escape::decode_html_entities(idea).replace(BREAK_MARKER, "\n");
            plain_text(text)
        }
        Representation::Json => Json(IdeaBody {
            hash: idea_hash.to_string(),
            idea: idea.replace(BREAK_MARKER, "").replace('\n', ""),
            permalink: format!("{base_url}/{idea_hash}"),
        })
        .into_response(),
    }
}

pub fn plain_text(body: String) -> Response {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> PageTemplate {
        PageTemplate::new("<h1>{{idea}}</h1><a href=\"/{{idea_hash}}\">link</a>".to_string())
    }

    #[test]
    fn test_template_fills_both_placeholders() {
        let page = template().render("do the thing", "abc123");
        assert_eq!(page, "<h1>do the thing</h1><a href=\"/abc123\">link</a>");
    }

    #[test]
    fn test_html_keeps_entities_and_markers_verbatim() {
        let page = template().render("first&amp;second<br/>third", "abc123");
        assert!(page.contains("first&amp;second<br/>third"));

        let resp = render_idea(
            Representation::Html,
            &template(),
            "first&amp;second<br/>third",
            "abc123",
            "http://localhost",
        );
        assert!(resp.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[test]
    fn test_plain_text_decodes_entities_and_breaks() {
        let text =
            html_escape::decode_html_entities("fish &amp; chips<br/>for two").replace(BREAK_MARKER, "\n");
        assert_eq!(text, "fish & chips\nfor two");
    }

    #[test]
    fn test_json_body_shape() {
        let body = IdeaBody {
            hash: "abc123".to_string(),
            idea: "one two".to_string(),
            permalink: "http://localhost/abc123".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["hash"], "abc123");
        assert_eq!(json["idea"], "one two");
        assert_eq!(json["permalink"], "http://localhost/abc123");
    }

    #[test]
    fn test_json_idea_drops_break_markers() {
        let idea = "part one<br/>part two".replace(BREAK_MARKER, "").replace('\n', "");
        assert_eq!(idea, "part onepart two");
        assert!(!idea.contains(BREAK_MARKER));
    }
}
