//! The three artifacts a page is built from, and the slots handed to the template.

use serde::Serialize;

/// Root name the page template is registered under.
pub const PAGE_TEMPLATE_NAME: &str = "index.html";

/// Raw, unrendered inputs for a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent {
    /// Markdown document body. Kept as bytes; decoding happens in the render pipeline.
    pub body: Vec<u8>,
    pub template_source: String,
    pub stylesheet: String,
}

impl RawContent {
    pub fn new(
        body: impl Into<Vec<u8>>,
        template_source: impl Into<String>,
        stylesheet: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            template_source: template_source.into(),
            stylesheet: stylesheet.into(),
        }
    }
}

/// Values substituted into the page template.
///
/// The slot set is closed: templates see exactly `Content` and `Css`, both plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlots {
    /// HTML fragment rendered from the document body.
    #[serde(rename = "Content")]
    pub content: String,
    /// Stylesheet text, verbatim.
    #[serde(rename = "Css")]
    pub css: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_serialize_under_template_names() {
        let slots = PageSlots {
            content: "<p>hi</p>".to_string(),
            css: "body{}".to_string(),
        };
        let context = tera::Context::from_serialize(&slots).expect("slots serialize");
        let json = context.into_json();

        let object = json.as_object().expect("context is an object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["Content"], "<p>hi</p>");
        assert_eq!(object["Css"], "body{}");
    }
}
