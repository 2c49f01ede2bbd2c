use std::collections::BTreeMap;
use std::fmt;

/// An HTML element produced by the build host's templating step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    pub tag_name: String,
    pub attributes: BTreeMap<String, String>,
    pub inner_html: Option<String>,
    /// Void elements (`<meta>`, `<link>`) render without a closing tag
    pub void_tag: bool,
}

impl HtmlTag {
    /// Inline `<script type="text/javascript">` element with the given body.
    pub fn inline_script(body: impl Into<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("type".to_string(), "text/javascript".to_string());

        HtmlTag {
            tag_name: "script".to_string(),
            attributes,
            inner_html: Some(body.into()),
            void_tag: false,
        }
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attribute(value))?;
        }
        write!(f, ">")?;

        if self.void_tag {
            return Ok(());
        }

        if let Some(inner) = &self.inner_html {
            write!(f, "{}", inner)?;
        }
        write!(f, "</{}>", self.tag_name)
    }
}

/// Tags the templating step is about to render, in the shape the host
/// version uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetTags {
    /// Grouped by kind; scripts are rendered where the template injects them
    Modern {
        scripts: Vec<HtmlTag>,
        styles: Vec<HtmlTag>,
        meta: Vec<HtmlTag>,
    },
    /// Grouped by placement in the document
    Legacy {
        head: Vec<HtmlTag>,
        body: Vec<HtmlTag>,
    },
}

impl AssetTags {
    pub fn modern() -> Self {
        AssetTags::Modern {
            scripts: Vec::new(),
            styles: Vec::new(),
            meta: Vec::new(),
        }
    }

    pub fn legacy() -> Self {
        AssetTags::Legacy {
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Puts a script ahead of every script already scheduled.
    pub fn prepend_script(&mut self, tag: HtmlTag) {
        match self {
            AssetTags::Modern { scripts, .. } => scripts.insert(0, tag),
            AssetTags::Legacy { body, .. } => body.insert(0, tag),
        }
    }

    /// The tags that carry scripts: `scripts` in the modern shape, `body` in
    /// the legacy one.
    pub fn scripts(&self) -> &[HtmlTag] {
        match self {
            AssetTags::Modern { scripts, .. } => scripts,
            AssetTags::Legacy { body, .. } => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_script_renders() {
        let tag = HtmlTag::inline_script("window[\"VERSION\"] = \"1.2.3\"");
        assert_eq!(
            tag.to_string(),
            "<script type=\"text/javascript\">window[\"VERSION\"] = \"1.2.3\"</script>"
        );
    }

    #[test]
    fn test_void_tag_has_no_closing_tag() {
        let mut attributes = BTreeMap::new();
        attributes.insert("charset".to_string(), "utf-8".to_string());
        let tag = HtmlTag {
            tag_name: "meta".to_string(),
            attributes,
            inner_html: None,
            void_tag: true,
        };
        assert_eq!(tag.to_string(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut tag = HtmlTag::inline_script("");
        tag.attributes
            .insert("data-v".to_string(), "a\"b&c".to_string());
        assert!(tag.to_string().contains("data-v=\"a&quot;b&amp;c\""));
    }

    #[test]
    fn test_prepend_script_modern() {
        let mut tags = AssetTags::modern();
        tags.prepend_script(HtmlTag::inline_script("second"));
        tags.prepend_script(HtmlTag::inline_script("first"));

        let bodies: Vec<_> = tags
            .scripts()
            .iter()
            .map(|t| t.inner_html.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[test]
    fn test_prepend_script_legacy_goes_to_body() {
        let mut tags = AssetTags::legacy();
        tags.prepend_script(HtmlTag::inline_script("x"));

        match &tags {
            AssetTags::Legacy { head, body } => {
                assert!(head.is_empty());
                assert_eq!(body.len(), 1);
            }
            AssetTags::Modern { .. } => panic!("shape changed"),
        }
    }
}
