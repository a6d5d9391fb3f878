//! The document adapter: raw XML in, a traversable resource tree out.
//!
//! Parsing is a single event-driven pass over the markup in strict XML mode.
//! The adapter keeps what the conversion engine needs and nothing more: the
//! direct children of the root `<resources>` element, each with its tag,
//! `type`/`name` attributes, whitespace-normalized text, `<item>` descendant
//! texts in document order, and the trailing comment (the first comment
//! sibling after the element, skipping text siblings, stopping at the next
//! element).
//!
//! Byte and reader input is drained and decoded to UTF-8 up front (BOM
//! aware), then parsed synchronously.

use std::io::Read;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::error::Error;

/// One direct child of the root `<resources>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceElement {
    tag: String,
    type_attr: Option<String>,
    name: Option<String>,
    text: String,
    items: Vec<String>,
    comment: Option<String>,
}

impl ResourceElement {
    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `name` attribute, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The effective type: a non-empty `type` attribute wins over the tag
    /// name. `None` when neither yields a non-empty value.
    pub fn effective_type(&self) -> Option<&str> {
        match self.type_attr.as_deref() {
            Some(t) if !t.is_empty() => Some(t),
            _ if !self.tag.is_empty() => Some(&self.tag),
            _ => None,
        }
    }

    /// The element's whitespace-normalized text content, including text of
    /// descendant elements.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized text of each descendant `<item>` element, in document
    /// order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The trailing comment attached to this element, trimmed.
    pub fn trailing_comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// An ordered sequence of top-level resource elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocument {
    elements: Vec<ResourceElement>,
}

impl ResourceDocument {
    /// Parses a resource document from a string.
    ///
    /// Content outside the root `<resources>` element is ignored; malformed
    /// markup surfaces as [`Error::XmlParse`].
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(xml);

        let mut elements: Vec<ResourceElement> = Vec::new();
        let mut in_resources = false;
        // Nesting depth below <resources>; 1 = a top-level resource element.
        let mut depth = 0usize;
        let mut current: Option<ElementBuilder> = None;
        // Index of the element a trailing comment would attach to.
        let mut awaiting_comment: Option<usize> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if !in_resources {
                        if e.name().as_ref() == b"resources" {
                            in_resources = true;
                        }
                    } else {
                        depth += 1;
                        if depth == 1 {
                            awaiting_comment = None;
                            current = Some(ElementBuilder::start(&e)?);
                        } else if let Some(builder) = current.as_mut() {
                            builder.open_child(e.name().as_ref(), depth);
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    if in_resources {
                        if depth == 0 {
                            elements.push(ElementBuilder::start(&e)?.finish());
                            awaiting_comment = Some(elements.len() - 1);
                        } else if let Some(builder) = current.as_mut() {
                            builder.empty_child(e.name().as_ref());
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    if in_resources {
                        if depth == 0 {
                            // </resources>
                            in_resources = false;
                        } else {
                            if depth == 1 {
                                if let Some(builder) = current.take() {
                                    elements.push(builder.finish());
                                    awaiting_comment = Some(elements.len() - 1);
                                }
                            } else if let Some(builder) = current.as_mut() {
                                builder.close_child(depth);
                            }
                            depth -= 1;
                        }
                    }
                }
                Ok(Event::Text(t)) => {
                    if let Some(builder) = current.as_mut() {
                        let text = t.unescape().map_err(Error::XmlParse)?;
                        builder.push_text(&text);
                    }
                }
                Ok(Event::CData(c)) => {
                    if let Some(builder) = current.as_mut() {
                        let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                        builder.push_text(&text);
                    }
                }
                Ok(Event::Comment(c)) => {
                    // A comment between top-level elements trails the element
                    // before it; text siblings in between do not break the
                    // attachment, the next element does.
                    if in_resources && depth == 0 {
                        if let Some(index) = awaiting_comment.take() {
                            let comment = String::from_utf8_lossy(&c).trim().to_string();
                            elements[index].comment = Some(comment);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
        }

        Ok(Self { elements })
    }

    /// Drains a reader to memory (decoding to UTF-8), then parses it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let xml = drain_to_string(reader)?;
        Self::parse(&xml)
    }

    /// Parses byte content, decoding to UTF-8 first.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_reader(std::io::Cursor::new(bytes))
    }

    /// The top-level resource elements, in document order.
    pub fn elements(&self) -> &[ResourceElement] {
        &self.elements
    }
}

/// Drains a reader into a single UTF-8 string, honoring a BOM if present.
pub(crate) fn drain_to_string<R: Read>(reader: R) -> Result<String, Error> {
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(reader);

    let mut xml = String::new();
    decoder.read_to_string(&mut xml).map_err(Error::Io)?;
    Ok(xml)
}

/// Accumulates one top-level element across events until its end tag.
struct ElementBuilder {
    tag: String,
    type_attr: Option<String>,
    name: Option<String>,
    raw_text: String,
    items: Vec<String>,
    item_raw: String,
    item_depth: Option<usize>,
}

impl ElementBuilder {
    fn start(e: &BytesStart) -> Result<Self, Error> {
        let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let mut type_attr = None;
        let mut name = None;
        for attr in e.attributes().with_checks(false) {
            let attr = attr.map_err(|e| Error::DataMismatch(e.to_string()))?;
            match attr.key.as_ref() {
                b"name" => name = Some(attr.unescape_value()?.to_string()),
                b"type" => type_attr = Some(attr.unescape_value()?.to_string()),
                _ => {}
            }
        }

        Ok(Self {
            tag,
            type_attr,
            name,
            raw_text: String::new(),
            items: Vec::new(),
            item_raw: String::new(),
            item_depth: None,
        })
    }

    fn open_child(&mut self, name: &[u8], depth: usize) {
        if self.item_depth.is_none() && name == b"item" {
            self.item_depth = Some(depth);
            self.item_raw.clear();
        }
    }

    fn empty_child(&mut self, name: &[u8]) {
        if self.item_depth.is_none() && name == b"item" {
            self.items.push(String::new());
        }
    }

    fn close_child(&mut self, depth: usize) {
        if self.item_depth == Some(depth) {
            self.items.push(normalize_space(&self.item_raw));
            self.item_raw.clear();
            self.item_depth = None;
        }
    }

    fn push_text(&mut self, text: &str) {
        self.raw_text.push_str(text);
        if self.item_depth.is_some() {
            self.item_raw.push_str(text);
        }
    }

    fn finish(self) -> ResourceElement {
        ResourceElement {
            tag: self.tag,
            type_attr: self.type_attr,
            name: self.name,
            text: normalize_space(&self.raw_text),
            items: self.items,
            comment: None,
        }
    }
}

/// Collapses runs of whitespace into single spaces and trims both ends.
fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_elements() {
        let xml = r#"
        <resources>
            <string name="hello">Hello</string>
            <bool name="flag">true</bool>
        </resources>
        "#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements().len(), 2);

        let hello = &doc.elements()[0];
        assert_eq!(hello.tag(), "string");
        assert_eq!(hello.name(), Some("hello"));
        assert_eq!(hello.effective_type(), Some("string"));
        assert_eq!(hello.text(), "Hello");

        let flag = &doc.elements()[1];
        assert_eq!(flag.tag(), "bool");
        assert_eq!(flag.text(), "true");
    }

    #[test]
    fn test_type_attribute_overrides_tag() {
        let xml = r#"<resources><item name="x" type="integer">5</item></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].effective_type(), Some("integer"));
    }

    #[test]
    fn test_empty_type_attribute_falls_back_to_tag() {
        let xml = r#"<resources><bool name="x" type="">true</bool></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].effective_type(), Some("bool"));
    }

    #[test]
    fn test_items_in_document_order() {
        let xml = r#"
        <resources>
            <string-array name="planets">
                <item>Mercury</item>
                <item>Venus</item>
                <item/>
                <item>Earth</item>
            </string-array>
        </resources>
        "#;
        let doc = ResourceDocument::parse(xml).unwrap();
        let planets = &doc.elements()[0];
        assert_eq!(planets.items(), ["Mercury", "Venus", "", "Earth"]);
    }

    #[test]
    fn test_trailing_comment_attaches_to_previous_element() {
        let xml = concat!(
            "<resources>",
            "<string name=\"a\">A</string><!-- first -->",
            "<string name=\"b\">B</string>",
            "</resources>",
        );
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].trailing_comment(), Some("first"));
        assert_eq!(doc.elements()[1].trailing_comment(), None);
    }

    #[test]
    fn test_trailing_comment_skips_text_siblings() {
        let xml = "<resources><string name=\"a\">A</string>\n   \n<!-- doc --></resources>";
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].trailing_comment(), Some("doc"));
    }

    #[test]
    fn test_comment_before_first_element_is_ignored() {
        let xml = r#"<resources><!-- header --><string name="a">A</string></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].trailing_comment(), None);
    }

    #[test]
    fn test_only_first_comment_attaches() {
        let xml = r#"<resources><string name="a">A</string><!-- one --><!-- two --></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].trailing_comment(), Some("one"));
    }

    #[test]
    fn test_comment_inside_element_is_not_trailing() {
        let xml = r#"<resources><string name="a"><!-- inner -->A</string></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].trailing_comment(), None);
        assert_eq!(doc.elements()[0].text(), "A");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let xml = "<resources><string name=\"a\">  Hello \n\t world  </string></resources>";
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].text(), "Hello world");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<resources><string name="a">Use &lt;tag&gt; &amp; value</string></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].text(), "Use <tag> & value");
    }

    #[test]
    fn test_self_closing_element_has_empty_text() {
        let xml = r#"<resources><string name="empty"/></resources>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert_eq!(doc.elements()[0].text(), "");
        assert_eq!(doc.elements()[0].name(), Some("empty"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = r#"<resources><string name="a">A</bool></resources>"#;
        assert!(matches!(
            ResourceDocument::parse(xml),
            Err(Error::XmlParse(_))
        ));
    }

    #[test]
    fn test_non_resources_root_yields_nothing() {
        let xml = r#"<other><string name="a">A</string></other>"#;
        let doc = ResourceDocument::parse(xml).unwrap();
        assert!(doc.elements().is_empty());
    }

    #[test]
    fn test_from_bytes_with_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"<resources><string name="a">A</string></resources>"#);
        let doc = ResourceDocument::from_bytes(&bytes).unwrap();
        assert_eq!(doc.elements().len(), 1);
        assert_eq!(doc.elements()[0].text(), "A");
    }
}
