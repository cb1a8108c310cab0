//! A minimal in-memory host document.
//!
//! Only what mounting needs: elements with ordered attributes, text and
//! comments, an optional doctype, and lookup by `id`. Parsing goes through
//! `quick-xml` with HTML void elements (`<meta>`, `<link>`, `<br>`, ...)
//! treated as self-closing whether or not they are written that way.
//!
//! Parsed text is kept byte for byte, so a page passed through
//! [`Document::parse`] and [`Document::to_html`] only changes where the
//! tree was edited. `<script>` and `<style>` bodies are raw text and are
//! never escaped.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn is_raw_text(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&name)
}

/// Whether `rest` (the text after an `&`) starts a character reference
/// such as `&nbsp;`, `&#169;` or `&#xA9;`.
fn starts_reference(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let body = &rest[..end];
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(digits) = body.strip_prefix('#') {
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    } else {
        body.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && body.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

/// Escapes `<` and any `&` that does not already start a character
/// reference. Attribute values also escape `"`.
fn escape_html(value: &str, attribute: bool) -> Cow<'_, str> {
    let needs_escape = |(i, c): (usize, char)| match c {
        '<' => true,
        '"' => attribute,
        '&' => !starts_reference(&value[i + 1..]),
        _ => false,
    };
    if !value.char_indices().any(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for (i, c) in value.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '"' if attribute => out.push_str("&quot;"),
            '&' if !starts_reference(&value[i + 1..]) => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Error raised when a host document cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("malformed document at byte {position}: {message}")]
    Malformed { position: u64, message: String },
    #[error("unexpected closing tag </{name}> at byte {position}")]
    UnexpectedClose { name: String, position: u64 },
    #[error("element <{name}> is never closed")]
    Unclosed { name: String },
}

/// A document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text that is escaped when written.
    Text(String),
    /// Source text written back exactly as it was read.
    Raw(String),
    Comment(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(self, classes: &str) -> Self {
        self.with_attr("class", classes)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Every class name used by this element and its descendants.
    pub fn class_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_classes(&mut names);
        names
    }

    fn collect_classes(&self, names: &mut BTreeSet<String>) {
        if let Some(classes) = self.attr("class") {
            names.extend(classes.split_whitespace().map(str::to_string));
        }
        for child in self.elements() {
            child.collect_classes(names);
        }
    }

    fn count_id(&self, id: &str) -> usize {
        usize::from(self.id() == Some(id))
            + self.elements().map(|child| child.count_id(id)).sum::<usize>()
    }

    fn find_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|child| child.find_id(id))
    }

    fn find_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(child) => child.find_id_mut(id),
            _ => None,
        })
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_html(value, true));
            out.push('"');
        }
        out.push('>');
        if is_void(&self.name) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text, false)),
            Node::Raw(raw) => out.push_str(raw),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
        }
    }
}

/// A parsed host document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub doctype: Option<String>,
    pub children: Vec<Node>,
}

impl Document {
    /// A document whose only content is `root`.
    pub fn with_root(root: Element) -> Self {
        Self {
            doctype: None,
            children: vec![Node::Element(root)],
        }
    }

    pub fn parse(html: &str) -> Result<Self, DocumentError> {
        fn html_reader(input: &str) -> Reader<&[u8]> {
            let mut reader = Reader::from_str(input);
            reader.config_mut().check_end_names = false;
            reader
        }

        // Raw text bodies are cut out of the source by hand and the reader
        // restarts after them, so `offset` maps reader positions back to `html`.
        let mut offset = 0usize;
        let mut reader = html_reader(html);

        let mut document = Document::default();
        let mut stack: Vec<Element> = Vec::new();

        fn attach(stack: &mut [Element], document: &mut Document, node: Node) {
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => document.children.push(node),
            }
        }

        loop {
            let position = (offset + reader.buffer_position() as usize) as u64;
            let event = reader.read_event().map_err(|err| DocumentError::Malformed {
                position,
                message: err.to_string(),
            })?;
            let malformed = |message: String| DocumentError::Malformed { position, message };
            match event {
                Event::Start(start) => {
                    let mut element = element_from(&start).map_err(malformed)?;
                    if is_void(&element.name) {
                        attach(&mut stack, &mut document, Node::Element(element));
                    } else if is_raw_text(&element.name) {
                        let body_start = offset + reader.buffer_position() as usize;
                        let (body, resume) = raw_text_body(&html[body_start..], &element.name)
                            .ok_or_else(|| DocumentError::Unclosed {
                                name: element.name.clone(),
                            })?;
                        if !body.is_empty() {
                            element.children.push(Node::Raw(body.to_string()));
                        }
                        attach(&mut stack, &mut document, Node::Element(element));
                        offset = body_start + resume;
                        reader = html_reader(&html[offset..]);
                    } else {
                        stack.push(element);
                    }
                }
                Event::Empty(start) => {
                    let element = element_from(&start).map_err(malformed)?;
                    attach(&mut stack, &mut document, Node::Element(element));
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                    if is_void(&name) {
                        continue;
                    }
                    match stack.pop() {
                        Some(element) if element.name == name => {
                            attach(&mut stack, &mut document, Node::Element(element));
                        }
                        _ => return Err(DocumentError::UnexpectedClose { name, position }),
                    }
                }
                Event::Text(text) => {
                    let raw = String::from_utf8_lossy(&text).into_owned();
                    attach(&mut stack, &mut document, Node::Raw(raw));
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data).into_owned();
                    attach(&mut stack, &mut document, Node::Text(text));
                }
                Event::Comment(comment) => {
                    let comment = String::from_utf8_lossy(&comment).into_owned();
                    attach(&mut stack, &mut document, Node::Comment(comment));
                }
                Event::DocType(doctype) => {
                    document.doctype =
                        Some(String::from_utf8_lossy(&doctype).trim().to_string());
                }
                Event::Decl(_) | Event::PI(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(open) = stack.pop() {
            return Err(DocumentError::Unclosed { name: open.name });
        }
        Ok(document)
    }

    /// Serializes the document as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(doctype) = &self.doctype {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push('>');
        }
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    /// Top-level elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Number of elements carrying `id`.
    pub fn count_id(&self, id: &str) -> usize {
        self.elements().map(|element| element.count_id(id)).sum()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().find_map(|element| element.find_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) => element.find_id_mut(id),
            _ => None,
        })
    }
}

/// Splits the body of a raw text element from the rest of the source.
/// Returns the body and the byte offset just past its closing tag.
fn raw_text_body<'a>(rest: &'a str, name: &str) -> Option<(&'a str, usize)> {
    let close = format!("</{}", name);
    let end = rest.to_ascii_lowercase().find(&close)?;
    let after = end + close.len();
    let gt = rest[after..].find('>')?;
    Some((&rest[..end], after + gt + 1))
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
    let mut element = Element::new(name);
    for attribute in start.html_attributes() {
        let attribute = attribute.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        // Entities quick-xml does not know (`&nbsp;`) keep their source form.
        let value = match attribute.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
        };
        element.set_attr(key, value);
    }
    Ok(element)
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(html: &str) -> Result<Self, Self::Err> {
        Self::parse(html)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <link rel="icon" href="/favicon.ico">
    <title>Signal AI - Trading Dashboard</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;

    #[test]
    fn test_parse_index() {
        let document = Document::parse(INDEX).unwrap();
        assert_eq!(document.doctype.as_deref(), Some("html"));
        let app = document.find_by_id("app").unwrap();
        assert_eq!(app.name, "div");
        assert!(app.children.is_empty());
        assert_eq!(document.count_id("app"), 1);
    }

    #[test]
    fn test_void_elements_do_not_nest() {
        let document = Document::parse(INDEX).unwrap();
        let html = document.elements().next().unwrap();
        let head = html.elements().next().unwrap();
        let names: Vec<&str> = head.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["meta", "link", "title"]);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let document = Document::parse(INDEX).unwrap();
        let html = document.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(!html.contains("</meta>"));
        assert_eq!(Document::parse(&html).unwrap(), document);
    }

    #[test]
    fn test_text_is_escaped() {
        let document = Document::with_root(Element::new("p").with_text("a < b & c"));
        assert_eq!(document.to_html(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_inline_script_and_style_are_verbatim() {
        let html = concat!(
            "<html><head><style>body > div { content: '&'; }</style></head>",
            "<body><script>if (a && b < c) { x = 'y'; }</script>",
            r#"<div id="app"></div></body></html>"#,
        );
        let document = Document::parse(html).unwrap();
        let head = document.elements().next().unwrap().elements().next().unwrap();
        let style = head.elements().next().unwrap();
        assert_eq!(
            style.children,
            vec![Node::Raw("body > div { content: '&'; }".to_string())]
        );
        assert_eq!(document.to_html(), html);
    }

    #[test]
    fn test_named_entities_survive() {
        let html = r#"<p title="a&nbsp;b">A&nbsp;B &copy; 2024 &amp; on</p>"#;
        let document = Document::parse(html).unwrap();
        let p = document.elements().next().unwrap();
        assert_eq!(p.attr("title"), Some("a&nbsp;b"));
        assert_eq!(document.to_html(), html);
    }

    #[test]
    fn test_attribute_escaping() {
        let root = Element::new("a")
            .with_attr("title", r#"say "hi" & <wave>"#)
            .with_attr("data-x", "&#169; &copy")
            .with_text("&hellip; done");
        assert_eq!(
            Document::with_root(root).to_html(),
            r#"<a title="say &quot;hi&quot; &amp; &lt;wave>" data-x="&#169; &amp;copy">&hellip; done</a>"#
        );
    }

    #[test]
    fn test_mismatched_close() {
        assert!(matches!(
            Document::parse("<div><span></div>"),
            Err(DocumentError::UnexpectedClose { .. })
        ));
        assert!(matches!(
            Document::parse("<div><span></span>"),
            Err(DocumentError::Unclosed { ref name }) if name == "div"
        ));
    }

    #[test]
    fn test_class_names_walk_tree() {
        let root = Element::new("div")
            .with_class("market-bg min-h-screen")
            .with_child(Element::new("span").with_class("signal-badge  signal-badge-bullish"));
        let names: Vec<String> = root.class_names().into_iter().collect();
        assert_eq!(
            names,
            vec!["market-bg", "min-h-screen", "signal-badge", "signal-badge-bullish"]
        );
    }
}
