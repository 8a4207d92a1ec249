// src/extract/serialize.rs
// =============================================================================
// HTML serialization with two rewrites applied on the fly:
//
// - elements whose tag is in the strip list are dropped with their subtree
// - every <pre> element is replaced by its fenced code block text
//
// Walking the parsed tree and writing it back out means we never mutate the
// scraper document, so one parse can feed both extraction passes.
//
// Escaping follows the html5ever serializer so untouched markup round-trips
// the way `ElementRef::html()` would print it.
// =============================================================================

use scraper::{ElementRef, Html, Node};

use super::code::fence_pre;

// Elements that never have children or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

// Elements whose text content is written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

pub(crate) struct Serializer<'s> {
    strip: &'s [&'s str],
    out: String,
}

impl<'s> Serializer<'s> {
    pub(crate) fn new(strip: &'s [&'s str]) -> Self {
        Self {
            strip,
            out: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Writes the whole document: doctype, comments and the root element.
    pub(crate) fn document(&mut self, document: &Html) {
        for child in document.tree.root().children() {
            match child.value() {
                Node::Doctype(doctype) => {
                    self.out.push_str("<!DOCTYPE ");
                    self.out.push_str(doctype.name());
                    self.out.push('>');
                }
                Node::Comment(comment) => self.comment(comment),
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        self.element(element);
                    }
                }
                _ => {}
            }
        }
    }

    /// Writes `element` including its own start and end tags.
    pub(crate) fn element(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();

        if self.strip.iter().any(|s| *s == name) {
            return;
        }

        if name == "pre" {
            escape_text(&mut self.out, &fence_pre(element));
            return;
        }

        self.out.push('<');
        self.out.push_str(name);

        // Attribute storage order inside scraper is not guaranteed, sort so
        // re-runs produce identical bytes
        let mut attrs: Vec<(&str, &str)> = element.value().attrs().collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            escape_attr(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push('>');

        if VOID_ELEMENTS.iter().any(|v| *v == name) {
            return;
        }

        self.children(element);

        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    /// Writes the children of `element` without its own tags.
    pub(crate) fn children(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();
        let raw = RAW_TEXT_ELEMENTS.iter().any(|r| *r == name);

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    if raw {
                        self.out.push_str(text);
                    } else {
                        escape_text(&mut self.out, text);
                    }
                }
                Node::Comment(comment) => self.comment(comment),
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.element(child);
                    }
                }
                _ => {}
            }
        }
    }

    fn comment(&mut self, comment: &str) {
        self.out.push_str("<!--");
        self.out.push_str(comment);
        self.out.push_str("-->");
    }
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
