//! Document serialization, minified or pretty.

use crate::engine::ast::{Elem, SvgDocument, XmlNode};
use crate::optimizer::OutputStyle;

/// Serialize a document per the requested output style.
pub fn serialize(doc: &SvgDocument, style: OutputStyle) -> String {
    let mut out = String::new();
    let newline = !matches!(style, OutputStyle::Minified);

    if let Some(decl) = &doc.xml_decl {
        out.push_str("<?xml version=\"");
        out.push_str(&decl.version);
        out.push('"');
        if let Some(encoding) = &decl.encoding {
            out.push_str(" encoding=\"");
            out.push_str(encoding);
            out.push('"');
        }
        if let Some(standalone) = &decl.standalone {
            out.push_str(" standalone=\"");
            out.push_str(standalone);
            out.push('"');
        }
        out.push_str("?>");
        if newline {
            out.push('\n');
        }
    }

    if let Some(doctype) = &doc.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(doctype);
        out.push('>');
        if newline {
            out.push('\n');
        }
    }

    match style {
        OutputStyle::Minified => write_compact(&mut out, &doc.root),
        OutputStyle::Pretty { indent } => write_pretty(&mut out, &doc.root, 0, indent as usize),
    }
    out
}

fn open_tag(out: &mut String, elem: &Elem) {
    out.push('<');
    out.push_str(&elem.name);
    for attr in &elem.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_into(out, &attr.value, true);
        out.push('"');
    }
}

fn write_compact(out: &mut String, elem: &Elem) {
    open_tag(out, elem);
    if elem.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &elem.children {
        match child {
            XmlNode::Elem(e) => write_compact(out, e),
            XmlNode::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    escape_into(out, text, false);
                }
            }
            XmlNode::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            XmlNode::CData(data) => {
                out.push_str("<![CDATA[");
                out.push_str(data);
                out.push_str("]]>");
            }
            XmlNode::Pi(pi) => {
                out.push_str("<?");
                out.push_str(pi);
                out.push_str("?>");
            }
        }
    }
    out.push_str("</");
    out.push_str(&elem.name);
    out.push('>');
}

fn write_pretty(out: &mut String, elem: &Elem, depth: usize, width: usize) {
    let pad = " ".repeat(depth * width);
    out.push_str(&pad);
    open_tag(out, elem);

    if elem.children.is_empty() {
        out.push_str("/>");
        return;
    }

    // Text-only content stays on one line: <title>Logo</title>
    if elem.children.iter().all(|n| matches!(n, XmlNode::Text(_))) {
        out.push('>');
        for child in &elem.children {
            if let XmlNode::Text(text) = child {
                escape_into(out, text.trim(), false);
            }
        }
        out.push_str("</");
        out.push_str(&elem.name);
        out.push('>');
        return;
    }

    out.push('>');
    let child_pad = " ".repeat((depth + 1) * width);
    for child in &elem.children {
        match child {
            XmlNode::Elem(e) => {
                out.push('\n');
                write_pretty(out, e, depth + 1, width);
            }
            XmlNode::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    out.push('\n');
                    out.push_str(&child_pad);
                    escape_into(out, text, false);
                }
            }
            XmlNode::Comment(comment) => {
                out.push('\n');
                out.push_str(&child_pad);
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            XmlNode::CData(data) => {
                out.push('\n');
                out.push_str(&child_pad);
                out.push_str("<![CDATA[");
                out.push_str(data);
                out.push_str("]]>");
            }
            XmlNode::Pi(pi) => {
                out.push('\n');
                out.push_str(&child_pad);
                out.push_str("<?");
                out.push_str(pi);
                out.push_str("?>");
            }
        }
    }
    out.push('\n');
    out.push_str(&pad);
    out.push_str("</");
    out.push_str(&elem.name);
    out.push('>');
}

fn escape_into(out: &mut String, value: &str, quote: bool) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
