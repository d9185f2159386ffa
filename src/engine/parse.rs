//! SVG parsing on top of quick-xml.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::engine::ast::{Attr, Elem, SvgDocument, XmlDecl, XmlNode};
use crate::error::SvgminError;

/// Parse an SVG string into a document tree.
pub fn parse_svg(source: &str) -> Result<SvgDocument, SvgminError> {
    let mut reader = Reader::from_str(source);

    let mut xml_decl = None;
    let mut doctype = None;
    // Elements currently open; a completed element attaches to the one
    // below it, or becomes the root when the stack runs empty.
    let mut open: Vec<Elem> = Vec::new();
    let mut root: Option<Elem> = None;

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                xml_decl = Some(XmlDecl {
                    version: String::from_utf8_lossy(decl.version()?.as_ref()).into_owned(),
                    encoding: decl
                        .encoding()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|e| String::from_utf8_lossy(e.as_ref()).into_owned()),
                    standalone: decl
                        .standalone()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|s| String::from_utf8_lossy(s.as_ref()).into_owned()),
                });
            }
            Event::DocType(dt) => {
                doctype = Some(String::from_utf8_lossy(&dt).into_owned());
            }
            Event::Start(start) => {
                open.push(read_elem(&start)?);
            }
            Event::Empty(start) => {
                let elem = read_elem(&start)?;
                attach(&mut open, &mut root, XmlNode::Elem(elem));
            }
            Event::End(_) => {
                let elem = open
                    .pop()
                    .ok_or_else(|| SvgminError::InvalidSvg("unbalanced closing tag".into()))?;
                attach(&mut open, &mut root, XmlNode::Elem(elem));
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if let Some(parent) = open.last_mut()
                    && (!text.trim().is_empty() || !parent.children.is_empty())
                {
                    parent.children.push(XmlNode::Text(text.into_owned()));
                }
            }
            Event::Comment(comment) => {
                // Comments before the root are dropped
                if let Some(parent) = open.last_mut() {
                    parent
                        .children
                        .push(XmlNode::Comment(String::from_utf8_lossy(&comment).into_owned()));
                }
            }
            Event::CData(data) => {
                if let Some(parent) = open.last_mut() {
                    parent
                        .children
                        .push(XmlNode::CData(String::from_utf8_lossy(&data).into_owned()));
                }
            }
            Event::PI(pi) => {
                if let Some(parent) = open.last_mut() {
                    parent
                        .children
                        .push(XmlNode::Pi(String::from_utf8_lossy(&pi).into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(SvgminError::InvalidSvg("unexpected end of file".into()));
    }
    let root = root.ok_or_else(|| SvgminError::InvalidSvg("no root element found".into()))?;

    Ok(SvgDocument {
        xml_decl,
        doctype,
        root,
    })
}

fn attach(open: &mut [Elem], root: &mut Option<Elem>, node: XmlNode) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
    } else if let XmlNode::Elem(elem) = node
        && root.is_none()
    {
        *root = Some(elem);
    }
}

fn read_elem(start: &BytesStart) -> Result<Elem, SvgminError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;
    let mut elem = Elem::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgminError::InvalidSvg(format!("invalid attribute: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        elem.attrs.push(Attr {
            name: key.to_string(),
            value: value.into_owned(),
        });
    }

    Ok(elem)
}
