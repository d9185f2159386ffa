//! Document tree for the built-in engine.

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pub xml_decl: Option<XmlDecl>,
    pub doctype: Option<String>,
    pub root: Elem,
}

/// The `<?xml ...?>` declaration.
#[derive(Debug, Clone)]
pub struct XmlDecl {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

/// An element attribute. `name` is the qualified name as written, e.g.
/// `xlink:href`.
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    /// Local part of the qualified name.
    pub fn local(&self) -> &str {
        local_of(&self.name)
    }

    /// Namespace prefix, when present.
    pub fn prefix(&self) -> Option<&str> {
        prefix_of(&self.name)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub enum XmlNode {
    Elem(Elem),
    Text(String),
    Comment(String),
    CData(String),
    /// Processing instruction content, e.g. `xml-stylesheet href="..."`.
    Pi(String),
}

/// An element with its attributes and children, both in document order.
#[derive(Debug, Clone)]
pub struct Elem {
    pub name: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<XmlNode>,
}

impl Elem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn local(&self) -> &str {
        local_of(&self.name)
    }

    pub fn prefix(&self) -> Option<&str> {
        prefix_of(&self.name)
    }

    /// First attribute whose local name matches, e.g. `attr("href")` finds
    /// both `href` and `xlink:href`.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.local() == local)
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value.into();
        } else {
            self.attrs.push(Attr {
                name,
                value: value.into(),
            });
        }
    }

    /// Remove attributes by local name.
    pub fn remove_attr(&mut self, local: &str) {
        self.attrs.retain(|a| a.local() != local);
    }

    /// Child elements, skipping text and other node kinds.
    pub fn elems(&self) -> impl Iterator<Item = &Elem> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Elem(e) => Some(e),
            _ => None,
        })
    }

    pub fn elems_mut(&mut self) -> impl Iterator<Item = &mut Elem> {
        self.children.iter_mut().filter_map(|node| match node {
            XmlNode::Elem(e) => Some(e),
            _ => None,
        })
    }
}

fn local_of(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

fn prefix_of(name: &str) -> Option<&str> {
    name.split_once(':').map(|(prefix, _)| prefix)
}
