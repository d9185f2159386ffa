//! Structural plugin passes.
//!
//! Each pass mirrors one plugin name from the vocabulary. The engine only
//! covers plugins expressible as structural tree edits; names that call for
//! path, style, transform, or geometry rewriting are accepted and skipped,
//! leaving them to a full optimizer bound through [`crate::Optimizer`].

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::engine::ast::{Elem, SvgDocument, XmlNode};
use crate::plugins::ActivationRecord;

const EDITOR_PREFIXES: [&str; 2] = ["sodipodi", "inkscape"];

const CONTAINERS: [&str; 7] = ["g", "defs", "symbol", "marker", "clipPath", "mask", "pattern"];

/// Apply one activation record to the document. Disabled records are
/// no-ops.
pub fn apply(doc: &mut SvgDocument, record: &ActivationRecord) {
    if !record.value.is_enabled() {
        return;
    }
    match record.name {
        "removeDoctype" => doc.doctype = None,
        "removeXMLProcInst" => doc.xml_decl = None,
        "removeComments" => remove_comments(&mut doc.root),
        "removeMetadata" => remove_named(&mut doc.root, &["metadata"]),
        "removeTitle" => remove_named(&mut doc.root, &["title"]),
        "removeDesc" => remove_named(&mut doc.root, &["desc"]),
        "removeEditorsNSData" => remove_editor_data(&mut doc.root),
        "removeEmptyAttrs" => remove_empty_attrs(&mut doc.root),
        "removeHiddenElems" => remove_hidden(&mut doc.root),
        "removeEmptyText" => remove_empty_text(&mut doc.root),
        "removeEmptyContainers" => remove_empty_containers(&mut doc.root),
        "removeXMLNS" => doc.root.remove_attr("xmlns"),
        "removeUnusedNS" => remove_unused_namespaces(&mut doc.root),
        "collapseGroups" => collapse_groups(&mut doc.root),
        "removeRasterImages" => remove_raster_images(&mut doc.root),
        "removeDimensions" => remove_dimensions(&mut doc.root),
        "removeStyleElement" => remove_named(&mut doc.root, &["style"]),
        "removeScriptElement" => remove_named(&mut doc.root, &["script"]),
        "sortAttrs" => sort_attrs(&mut doc.root),
        other => debug!(plugin = %other, "no structural pass; left to the full optimizer"),
    }
}

fn remove_comments(elem: &mut Elem) {
    elem.children.retain(|node| !matches!(node, XmlNode::Comment(_)));
    for child in elem.elems_mut() {
        remove_comments(child);
    }
}

/// Remove elements by local name, anywhere in the tree.
fn remove_named(elem: &mut Elem, names: &[&str]) {
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) => !names.contains(&e.local()),
        _ => true,
    });
    for child in elem.elems_mut() {
        remove_named(child, names);
    }
}

/// Strip editor-private elements, attributes, and namespace declarations.
fn remove_editor_data(elem: &mut Elem) {
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) => !e.prefix().is_some_and(|p| EDITOR_PREFIXES.contains(&p)),
        _ => true,
    });
    elem.attrs.retain(|attr| match attr.prefix() {
        Some("xmlns") => !EDITOR_PREFIXES.contains(&attr.local()),
        Some(prefix) => !EDITOR_PREFIXES.contains(&prefix),
        None => true,
    });
    for child in elem.elems_mut() {
        remove_editor_data(child);
    }
}

fn remove_empty_attrs(elem: &mut Elem) {
    elem.attrs.retain(|attr| !attr.value.is_empty());
    for child in elem.elems_mut() {
        remove_empty_attrs(child);
    }
}

fn remove_hidden(elem: &mut Elem) {
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) => !hidden(e),
        _ => true,
    });
    for child in elem.elems_mut() {
        remove_hidden(child);
    }
}

fn hidden(elem: &Elem) -> bool {
    if elem.attr("display") == Some("none") {
        return true;
    }
    if elem.attr("visibility") == Some("hidden") {
        return true;
    }
    if let Some(opacity) = elem.attr("opacity")
        && opacity.parse::<f64>().ok() == Some(0.0)
    {
        return true;
    }
    if let Some(style) = elem.attr("style")
        && (style.contains("display:none") || style.contains("display: none"))
    {
        return true;
    }
    false
}

/// Drop text containers with nothing to render.
fn remove_empty_text(elem: &mut Elem) {
    for child in elem.elems_mut() {
        remove_empty_text(child);
    }
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) if matches!(e.local(), "text" | "tspan") => !e.children.is_empty(),
        XmlNode::Elem(e) if e.local() == "tref" => e.attr("href").is_some(),
        _ => true,
    });
}

fn remove_empty_containers(elem: &mut Elem) {
    for child in elem.elems_mut() {
        remove_empty_containers(child);
    }
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) if CONTAINERS.contains(&e.local()) => {
            // An id keeps an otherwise-empty container referenceable
            !e.children.is_empty() || e.attr("id").is_some()
        }
        _ => true,
    });
}

fn remove_unused_namespaces(root: &mut Elem) {
    let mut used: HashSet<String> = HashSet::new();
    collect_prefixes(root, &mut used);

    root.attrs.retain(|attr| match attr.prefix() {
        Some("xmlns") => used.contains(attr.local()),
        _ => true,
    });
}

fn collect_prefixes(elem: &Elem, used: &mut HashSet<String>) {
    if let Some(prefix) = elem.prefix() {
        used.insert(prefix.to_string());
    }
    for attr in &elem.attrs {
        if let Some(prefix) = attr.prefix()
            && prefix != "xmlns"
        {
            used.insert(prefix.to_string());
        }
    }
    for child in elem.elems() {
        collect_prefixes(child, used);
    }
}

/// Splice children of attribute-less `<g>` wrappers into their parent.
fn collapse_groups(elem: &mut Elem) {
    for child in elem.elems_mut() {
        collapse_groups(child);
    }
    let mut merged = Vec::with_capacity(elem.children.len());
    for child in std::mem::take(&mut elem.children) {
        match child {
            XmlNode::Elem(e) if e.local() == "g" && e.attrs.is_empty() => {
                merged.extend(e.children);
            }
            other => merged.push(other),
        }
    }
    elem.children = merged;
}

fn remove_raster_images(elem: &mut Elem) {
    elem.children.retain(|node| match node {
        XmlNode::Elem(e) if e.local() == "image" => {
            !e.attr("href").is_some_and(raster_reference)
        }
        _ => true,
    });
    for child in elem.elems_mut() {
        remove_raster_images(child);
    }
}

fn raster_reference(href: &str) -> bool {
    let href = href.to_ascii_lowercase();
    href.ends_with(".png")
        || href.ends_with(".jpg")
        || href.ends_with(".jpeg")
        || href.ends_with(".gif")
        || href.starts_with("data:image/png")
        || href.starts_with("data:image/jpeg")
        || href.starts_with("data:image/gif")
}

/// Drop width/height from the root when a viewBox carries the geometry.
fn remove_dimensions(root: &mut Elem) {
    if root.attr("viewBox").is_some() {
        root.remove_attr("width");
        root.remove_attr("height");
    }
}

fn sort_attrs(elem: &mut Elem) {
    elem.attrs.sort_by(|a, b| {
        let a_ns = a.name.starts_with("xmlns");
        let b_ns = b.name.starts_with("xmlns");
        match (a_ns, b_ns) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    });
    for child in elem.elems_mut() {
        sort_attrs(child);
    }
}
