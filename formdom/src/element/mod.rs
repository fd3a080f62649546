mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the element whose direct children include `id`.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let children = root.content.children();
    if children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    children.iter().find_map(|child| find_parent(child, id))
}

fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.content.children().iter().any(|c| c.id == id) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_parent_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// The element immediately following `id` under the same parent.
pub fn next_element_sibling<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let siblings = find_parent(root, id)?.content.children();
    let idx = siblings.iter().position(|c| c.id == id)?;
    siblings.get(idx + 1)
}

/// Insert `element` directly after the element `reference`.
///
/// Returns false if `reference` is not found or has no parent (the root).
pub fn insert_after(root: &mut Element, reference: &str, element: Element) -> bool {
    let Some(parent) = find_parent_mut(root, reference) else {
        return false;
    };
    let Content::Children(children) = &mut parent.content else {
        return false;
    };
    match children.iter().position(|c| c.id == reference) {
        Some(idx) => {
            children.insert(idx + 1, element);
            true
        }
        None => false,
    }
}

/// All elements below `root` in document (pre-)order. `root` itself is excluded.
pub fn descendants(root: &Element) -> Vec<&Element> {
    fn walk<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
        for child in el.content.children() {
            out.push(child);
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}
