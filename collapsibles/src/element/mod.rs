mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree. With duplicate IDs the first match in
/// document order wins; see [`count_elements`].
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

    for child in root.content.children_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Number of elements in the tree with the given ID.
pub fn count_elements(root: &Element, id: &str) -> usize {
    let own = usize::from(root.id == id);
    own + root
        .content
        .children()
        .iter()
        .map(|child| count_elements(child, id))
        .sum::<usize>()
}

/// Collect every element carrying `class`, in document order (pre-order,
/// root included).
pub fn elements_with_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_with_class(root, class, &mut result);
    result
}

fn collect_with_class<'a>(element: &'a Element, class: &str, result: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        result.push(element);
    }
    for child in element.content.children() {
        collect_with_class(child, class, result);
    }
}

/// ID of the element immediately following `id` under the same parent.
pub fn next_sibling_id<'a>(root: &'a Element, id: &str) -> Option<&'a str> {
    let children = root.content.children();
    if let Some(pos) = children.iter().position(|c| c.id == id) {
        return children.get(pos + 1).map(|c| c.id.as_str());
    }

    children.iter().find_map(|child| next_sibling_id(child, id))
}

/// IDs from `root` down to `id` inclusive, or `None` if `id` is not in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a str>> {
    if root.id == id {
        return Some(vec![root.id.as_str()]);
    }

    root.content.children().iter().find_map(|child| {
        let mut path = path_to(child, id)?;
        path.insert(0, root.id.as_str());
        Some(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Element {
        Element::col()
            .id("root")
            .child(Element::text("A").id("a").class("collapsible"))
            .child(
                Element::box_()
                    .id("a-body")
                    .child(Element::text("nested").id("inner").class("collapsible")),
            )
            .child(Element::text("B").id("b").class("collapsible"))
    }

    #[test]
    fn test_elements_with_class_document_order() {
        let root = page();
        let ids: Vec<&str> = elements_with_class(&root, "collapsible")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "inner", "b"]);
    }

    #[test]
    fn test_next_sibling_id() {
        let root = page();
        assert_eq!(next_sibling_id(&root, "a"), Some("a-body"));
        assert_eq!(next_sibling_id(&root, "a-body"), Some("b"));
        // Last child and only child have no next sibling
        assert_eq!(next_sibling_id(&root, "b"), None);
        assert_eq!(next_sibling_id(&root, "inner"), None);
        assert_eq!(next_sibling_id(&root, "root"), None);
    }

    #[test]
    fn test_count_elements() {
        let root = page().child(Element::text("dup").id("b"));
        assert_eq!(count_elements(&root, "a"), 1);
        assert_eq!(count_elements(&root, "b"), 2);
        assert_eq!(count_elements(&root, "missing"), 0);
    }

    #[test]
    fn test_path_to() {
        let root = page();
        assert_eq!(path_to(&root, "inner"), Some(vec!["root", "a-body", "inner"]));
        assert_eq!(path_to(&root, "root"), Some(vec!["root"]));
        assert_eq!(path_to(&root, "missing"), None);
    }

    #[test]
    fn test_find_element_mut() {
        let mut root = page();
        find_element_mut(&mut root, "inner").unwrap().scroll_height = 42;
        assert_eq!(find_element(&root, "inner").unwrap().scroll_height, 42);
        assert!(find_element(&root, "missing").is_none());
    }

    #[test]
    fn test_toggle_class() {
        let mut el = Element::box_().class("collapsible");
        assert!(el.toggle_class("collapsible-active"));
        assert!(el.has_class("collapsible-active"));
        assert!(!el.toggle_class("collapsible-active"));
        assert!(!el.has_class("collapsible-active"));
        assert!(el.has_class("collapsible"));
    }
}
