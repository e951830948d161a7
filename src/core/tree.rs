//! Read-only traversal over a component forest
//!
//! All lookups walk the forest in pre-order (parents before children, siblings
//! in stored order). Ids are not unique across a forest, so `find_by_id`
//! returns the first match and callers must not assume there is only one.
//! Absence is an ordinary outcome and is returned as `None` or an empty list.

use crate::entities::component::Component;

/// Every node in the forest, pre-order
pub fn flatten(tree: &[Component]) -> Vec<&Component> {
    let mut out = Vec::new();
    for node in tree {
        collect(node, &mut out);
    }
    out
}

fn collect<'a>(node: &'a Component, out: &mut Vec<&'a Component>) {
    out.push(node);
    for child in &node.children {
        collect(child, out);
    }
}

/// Total number of nodes in the forest
pub fn count_nodes(tree: &[Component]) -> usize {
    tree.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

/// First node whose id matches, in pre-order
pub fn find_by_id<'a>(tree: &'a [Component], id: &str) -> Option<&'a Component> {
    for node in tree {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// First node whose serial number matches, in pre-order
pub fn find_by_serial<'a>(tree: &'a [Component], serial_number: &str) -> Option<&'a Component> {
    flatten(tree)
        .into_iter()
        .find(|n| n.serial_number == serial_number)
}

/// The group node(s) named `group` and everything beneath them
///
/// Each branch is searched independently, so two unrelated subtrees that are
/// both named `group` are both returned. A matched subtree is taken whole and
/// is not searched again for nested nodes of the same name.
pub fn find_all_in_group<'a>(tree: &'a [Component], group: &str) -> Vec<&'a Component> {
    let mut out = Vec::new();
    for root in find_group_roots(tree, group) {
        collect(root, &mut out);
    }
    out
}

/// Just the roots of each `group` subtree, pre-order
pub fn find_group_roots<'a>(tree: &'a [Component], group: &str) -> Vec<&'a Component> {
    topmost(tree, &|node| node.description == group)
}

/// Every node carrying `id` that is not itself inside another match, pre-order
///
/// A node reusing the id below an earlier match is part of that match's
/// subtree and is not listed again.
pub fn find_all_by_id<'a>(tree: &'a [Component], id: &str) -> Vec<&'a Component> {
    topmost(tree, &|node| node.id == *id)
}

fn topmost<'a>(
    tree: &'a [Component],
    matches: &dyn Fn(&Component) -> bool,
) -> Vec<&'a Component> {
    let mut out = Vec::new();
    for node in tree {
        if matches(node) {
            out.push(node);
        } else {
            out.extend(topmost(&node.children, matches));
        }
    }
    out
}

/// Names of all assembly groups in the forest, first-seen order, no repeats
pub fn assembly_groups(tree: &[Component]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for node in flatten(tree) {
        if node.is_assembly() && !names.contains(&node.description.as_str()) {
            names.push(&node.description);
        }
    }
    names
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::entities::component::Component;

    /// Core(Compressor(Stage1, Stage2), Shaft) + Turbine(Blade, Disk) + Starter
    pub fn sample_forest() -> Vec<Component> {
        vec![
            Component::new("1", "Core", "C-1", "SN-1").with_children(vec![
                Component::new("2", "Compressor", "CP-1", "SN-2").with_children(vec![
                    Component::new("3", "Stage 1", "ST1-1", "SN-3").with_life_limit(500.0),
                    Component::new("4", "Stage 2", "ST2-1", "SN-4"),
                ]),
                Component::new("5", "Shaft", "SH-1", "SN-5"),
            ]),
            Component::new("6", "Turbine", "T-1", "SN-6").with_children(vec![
                Component::new("7", "Blade", "B-1", "SN-7").with_life_limit(300.0),
                Component::new("8", "Disk", "D-1", "SN-8"),
            ]),
            Component::new("9", "Starter", "S-1", "SN-9"),
        ]
    }
}
