//! Structural edits on a component forest
//!
//! Every edit borrows the input forest and returns a new one; the input is
//! never modified. Targeting an id or group that is not present is a no-op,
//! not an error.
//!
//! `replace` only ever touches the first pre-order match. `remove_by_id` strips
//! every node carrying the id, so a removal still takes effect when an id was
//! reused somewhere else in the same forest.

use tracing::debug;

use crate::entities::component::Component;

/// Replace the first node whose id matches with `replacement`
///
/// The replacement is inserted as given, including its own children.
pub fn replace(tree: &[Component], target_id: &str, replacement: &Component) -> Vec<Component> {
    let mut done = false;
    let out = replace_first(tree, target_id, replacement, &mut done);
    debug!(target_id, replaced = done, "replace");
    out
}

fn replace_first(
    tree: &[Component],
    target_id: &str,
    replacement: &Component,
    done: &mut bool,
) -> Vec<Component> {
    tree.iter()
        .map(|node| {
            if *done {
                node.clone()
            } else if node.id == *target_id {
                *done = true;
                replacement.clone()
            } else {
                Component {
                    children: replace_first(&node.children, target_id, replacement, done),
                    ..node.clone_shallow()
                }
            }
        })
        .collect()
}

/// Remove every node whose id matches, along with its subtree
pub fn remove_by_id(tree: &[Component], target_id: &str) -> Vec<Component> {
    let out = retain_nodes(tree, &|node| node.id != *target_id);
    debug!(target_id, "remove_by_id");
    out
}

/// Uproot every assembly named `group`, wherever it sits in the forest
///
/// Matching nodes are dropped with their whole subtree; the remaining nodes are
/// searched for deeper roots of the same name.
pub fn remove_group(tree: &[Component], group: &str) -> Vec<Component> {
    let out = retain_nodes(tree, &|node| node.description != group);
    debug!(group, "remove_group");
    out
}

/// Put `replacement` where the first assembly named `group` sits, at any depth
///
/// Later roots of the same name are dropped with their subtrees. The
/// replacement is not searched. A forest without the group comes back
/// unchanged.
pub fn replace_group(tree: &[Component], group: &str, replacement: &Component) -> Vec<Component> {
    let mut done = false;
    let out = replace_group_first(tree, group, replacement, &mut done);
    debug!(group, replaced = done, "replace_group");
    out
}

fn replace_group_first(
    tree: &[Component],
    group: &str,
    replacement: &Component,
    done: &mut bool,
) -> Vec<Component> {
    tree.iter()
        .filter_map(|node| {
            if node.description == group {
                if *done {
                    return None;
                }
                *done = true;
                return Some(replacement.clone());
            }
            Some(Component {
                children: replace_group_first(&node.children, group, replacement, done),
                ..node.clone_shallow()
            })
        })
        .collect()
}

fn retain_nodes(tree: &[Component], keep: &dyn Fn(&Component) -> bool) -> Vec<Component> {
    tree.iter()
        .filter(|node| keep(node))
        .map(|node| Component {
            children: retain_nodes(&node.children, keep),
            ..node.clone_shallow()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{
        count_nodes, find_all_in_group, find_by_id, fixtures::sample_forest, flatten,
    };

    #[test]
    fn test_replace_missing_id_is_identity() {
        let forest = sample_forest();
        let replacement = Component::new("X", "New", "N-1", "SN-X");
        assert_eq!(replace(&forest, "nope", &replacement), forest);
    }

    #[test]
    fn test_replace_nested_node() {
        let forest = sample_forest();
        let replacement = Component::new("41", "Stage 2", "ST2-2", "SN-41").with_hours(12.0);
        let result = replace(&forest, "4", &replacement);

        assert_eq!(find_by_id(&result, "41"), Some(&replacement));
        assert!(find_by_id(&result, "4").is_none());
        // untouched siblings and other roots are unchanged
        assert_eq!(result[0].children[1], forest[0].children[1]);
        assert_eq!(result[1], forest[1]);
        assert_eq!(result[2], forest[2]);
        // input is untouched
        assert!(find_by_id(&forest, "4").is_some());
    }

    #[test]
    fn test_replace_assembly_drops_old_children() {
        let forest = sample_forest();
        let replacement = Component::new("60", "Turbine", "T-2", "SN-60");
        let result = replace(&forest, "6", &replacement);
        assert!(find_by_id(&result, "7").is_none());
        assert_eq!(count_nodes(&result), count_nodes(&forest) - 2);
    }

    #[test]
    fn test_replace_only_first_match() {
        let forest = vec![
            Component::new("dup", "First", "F", "SN-F"),
            Component::new("dup", "Second", "S", "SN-S"),
        ];
        let replacement = Component::new("new", "Fresh", "N", "SN-N");
        let result = replace(&forest, "dup", &replacement);
        assert_eq!(result[0].description, "Fresh");
        assert_eq!(result[1].description, "Second");
    }

    #[test]
    fn test_remove_missing_id_is_identity() {
        let forest = sample_forest();
        assert_eq!(remove_by_id(&forest, "nonexistent"), forest);
    }

    #[test]
    fn test_remove_by_id_drops_subtree() {
        let forest = sample_forest();
        let result = remove_by_id(&forest, "2");
        assert_eq!(count_nodes(&result), 6);
        assert!(find_by_id(&result, "3").is_none());
        assert_eq!(result[0].children.len(), 1);
    }

    #[test]
    fn test_remove_by_id_strips_every_occurrence() {
        let forest = vec![
            Component::new("dup", "First", "F", "SN-F"),
            Component::new("r", "Root", "R", "SN-R")
                .with_children(vec![Component::new("dup", "Second", "S", "SN-S")]),
        ];
        let result = remove_by_id(&forest, "dup");
        assert_eq!(count_nodes(&result), 1);
        assert!(find_by_id(&result, "dup").is_none());
    }

    #[test]
    fn test_remove_group_totality() {
        let forest = sample_forest();
        let result = remove_group(&forest, "Turbine");
        assert!(find_all_in_group(&result, "Turbine").is_empty());
        assert_eq!(count_nodes(&result), 6);
    }

    #[test]
    fn test_remove_group_nested_root() {
        let forest = sample_forest();
        let result = remove_group(&forest, "Compressor");
        let ids: Vec<_> = flatten(&result).iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_remove_group_missing_is_identity() {
        let forest = sample_forest();
        assert_eq!(remove_group(&forest, "Afterburner"), forest);
    }

    #[test]
    fn test_replace_group_keeps_nested_slot() {
        let forest = sample_forest();
        let new = Component::new("n", "Compressor", "CP-2", "SN-NEW");
        let result = replace_group(&forest, "Compressor", &new);

        let core: Vec<_> = result[0]
            .children
            .iter()
            .map(|n| n.serial_number.as_str())
            .collect();
        assert_eq!(core, vec!["SN-NEW", "SN-5"]);
        assert_eq!(result.len(), 3);
        assert_eq!(count_nodes(&result), 7);
    }

    #[test]
    fn test_replace_group_drops_later_roots() {
        let forest = vec![
            Component::new("1", "Pump", "P-1", "SN-1"),
            Component::new("2", "Gearbox", "G-1", "SN-2")
                .with_children(vec![Component::new("3", "Pump", "P-1", "SN-3")]),
        ];
        let new = Component::new("n", "Pump", "P-2", "SN-NEW");
        let result = replace_group(&forest, "Pump", &new);
        let serials: Vec<_> = flatten(&result).iter().map(|n| n.serial_number.as_str()).collect();
        assert_eq!(serials, vec!["SN-NEW", "SN-2"]);
    }

    #[test]
    fn test_replace_group_missing_is_identity() {
        let forest = sample_forest();
        let new = Component::new("n", "Afterburner", "A-1", "SN-A");
        assert_eq!(replace_group(&forest, "Afterburner", &new), forest);
    }
}
