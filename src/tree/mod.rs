//! Id-addressed operations over the navigation tree.
//!
//! The tree is a plain `Vec<NavigationItem>` of roots; every item owns its
//! `children`. All lookups are depth-first and scan an item's children before
//! moving on to its next sibling. Operations that reference a missing id leave
//! the tree untouched and report `false`/`None` instead of failing.

use crate::models::{NavItemPatch, NavigationItem};

/// Find the item with `id` and its immediate parent (`None` for a root item).
///
/// Returns `(None, None)` when no item matches.
pub fn find_item_and_parent<'a>(
    items: &'a [NavigationItem],
    id: &str,
) -> (Option<&'a NavigationItem>, Option<&'a NavigationItem>) {
    find_with_parent(items, id, None).unwrap_or((None, None))
}

fn find_with_parent<'a>(
    items: &'a [NavigationItem],
    id: &str,
    parent: Option<&'a NavigationItem>,
) -> Option<(Option<&'a NavigationItem>, Option<&'a NavigationItem>)> {
    for item in items {
        if item.id == id {
            return Some((Some(item), parent));
        }
        if !item.children.is_empty() {
            if let Some(found) = find_with_parent(&item.children, id, Some(item)) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_item<'a>(items: &'a [NavigationItem], id: &str) -> Option<&'a NavigationItem> {
    find_item_and_parent(items, id).0
}

pub fn contains(items: &[NavigationItem], id: &str) -> bool {
    find_item(items, id).is_some()
}

fn find_item_mut<'a>(items: &'a mut [NavigationItem], id: &str) -> Option<&'a mut NavigationItem> {
    for item in items.iter_mut() {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_item_mut(&mut item.children, id) {
            return Some(found);
        }
    }
    None
}

/// Total number of items at every depth.
pub fn count(items: &[NavigationItem]) -> usize {
    items.iter().map(|item| 1 + count(&item.children)).sum()
}

/// Ids in depth-first preorder.
pub fn collect_ids(items: &[NavigationItem]) -> Vec<String> {
    let mut out = Vec::with_capacity(count(items));
    collect_into(items, &mut out);
    out
}

fn collect_into(items: &[NavigationItem], out: &mut Vec<String>) {
    for item in items {
        out.push(item.id.clone());
        collect_into(&item.children, out);
    }
}

/// Nesting depth of `id`; roots are at depth 0.
pub fn depth_of(items: &[NavigationItem], id: &str) -> Option<usize> {
    for item in items {
        if item.id == id {
            return Some(0);
        }
        if let Some(d) = depth_of(&item.children, id) {
            return Some(d + 1);
        }
    }
    None
}

/// Previous and next sibling ids of `id` within its container.
pub fn sibling_ids(
    items: &[NavigationItem],
    id: &str,
) -> Option<(Option<String>, Option<String>)> {
    let container = match find_item_and_parent(items, id) {
        (Some(_), Some(parent)) => parent.children.as_slice(),
        (Some(_), None) => items,
        _ => return None,
    };
    let pos = container.iter().position(|item| item.id == id)?;
    let prev = pos
        .checked_sub(1)
        .and_then(|p| container.get(p))
        .map(|item| item.id.clone());
    let next = container.get(pos + 1).map(|item| item.id.clone());
    Some((prev, next))
}

/// Append `item` to the root sequence.
///
/// Refused when the id is already taken anywhere in the tree.
pub fn insert_root(items: &mut Vec<NavigationItem>, item: NavigationItem) -> bool {
    if contains(items, &item.id) {
        return false;
    }
    items.push(item);
    true
}

/// Append `item` to the children of `parent_id`, at any depth.
///
/// No-op when the parent is missing or the id is already taken.
pub fn insert_child(items: &mut [NavigationItem], parent_id: &str, item: NavigationItem) -> bool {
    if contains(items, &item.id) {
        return false;
    }
    match find_item_mut(items, parent_id) {
        Some(parent) => {
            parent.children.push(item);
            true
        }
        None => false,
    }
}

/// Merge `patch` into the item with `id`. Its id and children stay as they are.
pub fn update_by_id(items: &mut [NavigationItem], id: &str, patch: &NavItemPatch) -> bool {
    match find_item_mut(items, id) {
        Some(item) => {
            item.apply_patch(patch);
            true
        }
        None => false,
    }
}

/// Detach the item with `id` together with its subtree and hand it back.
pub fn remove_by_id(items: &mut Vec<NavigationItem>, id: &str) -> Option<NavigationItem> {
    if let Some(pos) = items.iter().position(|item| item.id == id) {
        return Some(items.remove(pos));
    }
    items
        .iter_mut()
        .find_map(|item| remove_by_id(&mut item.children, id))
}

/// Move the subtree rooted at `active_id` next to `over_id`, into whatever
/// container currently holds `over_id`.
///
/// The item lands at the index `over_id` occupied before the move, which puts
/// it before `over_id` when coming from another container or from below, and
/// after it when dragged downwards within the same container. No-op when the
/// ids are equal, either is missing, or `over_id` lives inside the moved
/// subtree.
pub fn move_item(items: &mut Vec<NavigationItem>, active_id: &str, over_id: &str) -> bool {
    if active_id == over_id {
        return false;
    }

    let (active, active_parent) = find_item_and_parent(items, active_id);
    let Some(active) = active else {
        return false;
    };
    let (over, over_parent) = find_item_and_parent(items, over_id);
    if over.is_none() || contains(&active.children, over_id) {
        return false;
    }

    let active_parent_id = active_parent.map(|p| p.id.clone());
    let over_parent_id = over_parent.map(|p| p.id.clone());
    let same_container = active_parent_id == over_parent_id;
    let active_was_before = same_container && {
        let container = container_of(items, over_parent_id.as_deref());
        let a = container.iter().position(|item| item.id == active_id);
        let o = container.iter().position(|item| item.id == over_id);
        matches!((a, o), (Some(a), Some(o)) if a < o)
    };

    let Some(moved) = remove_by_id(items, active_id) else {
        return false;
    };

    match over_parent_id.as_deref() {
        None => splice_at(items, moved, over_id, active_was_before),
        Some(pid) => match find_item_mut(items, pid) {
            Some(parent) => splice_at(&mut parent.children, moved, over_id, active_was_before),
            // The parent is never inside the moved subtree; keep the item regardless.
            None => items.push(moved),
        },
    }
    true
}

fn splice_at(container: &mut Vec<NavigationItem>, moved: NavigationItem, over_id: &str, after: bool) {
    let index = match container.iter().position(|item| item.id == over_id) {
        Some(pos) if after => pos + 1,
        Some(pos) => pos,
        None => container.len(),
    };
    container.insert(index, moved);
}

fn container_of<'a>(items: &'a [NavigationItem], parent_id: Option<&str>) -> &'a [NavigationItem] {
    match parent_id.and_then(|pid| find_item(items, pid)) {
        Some(parent) => parent.children.as_slice(),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn item(id: &str) -> NavigationItem {
        NavigationItem::with_id(id, format!("Item {id}"), None)
    }

    fn with_children(id: &str, children: Vec<NavigationItem>) -> NavigationItem {
        let mut n = item(id);
        n.children = children;
        n
    }

    fn ids(items: &[NavigationItem]) -> Vec<&str> {
        items.iter().map(|n| n.id.as_str()).collect()
    }

    /// a
    /// ├─ a1
    /// │  └─ a1x
    /// └─ a2
    /// b
    /// c
    fn sample() -> Vec<NavigationItem> {
        vec![
            with_children("a", vec![with_children("a1", vec![item("a1x")]), item("a2")]),
            item("b"),
            item("c"),
        ]
    }

    #[test]
    fn test_find_root_has_no_parent() {
        let tree = sample();
        let (found, parent) = find_item_and_parent(&tree, "b");
        assert_eq!(found.map(|n| n.id.as_str()), Some("b"));
        assert!(parent.is_none());
    }

    #[test]
    fn test_find_nested_returns_immediate_parent() {
        let tree = sample();
        let (found, parent) = find_item_and_parent(&tree, "a1x");
        assert_eq!(found.map(|n| n.id.as_str()), Some("a1x"));
        assert_eq!(parent.map(|n| n.id.as_str()), Some("a1"));
    }

    #[test]
    fn test_find_missing_returns_none_pair() {
        let tree = sample();
        let (found, parent) = find_item_and_parent(&tree, "zzz");
        assert!(found.is_none());
        assert!(parent.is_none());
    }

    #[test]
    fn test_collect_ids_is_preorder() {
        assert_eq!(collect_ids(&sample()), vec!["a", "a1", "a1x", "a2", "b", "c"]);
        assert_eq!(count(&sample()), 6);
    }

    #[test]
    fn test_depth_of() {
        let tree = sample();
        assert_eq!(depth_of(&tree, "c"), Some(0));
        assert_eq!(depth_of(&tree, "a2"), Some(1));
        assert_eq!(depth_of(&tree, "a1x"), Some(2));
        assert_eq!(depth_of(&tree, "nope"), None);
    }

    #[test]
    fn test_sibling_ids() {
        let tree = sample();
        assert_eq!(
            sibling_ids(&tree, "b"),
            Some((Some("a".to_string()), Some("c".to_string())))
        );
        assert_eq!(sibling_ids(&tree, "a1"), Some((None, Some("a2".to_string()))));
        assert_eq!(sibling_ids(&tree, "a1x"), Some((None, None)));
        assert_eq!(sibling_ids(&tree, "nope"), None);
    }

    #[test]
    fn test_add_root_to_empty_tree() {
        let mut tree = vec![];
        let new = NavigationItem::new("Test Item", Some("https://test.com".to_string()));
        assert!(insert_root(&mut tree, new));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].label, "Test Item");
        assert_eq!(tree[0].url.as_deref(), Some("https://test.com"));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_insert_root_rejects_taken_id() {
        let mut tree = sample();
        assert!(!insert_root(&mut tree, item("a1x")));
        assert_eq!(count(&tree), 6);
    }

    #[test]
    fn test_add_child_under_root() {
        let mut tree = vec![item("a")];
        let child = NavigationItem::new("Child", None);
        let child_id = child.id.clone();
        assert!(insert_child(&mut tree, "a", child));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].label, "Child");

        let (found, parent) = find_item_and_parent(&tree, &child_id);
        assert_eq!(found.map(|n| n.label.as_str()), Some("Child"));
        assert_eq!(parent.map(|n| n.id.as_str()), Some("a"));
    }

    #[test]
    fn test_insert_child_deep_appends_at_end() {
        let mut tree = sample();
        assert!(insert_child(&mut tree, "a1", item("a1y")));
        assert_eq!(ids(&tree[0].children[0].children), vec!["a1x", "a1y"]);
    }

    #[test]
    fn test_insert_child_missing_parent_is_noop() {
        let mut tree = sample();
        let before = tree.clone();
        assert!(!insert_child(&mut tree, "ghost", item("new")));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_edit_label_leaves_rest_untouched() {
        let mut tree = vec![
            with_children("a", vec![item("a1")]),
            item("b"),
        ];
        tree[0].label = "Original Name".to_string();
        let before = tree.clone();

        let patch = NavItemPatch {
            label: Some("Updated Name".to_string()),
            url: None,
        };
        assert!(update_by_id(&mut tree, "a", &patch));

        assert_eq!(tree[0].label, "Updated Name");
        assert_eq!(tree[0].id, "a");
        assert_eq!(tree[0].children, before[0].children);
        assert_eq!(tree[1], before[1]);
    }

    #[test]
    fn test_update_nested_and_missing() {
        let mut tree = sample();
        let patch = NavItemPatch {
            label: None,
            url: Some(Some("https://example.com/x".to_string())),
        };
        assert!(update_by_id(&mut tree, "a1x", &patch));
        assert_eq!(
            find_item(&tree, "a1x").and_then(|n| n.url.as_deref()),
            Some("https://example.com/x")
        );

        let before = tree.clone();
        assert!(!update_by_id(&mut tree, "ghost", &patch));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_remove_drops_whole_subtree() {
        let mut tree = sample();
        let removed = remove_by_id(&mut tree, "a1").expect("a1 should be removed");
        assert_eq!(removed.children.len(), 1);

        for gone in ["a1", "a1x"] {
            let (found, parent) = find_item_and_parent(&tree, gone);
            assert!(found.is_none() && parent.is_none());
        }
        assert_eq!(collect_ids(&tree), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_remove_root_keeps_sibling_order() {
        let mut tree = sample();
        assert!(remove_by_id(&mut tree, "b").is_some());
        assert_eq!(ids(&tree), vec!["a", "c"]);
        assert!(remove_by_id(&mut tree, "b").is_none());
    }

    #[test]
    fn test_move_first_root_onto_second() {
        let mut tree = vec![item("a"), item("b")];
        assert!(move_item(&mut tree, "a", "b"));
        assert_eq!(ids(&tree), vec!["b", "a"]);
    }

    #[test]
    fn test_move_upwards_lands_before_target() {
        let mut tree = sample();
        assert!(move_item(&mut tree, "c", "a"));
        assert_eq!(ids(&tree), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let mut tree = sample();
        let before = tree.clone();
        assert!(!move_item(&mut tree, "a1", "a1"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_move_missing_ids_is_noop() {
        let mut tree = sample();
        let before = tree.clone();
        assert!(!move_item(&mut tree, "ghost", "b"));
        assert!(!move_item(&mut tree, "b", "ghost"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_move_root_into_nested_container_keeps_subtree() {
        let mut tree = sample();
        tree[1].children.push(item("b1"));

        assert!(move_item(&mut tree, "b", "a2"));

        assert_eq!(ids(&tree), vec!["a", "c"]);
        assert_eq!(ids(&tree[0].children), vec!["a1", "b", "a2"]);
        let (_, parent) = find_item_and_parent(&tree, "b1");
        assert_eq!(parent.map(|n| n.id.as_str()), Some("b"));
        assert_eq!(count(&tree), 7);
    }

    #[test]
    fn test_move_nested_out_to_root() {
        let mut tree = sample();
        assert!(move_item(&mut tree, "a1", "c"));
        assert_eq!(ids(&tree), vec!["a", "b", "a1", "c"]);
        assert_eq!(ids(&tree[0].children), vec!["a2"]);
        assert_eq!(ids(&tree[2].children), vec!["a1x"]);
    }

    #[test]
    fn test_move_onto_own_descendant_is_noop() {
        let mut tree = sample();
        let before = tree.clone();
        assert!(!move_item(&mut tree, "a", "a1x"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_move_preserves_count_for_every_pair() {
        let base = sample();
        let all = collect_ids(&base);
        for active in &all {
            for over in &all {
                let mut tree = base.clone();
                move_item(&mut tree, active, over);
                assert_eq!(count(&tree), count(&base), "{active} -> {over}");

                let unique = collect_ids(&tree).into_iter().collect::<HashSet<_>>();
                assert_eq!(unique.len(), count(&base), "{active} -> {over}");
            }
        }
    }

    #[test]
    fn test_ids_stay_unique_across_mixed_operations() {
        // Small deterministic LCG so the sequence is reproducible.
        let mut seed: u64 = 0x5eed;
        let mut next = move |n: usize| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) as usize) % n.max(1)
        };

        let mut tree: Vec<NavigationItem> = vec![];
        for step in 0..400 {
            let all = collect_ids(&tree);
            let pick = |i: usize| all.get(i).cloned().unwrap_or_default();
            match next(5) {
                0 => {
                    insert_root(&mut tree, NavigationItem::new(format!("root {step}"), None));
                }
                1 => {
                    let parent = pick(next(all.len()));
                    insert_child(&mut tree, &parent, NavigationItem::new(format!("kid {step}"), None));
                }
                2 => {
                    let id = pick(next(all.len()));
                    let patch = NavItemPatch {
                        label: Some(format!("edited {step}")),
                        url: None,
                    };
                    update_by_id(&mut tree, &id, &patch);
                }
                3 => {
                    if next(3) == 0 {
                        let id = pick(next(all.len()));
                        remove_by_id(&mut tree, &id);
                    }
                }
                _ => {
                    let before = count(&tree);
                    let a = pick(next(all.len()));
                    let b = pick(next(all.len()));
                    move_item(&mut tree, &a, &b);
                    assert_eq!(count(&tree), before);
                }
            }

            let ids = collect_ids(&tree);
            let unique = ids.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), ids.len(), "duplicate id after step {step}");
        }
    }
}
