//! Turning drag and keyboard gestures into `(active, over)` pairs for
//! [`tree::move_item`](crate::tree::move_item).

use crate::models::NavigationItem;
use crate::tree;

/// `DataTransfer` format carrying the dragged item id.
pub(crate) const DRAG_MIME: &str = "text/plain";

/// Resolve a drop of `dragged` onto `target`. `None` means "nothing to do".
pub(crate) fn drop_move(dragged: &str, target: &str) -> Option<(String, String)> {
    let dragged = dragged.trim();
    if dragged.is_empty() || dragged == target {
        return None;
    }
    Some((dragged.to_string(), target.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Up,
    Down,
}

impl Step {
    /// `Alt+ArrowUp` / `Alt+ArrowDown` on a drag handle.
    pub fn from_key(key: &str, alt: bool) -> Option<Self> {
        match (alt, key) {
            (true, "ArrowUp") => Some(Step::Up),
            (true, "ArrowDown") => Some(Step::Down),
            _ => None,
        }
    }
}

/// Move `id` one place within its container.
///
/// Moving up drops the item onto its previous sibling; moving down drops the
/// next sibling onto the item. Both keep the subtree attached.
pub(crate) fn keyboard_move(
    items: &[NavigationItem],
    id: &str,
    step: Step,
) -> Option<(String, String)> {
    let (prev, next) = tree::sibling_ids(items, id)?;
    match step {
        Step::Up => prev.map(|p| (id.to_string(), p)),
        Step::Down => next.map(|n| (n, id.to_string())),
    }
}
