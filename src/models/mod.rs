use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Builder;

/// One entry of the navigation menu.
///
/// Each item exclusively owns its `children`; there are no back references,
/// so moving an item moves its whole subtree with it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Build a new leaf item with a freshly generated id.
    pub fn new(label: impl Into<String>, url: Option<String>) -> Self {
        Self::with_id(new_item_id(), label, url)
    }

    pub fn with_id(id: impl Into<String>, label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url,
            children: vec![],
        }
    }

    pub fn from_input(input: NavItemInput) -> Self {
        Self::new(input.label, input.url)
    }

    /// Merge an edit into this item. `id` and `children` are never touched.
    pub fn apply_patch(&mut self, patch: &NavItemPatch) {
        if let Some(label) = &patch.label {
            self.label = label.clone();
        }
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
    }
}

/// A validated form submission (`{label, url?}`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct NavItemInput {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fields to merge into an existing item.
///
/// `url: Some(None)` clears the link, `url: None` leaves it as is.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NavItemPatch {
    pub label: Option<String>,
    pub url: Option<Option<String>>,
}

impl From<NavItemInput> for NavItemPatch {
    // An edit form always carries both fields, so an empty link clears it.
    fn from(input: NavItemInput) -> Self {
        Self {
            label: Some(input.label),
            url: Some(input.url),
        }
    }
}

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(1);

/// UUID v4 string for a new item.
pub fn new_item_id() -> String {
    let mut bytes = [0u8; 16];
    if let Err(e) = getrandom::getrandom(&mut bytes) {
        warn!("random source unavailable ({e}), falling back to counter ids");
        bytes = fallback_bytes();
    }
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn fallback_bytes() -> [u8; 16] {
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut out = [0u8; 16];
    for (i, chunk) in out.chunks_mut(8).enumerate() {
        let mut hasher = DefaultHasher::new();
        (counter, i).hash(&mut hasher);
        chunk.copy_from_slice(&hasher.finish().to_le_bytes());
    }
    out
}
