use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "navmenu"; // Must NOT contain "/" or "-"

/// Unique DOM id for `element`, so several forms on one page keep their
/// `<label for>` pairs apart.
pub fn use_random_id_for(element: &str) -> String {
    format!("{element}_{PREFIX}_{}", generate_hash())
}

static COUNTER: AtomicUsize = AtomicUsize::new(1);

fn generate_hash() -> u64 {
    let mut hasher = DefaultHasher::new();
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    counter.hash(&mut hasher);
    hasher.finish()
}
