use crate::models::NavigationItem;
use crate::tree;
use crate::validation::{validate_label, validate_url};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// Simulated latency of the save step, in milliseconds.
    pub save_delay_ms: u32,
    /// Probability in `[0, 1]` that a save is rejected.
    pub save_failure_rate: f64,
    /// Initial menu.
    pub menu: Vec<NavigationItem>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 0,
            save_failure_rate: 0.0,
            menu: vec![],
        }
    }
}

impl EnvConfig {
    /// Read `window.ENV`, falling back to defaults for anything missing.
    ///
    /// Both `SAVE_DELAY_MS` and `save_delay_ms` spellings are accepted.
    pub fn new() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::default();
        };

        let json = js_sys::JSON::stringify(&env)
            .ok()
            .and_then(|s| s.as_string())
            .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok());

        match json {
            Some(v) => Self::from_json(&v),
            None => Self::default(),
        }
    }

    pub(crate) fn from_json(env: &serde_json::Value) -> Self {
        let mut cfg = Self::default();

        if let Some(ms) = lookup(env, "SAVE_DELAY_MS").and_then(|v| v.as_u64()) {
            cfg.save_delay_ms = ms.min(u32::MAX as u64) as u32;
        }

        if let Some(rate) = lookup(env, "SAVE_FAILURE_RATE").and_then(|v| v.as_f64()) {
            cfg.save_failure_rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
        }

        if let Some(menu) = lookup(env, "MENU") {
            match serde_json::from_value::<Vec<NavigationItem>>(menu.clone()) {
                Ok(items) => cfg.menu = sanitize_seed(items),
                Err(e) => warn!("ignoring ENV.MENU: {e}"),
            }
        }

        cfg
    }
}

fn lookup<'a>(env: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    env.get(key).or_else(|| env.get(key.to_lowercase()))
}

/// Rebuild the seed tree keeping only valid items and the first occurrence of
/// every id. A dropped item takes its subtree with it.
fn sanitize_seed(items: Vec<NavigationItem>) -> Vec<NavigationItem> {
    let mut out: Vec<NavigationItem> = vec![];
    for item in items {
        push_unique(&mut out, None, item);
    }
    out
}

fn push_unique(out: &mut Vec<NavigationItem>, parent_id: Option<&str>, mut item: NavigationItem) {
    let children = std::mem::take(&mut item.children);
    let id = item.id.clone();

    match (validate_label(&item.label), validate_url(item.url.as_deref().unwrap_or(""))) {
        (Ok(label), Ok(url)) => {
            item.label = label;
            item.url = url;
        }
        (label, url) => {
            let reason = label.err().or(url.err()).map(|e| e.to_string()).unwrap_or_default();
            warn!("ignoring menu item {id} (and its subtree): {reason}");
            return;
        }
    }

    let inserted = match parent_id {
        None => tree::insert_root(out, item),
        Some(pid) => tree::insert_child(out, pid, item),
    };
    if !inserted {
        warn!("ignoring duplicate menu id {id} (and its subtree)");
        return;
    }

    for child in children {
        push_unique(out, Some(&id), child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_env_is_empty() {
        assert_eq!(EnvConfig::from_json(&json!({})), EnvConfig::default());
    }

    #[test]
    fn test_reads_upper_and_lower_case_keys() {
        let cfg = EnvConfig::from_json(&json!({"SAVE_DELAY_MS": 250, "save_failure_rate": 0.25}));
        assert_eq!(cfg.save_delay_ms, 250);
        assert!((cfg.save_failure_rate - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let cfg = EnvConfig::from_json(&json!({"SAVE_FAILURE_RATE": 3.5}));
        assert!((cfg.save_failure_rate - 1.0).abs() < f64::EPSILON);
        let cfg = EnvConfig::from_json(&json!({"SAVE_FAILURE_RATE": -1}));
        assert_eq!(cfg.save_failure_rate, 0.0);
    }

    #[test]
    fn test_menu_seed_is_parsed() {
        let cfg = EnvConfig::from_json(&json!({
            "MENU": [
                {"id": "home", "label": "Strona główna", "url": "https://example.com"},
                {"id": "shop", "label": "Sklep", "children": [{"id": "new", "label": "Nowości"}]}
            ]
        }));
        assert_eq!(cfg.menu.len(), 2);
        assert_eq!(tree::count(&cfg.menu), 3);
        assert_eq!(cfg.menu[1].children[0].id, "new");
    }

    #[test]
    fn test_menu_seed_drops_duplicate_ids() {
        let cfg = EnvConfig::from_json(&json!({
            "MENU": [
                {"id": "a", "label": "Aa", "children": [{"id": "b", "label": "Bb"}]},
                {"id": "b", "label": "Duplicate", "children": [{"id": "c", "label": "Cc"}]},
                {"id": "d", "label": "Dd", "children": [{"id": "a", "label": "Dup"}]}
            ]
        }));
        assert_eq!(tree::collect_ids(&cfg.menu), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_menu_seed_drops_invalid_items() {
        let long = "x".repeat(51);
        let cfg = EnvConfig::from_json(&json!({
            "MENU": [
                {"id": "empty", "label": "", "children": [{"id": "orphan", "label": "Sierota"}]},
                {"id": "short", "label": "x"},
                {"id": "long", "label": long},
                {"id": "bad-url", "label": "Blog", "url": "not a url"},
                {"id": "ok", "label": "  Sklep ", "url": " ", "children": [
                    {"id": "ok-child", "label": "Nowości", "url": "https://shop.example.com/new"},
                    {"id": "bad-child", "label": "?"}
                ]}
            ]
        }));

        assert_eq!(tree::collect_ids(&cfg.menu), vec!["ok", "ok-child"]);
        assert_eq!(cfg.menu[0].label, "Sklep");
        assert!(cfg.menu[0].url.is_none());
        for id in tree::collect_ids(&cfg.menu) {
            let item = tree::find_item(&cfg.menu, &id).expect("collected id exists");
            assert!(validate_label(&item.label).is_ok());
        }
    }

    #[test]
    fn test_malformed_menu_is_ignored() {
        let cfg = EnvConfig::from_json(&json!({"MENU": {"not": "a list"}, "SAVE_DELAY_MS": 10}));
        assert!(cfg.menu.is_empty());
        assert_eq!(cfg.save_delay_ms, 10);
    }
}
