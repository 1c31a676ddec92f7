mod app;
mod commit;
mod components;
mod config;
mod errors;
mod models;
mod navigation;
mod state;
mod tree;
mod validation;

pub use app::App;
pub use config::EnvConfig;
pub use errors::{FormErrors, NavError, ValidationError};
pub use models::{NavItemInput, NavItemPatch, NavigationItem};
pub use tree::{
    collect_ids, contains, count, depth_of, find_item, find_item_and_parent, insert_child,
    insert_root, move_item, remove_by_id, sibling_ids, update_by_id,
};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_env(json: &str) {
        let window = web_sys::window().expect("window");
        let value = js_sys::JSON::parse(json).expect("valid json");
        js_sys::Reflect::set(&window, &JsValue::from_str("ENV"), &value).expect("set ENV");
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_window_env() {
        set_env(r#"{"SAVE_DELAY_MS": 5, "MENU": [{"id": "a", "label": "Start"}]}"#);
        let cfg = EnvConfig::new();
        assert_eq!(cfg.save_delay_ms, 5);
        assert_eq!(cfg.menu.len(), 1);
        assert_eq!(cfg.menu[0].label, "Start");
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_env() {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(&window, &JsValue::from_str("ENV"), &JsValue::UNDEFINED)
            .expect("clear ENV");
        assert_eq!(EnvConfig::new(), EnvConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_item_ids_use_browser_randomness() {
        let a = NavigationItem::new("Aa", None);
        let b = NavigationItem::new("Bb", None);
        assert_ne!(a.id, b.id);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
