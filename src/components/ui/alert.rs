use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm text-red-700 [&_p]:leading-relaxed"}
    // Inline message under a form field.
    clx! {FieldError, p, "text-red-500 text-xs mt-1"}
}

pub use components::*;
