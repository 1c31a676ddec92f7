use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Input(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] disabled: MaybeProp<bool>,

    /// Marks the field as failing validation (`aria-invalid`).
    #[prop(into, optional)]
    invalid: MaybeProp<bool>,

    // Two-way binding
    //
    // NOTE: We intentionally avoid `bind:value=...` here because Leptos binding
    // APIs/macros have changed across versions. This manual wiring is stable.
    #[prop(into)] bind_value: RwSignal<String>,

    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "w-full px-3 py-2 text-base text-[#667085] border border-[#D0D5DD] rounded-lg placeholder-gray-400 shadow-[0_1px_2px_0px_rgba(16,24,40,0.05)]",
        "focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent",
        "aria-invalid:border-red-400 aria-invalid:ring-red-200",
        "disabled:cursor-not-allowed disabled:opacity-50",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value());
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            disabled=move || disabled.get().unwrap_or(false)
            aria-invalid=move || if invalid.get().unwrap_or(false) { "true" } else { "false" }
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        />
    }
    .into_any()
}
