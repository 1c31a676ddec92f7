use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, FieldError, Input, Label, Spinner};
use crate::errors::FormErrors;
use crate::models::{NavItemInput, NavigationItem};
use crate::validation::validate_form;
use icons::{Search, Trash2};
use leptos::html;
use leptos::prelude::*;

/// Label/link form used for adding root items, adding children and editing.
///
/// With `item` set the form edits that item ("Zapisz"); otherwise it creates
/// a new one ("Dodaj"). The trash button cancels on the first (root) form and
/// deletes the edited item elsewhere.
#[component]
pub fn NavigationForm(
    #[prop(optional)] item: Option<NavigationItem>,
    #[prop(into)] on_submit: Callback<NavItemInput>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional)] inline: bool,
    #[prop(optional)] is_first: bool,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let is_edit = item.is_some();
    let item_id = item.as_ref().map(|n| n.id.clone());

    let label: RwSignal<String> =
        RwSignal::new(item.as_ref().map(|n| n.label.clone()).unwrap_or_default());
    let url: RwSignal<String> =
        RwSignal::new(item.as_ref().and_then(|n| n.url.clone()).unwrap_or_default());
    let errors: RwSignal<FormErrors> = RwSignal::new(FormErrors::default());

    let label_id = use_random_id_for("label");
    let url_id = use_random_id_for("url");
    let label_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the name field once the form is mounted.
    Effect::new(move |_| {
        if let Some(el) = label_ref.get() {
            let _ = el.focus();
        }
    });

    let on_submit_form = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        match validate_form(&label.get_untracked(), &url.get_untracked()) {
            Ok(input) => {
                errors.set(FormErrors::default());
                on_submit.run(input);
            }
            Err(e) => errors.set(e),
        }
    };

    let on_trash = move |_: web_sys::MouseEvent| {
        if is_first {
            if let Some(cb) = on_cancel {
                cb.run(());
            }
        } else if let (Some(cb), Some(id)) = (on_delete, item_id.clone()) {
            cb.run(id);
        }
    };
    // The trash button has nothing to do on a non-first form without an item.
    let show_trash = is_first || (is_edit && on_delete.is_some());

    let cancel_button = on_cancel.map(|cb| {
        view! {
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Default
                attr:r#type="button"
                attr:disabled=move || pending.get()
                on:click=move |_| cb.run(())
            >
                "Anuluj"
            </Button>
        }
    });

    let content = view! {
        <div class="bg-white rounded-lg border border-[#D0D5DD] flex flex-row">
            <div class="p-4 space-y-4 w-full">
                <div>
                    <Label html_for=label_id.clone()>"Nazwa"</Label>
                    <Input
                        id=label_id
                        placeholder="np. Promocje"
                        bind_value=label
                        disabled=pending
                        invalid=Signal::derive(move || errors.with(|e| e.label.is_some()))
                        node_ref=label_ref
                    />
                    {move || errors.with(|e| e.label).map(|e| view! { <FieldError>{e.to_string()}</FieldError> })}
                </div>

                <div>
                    <Label html_for=url_id.clone()>"Link"</Label>
                    <div class="relative">
                        <div class="absolute inset-y-0 left-3 flex items-center pointer-events-none">
                            <Search class="h-5 w-5 text-gray-400" />
                        </div>
                        <Input
                            id=url_id
                            r#type="url"
                            class="pl-10"
                            placeholder="Wklej lub wyszukaj"
                            bind_value=url
                            disabled=pending
                            invalid=Signal::derive(move || errors.with(|e| e.url.is_some()))
                        />
                    </div>
                    {move || errors.with(|e| e.url).map(|e| view! { <FieldError>{e.to_string()}</FieldError> })}
                </div>

                <div class="flex justify-start gap-3 pt-2">
                    {cancel_button}
                    <Button
                        variant=ButtonVariant::Accent
                        size=ButtonSize::Default
                        attr:r#type="submit"
                        attr:disabled=move || pending.get()
                    >
                        <Show when=move || pending.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {if is_edit { "Zapisz" } else { "Dodaj" }}
                    </Button>
                </div>
            </div>
            {show_trash.then(|| view! {
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="self-start p-6"
                    attr:r#type="button"
                    attr:aria-label="Usuń"
                    attr:disabled=move || pending.get()
                    on:click=on_trash
                >
                    <Trash2 class="w-[20px] h-[20px]" />
                </Button>
            })}
        </div>
    };

    if inline {
        view! {
            <form class="bg-[#F9FAFB]" on:submit=on_submit_form>
                {content}
            </form>
        }
        .into_any()
    } else {
        view! {
            <form on:submit=on_submit_form>
                <div class="bg-white rounded-lg border border-[#D0D5DD]">{content}</div>
            </form>
        }
        .into_any()
    }
}
