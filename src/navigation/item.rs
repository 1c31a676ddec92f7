use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant};
use crate::navigation::dnd::{drop_move, keyboard_move, Step, DRAG_MIME};
use crate::navigation::form::NavigationForm;
use crate::state::{NavContext, NodeMode, UiKey};
use crate::tree;
use icons::Move;
use leptos::prelude::*;

/// Left padding of a row at `depth`.
pub(crate) fn indentation_px(depth: usize) -> usize {
    if depth == 0 {
        24
    } else {
        depth * 64
    }
}

/// One menu row plus its inline forms and, recursively, its children.
#[component]
pub fn SortableItem(nav_id: String, depth: usize) -> impl IntoView {
    let state = expect_context::<NavContext>().0;
    let id_sv = StoredValue::new(nav_id);

    // Row content and child ids are tracked separately so editing a descendant
    // does not re-render this row.
    let row = Memo::new(move |_| {
        state.items.with(|items| {
            tree::find_item(items, &id_sv.get_value()).map(|n| (n.label.clone(), n.url.clone()))
        })
    });
    let child_ids = Memo::new(move |_| {
        state.items.with(|items| {
            tree::find_item(items, &id_sv.get_value())
                .map(|n| n.children.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let mode = Memo::new(move |_| state.ui.with(|ui| ui.mode_of(&id_sv.get_value())));
    let ui_key = StoredValue::new(UiKey::node(id_sv.get_value()));
    let pending =
        Signal::derive(move || state.ui.with(|ui| ui_key.with_value(|k| ui.is_pending(k))));
    let error = Signal::derive(move || state.ui.with(|ui| ui_key.with_value(|k| ui.error_of(k))));

    let set_mode = move |m: NodeMode| state.ui.update(|ui| ui.set_mode(&id_sv.get_value(), m));
    let on_delete = Callback::new(move |id: String| state.delete(id));
    let on_edit = Callback::new(move |input| state.edit(id_sv.get_value(), input));
    let on_add_child = Callback::new(move |input| state.add_child(id_sv.get_value(), input));
    let on_close = Callback::new(move |_: ()| set_mode(NodeMode::Viewing));

    let indent = indentation_px(depth);
    let row_bg = if depth > 0 { "bg-[#F9FAFB]" } else { "bg-white" };

    let row_view = move || {
        row.get().map(|(label, url)| {
            view! {
                <div
                    style=format!("padding-left: {}px", indent)
                    class=format!(
                        "group flex items-center border-b border-[#EAECF0] rounded-t-lg last:border-b-0 {row_bg}"
                    )
                    draggable="true"
                    on:dragstart=move |ev: web_sys::DragEvent| {
                        if let Some(dt) = ev.data_transfer() {
                            let _ = dt.set_data(DRAG_MIME, &id_sv.get_value());
                            dt.set_drop_effect("move");
                        }
                    }
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        if let Some(dt) = ev.data_transfer() {
                            dt.set_drop_effect("move");
                        }
                    }
                    on:drop=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();

                        let dragged = ev
                            .data_transfer()
                            .and_then(|dt| dt.get_data(DRAG_MIME).ok())
                            .unwrap_or_default();
                        if let Some((active, over)) = drop_move(&dragged, &id_sv.get_value()) {
                            state.move_item(&active, &over);
                        }
                    }
                >
                    <div class="flex flex-row py-[10px] w-full justify-between bg-white border-b-1 border-l-1 border-[#EAECF0] rounded-bl-lg">
                        <div class="flex flex-1 min-w-0 items-center pl-4">
                            <div
                                class="cursor-grab p-2.5"
                                tabindex="0"
                                role="button"
                                aria-label="Przenieś (Alt+↑ / Alt+↓)"
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    let Some(step) = Step::from_key(&ev.key(), ev.alt_key()) else {
                                        return;
                                    };
                                    ev.prevent_default();
                                    let id = id_sv.get_value();
                                    let target = state.items.with_untracked(|items| keyboard_move(items, &id, step));
                                    if let Some((active, over)) = target {
                                        state.move_item(&active, &over);
                                    }
                                }
                            >
                                <Move class="w-[16.67px] h-[16.67px] text-[#475467]" />
                            </div>
                            <div class="flex items-center min-w-0 flex-1">
                                <div class="flex flex-col items-start gap-1 min-w-0">
                                    <span class="text-sm font-semibold text-[#101828]">{label}</span>
                                    {url.map(|u| view! { <span class="text-xs text-[#475467]">{u}</span> })}
                                </div>
                            </div>
                        </div>
                        <div class="inline-flex rounded-lg border border-gray-300 mr-4 bg-white shadow-[0_1px_2px_0px_rgba(16,24,40,0.05)]">
                            <Button
                                variant=ButtonVariant::Segment
                                size=ButtonSize::Sm
                                attr:disabled=move || pending.get()
                                on:click=move |_| on_delete.run(id_sv.get_value())
                            >
                                "Usuń"
                            </Button>
                            <Button
                                variant=ButtonVariant::Segment
                                size=ButtonSize::Sm
                                attr:disabled=move || pending.get()
                                on:click=move |_| set_mode(NodeMode::Editing)
                            >
                                "Edytuj"
                            </Button>
                            <Button
                                variant=ButtonVariant::Segment
                                size=ButtonSize::Sm
                                attr:disabled=move || pending.get()
                                on:click=move |_| set_mode(NodeMode::AddingChild)
                            >
                                "Dodaj pozycję menu"
                            </Button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    let forms_view = move || match mode.get() {
        NodeMode::Viewing => ().into_view().into_any(),
        NodeMode::Editing => {
            let current = state
                .items
                .with_untracked(|items| tree::find_item(items, &id_sv.get_value()).cloned());
            view! {
                <div
                    class="border-b border-gray-100 px-5 py-6 bg-[#F9FAFB]"
                    style=format!("padding-left: {}px", indent + 24)
                >
                    {current.map(|item| view! {
                        <NavigationForm
                            item=item
                            on_submit=on_edit
                            on_cancel=on_close
                            on_delete=on_delete
                            inline=true
                            pending=pending
                        />
                    })}
                </div>
            }
            .into_any()
        }
        NodeMode::AddingChild => view! {
            <div
                class="border-b border-gray-100 px-5 py-6 bg-[#F9FAFB]"
                style=format!("padding-left: {}px", indentation_px(depth + 1))
            >
                <NavigationForm
                    on_submit=on_add_child
                    on_cancel=on_close
                    inline=true
                    pending=pending
                />
            </div>
        }
        .into_any(),
    };

    let error_view = move || {
        error.get().map(|msg| {
            view! {
                <div class="px-5 py-2" style=format!("padding-left: {}px", indent + 24)>
                    <Alert>
                        <AlertDescription>{msg}</AlertDescription>
                    </Alert>
                </div>
            }
        })
    };

    view! {
        {row_view}
        {error_view}
        {forms_view}
        <For
            each=move || child_ids.get()
            key=|id| id.clone()
            children=move |cid| view! { <SortableItem nav_id=cid depth=depth + 1 /> }
        />
    }
    .into_any()
}
