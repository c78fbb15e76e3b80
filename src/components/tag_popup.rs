//! Tag Selection Popup
//!
//! Modal-style picker over the tag field's options. Works on a local
//! copy of the selection; nothing touches the board until Apply.

use leptos::prelude::*;

use crate::models::SelectOption;

/// Toggle one option key in a selection, honoring the multiplicity rule
pub fn toggle_selection(selection: &mut Vec<String>, key: &str, allow_multiple: bool) {
    if let Some(position) = selection.iter().position(|k| k == key) {
        selection.remove(position);
    } else if allow_multiple {
        selection.push(key.to_string());
    } else {
        selection.clear();
        selection.push(key.to_string());
    }
}

#[component]
pub fn TagPopup(
    options: Vec<SelectOption>,
    initial: Vec<String>,
    allow_multiple: bool,
    on_apply: Callback<Vec<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (selection, set_selection) = signal(initial);

    view! {
        <div class="kanban-tag-popup-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="kanban-tag-popup" on:click=|ev| ev.stop_propagation()>
                <div class="kanban-tag-popup-header">
                    <span class="kanban-tag-popup-title">"Select tags"</span>
                    <button
                        class="kanban-tag-popup-close"
                        on:click=move |_| on_cancel.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="kanban-tag-popup-options">
                    <For
                        each=move || options.clone()
                        key=|option| option.key.clone()
                        children=move |option| {
                            let key = option.key.clone();
                            let is_selected = {
                                let key = key.clone();
                                move || selection.get().iter().any(|k| *k == key)
                            };
                            let on_toggle = move |_| {
                                set_selection.update(|sel| {
                                    toggle_selection(sel, &key, allow_multiple)
                                });
                            };
                            view! {
                                <button
                                    class="kanban-tag-option"
                                    class=("kanban-tag-option-selected", is_selected)
                                    on:click=on_toggle
                                >
                                    {option.label.clone()}
                                </button>
                            }
                        }
                    />
                </div>
                <div class="kanban-tag-popup-footer">
                    <button
                        class="kanban-tag-popup-apply"
                        on:click=move |_| on_apply.run(selection.get_untracked())
                    >
                        "Apply"
                    </button>
                    <button
                        class="kanban-tag-popup-cancel"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_select_accumulates_and_untoggles() {
        let mut selection = Vec::new();
        toggle_selection(&mut selection, "urgent", true);
        toggle_selection(&mut selection, "blocked", true);
        assert_eq!(selection, vec!["urgent", "blocked"]);

        toggle_selection(&mut selection, "urgent", true);
        assert_eq!(selection, vec!["blocked"]);
    }

    #[test]
    fn single_select_replaces_the_previous_choice() {
        let mut selection = vec!["urgent".to_string()];
        toggle_selection(&mut selection, "blocked", false);
        assert_eq!(selection, vec!["blocked"]);

        toggle_selection(&mut selection, "blocked", false);
        assert!(selection.is_empty());
    }
}
