//! Create-story modal.
//!
//! Renders over the dashboard while the panel is open: a scrim with the
//! draft form. Cancel, the close control, and a successful submission all
//! land back on the closed state; a failed one keeps the form and shows
//! the failure inline.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::dashboard::effects::submit_draft;
use crate::dashboard::state::{parse_max_pages, CreatePanel, DraftEdit};

const TITLE_INPUT_ID: &str = "create-story-title";

#[component]
pub fn CreateStoryModal(panel: Signal<CreatePanel>) -> Element {
    let mut panel = panel;
    let mut max_pages_input = use_signal(String::new);
    let mut max_pages_error = use_signal(|| None::<&'static str>);
    let open = use_memo(move || panel.read().open);
    let navigator = navigator();

    // On open, focus the title field; on close, drop the per-open field bits
    // so a stale validation message cannot reappear next time.
    use_effect(move || {
        if open() {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(TITLE_INPUT_ID))
            {
                let _ = el.dyn_ref::<web_sys::HtmlElement>().map(|e| e.focus());
            }
        } else {
            max_pages_input.set(String::new());
            max_pages_error.set(None);
        }
    });

    if !open() {
        return rsx! {};
    }

    let draft = panel.read().draft.clone();
    let submitting = panel.read().submitting();

    let on_max_pages = move |e: FormEvent| {
        let raw = e.value();
        max_pages_input.set(raw.clone());

        if raw.trim().is_empty() {
            max_pages_error.set(None);
            panel.write().edit(DraftEdit::MaxPages(0));
            return;
        }

        match parse_max_pages(&raw) {
            Ok(pages) => {
                max_pages_error.set(None);
                panel.write().edit(DraftEdit::MaxPages(pages));
            }
            Err(message) => {
                // Draft keeps its previous valid value.
                max_pages_error.set(Some(message));
            }
        }
    };

    let on_submit = move |_| {
        if panel.read().submitting() {
            return;
        }
        spawn(async move {
            submit_draft(panel, navigator).await;
        });
    };

    rsx! {
        style { {MODAL_STYLES} }

        div {
            class: "modal-scrim",
            onclick: move |_| {
                if !panel.read().submitting() {
                    panel.write().close();
                }
            },

            div {
                class: "modal-card",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "Create New Story" }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| panel.write().close(),
                        "×"
                    }
                }

                div {
                    class: "modal-field",
                    label { r#for: TITLE_INPUT_ID, "Story Title" }
                    input {
                        id: TITLE_INPUT_ID,
                        r#type: "text",
                        placeholder: "Enter story title",
                        value: "{draft.title}",
                        oninput: move |e| panel.write().edit(DraftEdit::Title(e.value())),
                    }
                }

                div {
                    class: "modal-field",
                    label { r#for: "create-story-description", "Story Description" }
                    textarea {
                        id: "create-story-description",
                        rows: "3",
                        placeholder: "Enter story description",
                        value: "{draft.description}",
                        oninput: move |e| panel.write().edit(DraftEdit::Description(e.value())),
                    }
                }

                label {
                    class: "modal-checkbox",
                    input {
                        r#type: "checkbox",
                        checked: draft.include_image,
                        oninput: move |e| panel.write().edit(DraftEdit::IncludeImage(e.checked())),
                    }
                    span { "Include Image" }
                }

                div {
                    class: "modal-field",
                    label { r#for: "create-story-pages", "Maximum Number of Pages" }
                    input {
                        id: "create-story-pages",
                        r#type: "number",
                        min: "1",
                        placeholder: "Enter maximum pages",
                        value: "{max_pages_input}",
                        oninput: on_max_pages,
                    }
                    if let Some(message) = max_pages_error() {
                        span { class: "field-error", "{message}" }
                    }
                }

                if let Some(message) = panel.read().failure() {
                    div {
                        class: "submit-error",
                        "Could not create the story: {message}"
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "cancel-button",
                        onclick: move |_| panel.write().close(),
                        "Cancel"
                    }
                    button {
                        class: "generate-button",
                        disabled: submitting,
                        onclick: on_submit,
                        if submitting { "Generating..." } else { "Generate" }
                    }
                }
            }
        }
    }
}

const MODAL_STYLES: &str = r#"
.modal-scrim {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.modal-card {
    background: white;
    border-radius: 0.5rem;
    padding: 2rem;
    max-width: 28rem;
    width: 100%;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.25);
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}

.modal-title {
    font-size: 1.5rem;
    font-weight: 700;
    color: #1f2937;
}

.modal-close {
    background: none;
    border: none;
    font-size: 1.5rem;
    line-height: 1;
    color: #6b7280;
    cursor: pointer;
}

.modal-close:hover {
    color: #374151;
}

.modal-field {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    margin-bottom: 1rem;
}

.modal-field label {
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
}

.modal-field input,
.modal-field textarea {
    padding: 0.5rem 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    font-size: 0.9375rem;
    font-family: inherit;
    outline: none;
}

.modal-field input:focus,
.modal-field textarea:focus {
    border-color: #3b82f6;
    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.2);
}

.modal-checkbox {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
    font-size: 0.875rem;
    color: #374151;
    cursor: pointer;
}

.modal-checkbox input {
    width: 1.25rem;
    height: 1.25rem;
    accent-color: #3b82f6;
}

.field-error {
    font-size: 0.75rem;
    color: #dc2626;
}

.submit-error {
    margin-bottom: 1rem;
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    font-size: 0.875rem;
}

.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 1rem;
}

.cancel-button {
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    background: white;
    color: #374151;
    cursor: pointer;
}

.cancel-button:hover {
    background: #f9fafb;
}

.generate-button {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.375rem;
    background: #3b82f6;
    color: white;
    cursor: pointer;
}

.generate-button:hover:not(:disabled) {
    background: #2563eb;
}

.generate-button:disabled {
    background: #93c5fd;
    cursor: not-allowed;
}
"#;
