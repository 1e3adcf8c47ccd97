//! Ordered step inputs shared by the process create and edit pages.

use leptos::prelude::*;

pub const BLANK_STEP: &str = "Steps cannot be empty.";

/// A new step may be added only when every existing step has text.
#[must_use]
pub fn can_add_step(steps: &[String]) -> bool {
    steps.iter().all(|step| !step.trim().is_empty())
}

/// Remove step `index`, keeping at least one input on screen.
pub fn remove_step(steps: &mut Vec<String>, index: usize) {
    if index < steps.len() {
        steps.remove(index);
    }
    if steps.is_empty() {
        steps.push(String::new());
    }
}

#[component]
pub fn StepsEditor(steps: RwSignal<Vec<String>>, error: RwSignal<Option<String>>) -> impl IntoView {
    // Rows are rebuilt only when the count changes so typing keeps focus.
    let count = Memo::new(move |_| steps.with(Vec::len));
    let on_add = move |_| {
        if steps.with_untracked(|s| can_add_step(s)) {
            steps.update(|s| s.push(String::new()));
            error.set(None);
        } else {
            error.set(Some(BLANK_STEP.to_owned()));
        }
    };

    view! {
        <div class="steps-editor">
            <label class="steps-editor__label">"Steps"</label>
            {move || {
                (0..count.get())
                    .map(|index| {
                        view! {
                            <div class="steps-editor__row">
                                <input
                                    class="steps-editor__input"
                                    type="text"
                                    placeholder=format!("Step {}", index + 1)
                                    prop:value=move || steps.with(|s| s.get(index).cloned().unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        steps.update(|s| {
                                            if let Some(step) = s.get_mut(index) {
                                                *step = value;
                                            }
                                        });
                                    }
                                />
                                <button
                                    class="btn steps-editor__remove"
                                    type="button"
                                    title="Remove step"
                                    on:click=move |_| steps.update(|s| remove_step(s, index))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button class="btn steps-editor__add" type="button" on:click=on_add>
                "+ Add Step"
            </button>
        </div>
    }
}

#[cfg(test)]
#[path = "steps_editor_test.rs"]
mod steps_editor_test;
