use leptos::prelude::*;

use crate::components::modal::Modal;

/// Side dialog for a student's note in the catalog, seeded with the current text.
#[component]
pub fn NoteDialog(
    #[prop(into)] student: String,
    initial: String,
    on_save: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(initial);

    view! {
        <Modal title=format!("Notă pentru {}", student) on_close=on_close>
            <textarea
                class="input note-input"
                rows="5"
                placeholder="Ex: A lucrat excelent la proiect, dar a întârziat 5 minute..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <div class="modal-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Anulează"</button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        on_save.run(text.get_untracked());
                        on_close.run(());
                    }
                >
                    "Salvează Nota"
                </button>
            </div>
        </Modal>
    }
}
