use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce: the callback fires only after the user
/// stops typing for `DEBOUNCE_MS`.
#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let handle_input = move |ev| {
        let value = event_target_value(&ev);
        set_text.set(value.clone());

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            // Only the last keystroke within the window fires.
            if text.get_untracked() == value {
                on_search.run(value);
            }
        });
    };

    let clear = move |_| {
        set_text.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=handle_input
            />
            <Show when=move || !text.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Limpar busca">
                    {"✕"}
                </button>
            </Show>
        </div>
    }
}
