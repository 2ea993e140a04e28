/// Утилиты для списков: поиск с debounce и подсветка совпадений
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Задержка перед применением поискового запроса, мс
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Byte ranges of `text` split into (start, end, is_match) segments.
///
/// Case-insensitive. Text whose lowercase form changes byte length is
/// returned as a single unmatched segment.
pub fn match_segments(text: &str, query: &str) -> Vec<(usize, usize, bool)> {
    let needle = query.trim().to_lowercase();
    let haystack = text.to_lowercase();

    if needle.is_empty() || haystack.len() != text.len() || !haystack.contains(&needle) {
        return vec![(0, text.len(), false)];
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        if start > last_pos {
            segments.push((last_pos, start, false));
        }
        segments.push((start, end, true));
        last_pos = end;
    }
    if last_pos < text.len() {
        segments.push((last_pos, text.len(), false));
    }
    segments
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, query)
        .into_iter()
        .map(|(start, end, is_match)| {
            let part = text[start..end].to_string();
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search materials...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Внешний сброс (Clear All) должен очищать и поле ввода
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            set_input_value.set(external);
        }
    });

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Clear search"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
