use leptos::prelude::*;

/// Чекбокс выбора строки таблицы.
///
/// Рендерит `<td>` с чекбоксом внутри; клик не всплывает до строки.
///
/// # BEM классы
/// - `.table__cell--checkbox` - td обёртка
/// - `.table__checkbox` - input элемент
#[component]
pub fn TableCheckbox(
    /// Сигнал состояния чекбокса
    checked: Signal<bool>,
    /// Callback вызывается при изменении состояния
    on_change: Callback<bool>,
    /// Accessible label, e.g. the material name
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
