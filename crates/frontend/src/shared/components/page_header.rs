use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page title with a live subtitle, an optional back arrow and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Hidden while empty
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Renders a back arrow before the title
    #[prop(optional)]
    on_back: Option<Callback<()>>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {on_back.map(|back| view! {
                    <button
                        class="button button--ghost page-header__back"
                        title="Back"
                        on:click=move |_| back.run(())
                    >
                        {icon("arrow-left")}
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    <Show when=move || subtitle.get().is_some_and(|s| !s.is_empty())>
                        <div class="page-header__subtitle">{move || subtitle.get().unwrap_or_default()}</div>
                    </Show>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
