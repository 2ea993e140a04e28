use leptos::prelude::*;

/// Application shell: top bar with the app title, content below.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    center: C,
) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header class="top-header">
                <div class="top-header__brand">
                    <span class="top-header__title">{title}</span>
                    <span class="top-header__subtitle">{subtitle}</span>
                </div>
            </header>

            <div class="app-body">
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
