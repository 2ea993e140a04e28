use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Настройки приложения доступны всем страницам через context
    provide_context(AppConfig::load());

    view! {
        <AppRoutes />
    }
}
