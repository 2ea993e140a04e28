use crate::domain::a001_material::ui::MaterialPage;
use crate::layout::Shell;
use crate::shared::config::use_app_config;
use leptos::prelude::*;

/// Single-page app: the shell with the material selector in the center
#[component]
pub fn AppRoutes() -> impl IntoView {
    let config = use_app_config();

    view! {
        <Shell
            title=config.title.clone()
            subtitle=config.subtitle.clone()
            center=|| view! { <MaterialPage /> }.into_any()
        />
    }
}
