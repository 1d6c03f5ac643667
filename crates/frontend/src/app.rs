use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::live_changes::LiveChanges;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Табы и видимость панелей
    provide_context(AppGlobalContext::new());

    // Ревизии коллекций: экраны перечитывают данные после чужих изменений
    provide_context(LiveChanges::start());

    view! {
        <AppShell />
    }
}
