//! Корневой layout приложения: Shell + Sidebar + Tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{TabBar, TabPage};
use crate::layout::Shell;
use leptos::prelude::*;

/// Основной layout. Синхронизирует активный таб с URL (?active=...).
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                    <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                        <div class="tabs__empty">"Выберите раздел в меню слева"</div>
                    </Show>
                }.into_any()
            }
        />
    }
}
