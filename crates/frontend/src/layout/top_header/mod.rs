//! Верхняя панель: переключатель меню, название, индикатор обновлений

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::live_changes::LiveChanges;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let live = leptos::context::use_context::<LiveChanges>().expect("LiveChanges not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Салон: администратор"</span>
            </div>

            <div class="top-header__actions">
                <span
                    class="top-header__status"
                    class:top-header__status--offline=move || !live.online.get()
                    title=move || if live.online.get() {
                        "Данные обновляются автоматически"
                    } else {
                        "Нет связи с сервером"
                    }
                >
                    {move || if live.online.get() { "● онлайн" } else { "● нет связи" }}
                </span>
            </div>
        </div>
    }
}
