//! Маппинг tab.key → View. Все ключи табов собраны здесь.

use crate::dashboards::d400_schedule_board::ui::ScheduleBoardDashboard;
use crate::domain::a001_branch::ui::BranchList;
use crate::domain::a002_staff::ui::StaffList;
use crate::domain::a003_salon_service::ui::SalonServiceList;
use crate::domain::a004_product::ui::ProductList;
use crate::domain::a005_membership::ui::MembershipList;
use crate::domain::a006_booking::ui::{BookingDetails, BookingList};
use crate::domain::a007_notification::ui::NotificationTestPage;
use crate::layout::global_context::AppGlobalContext;
use crate::system::logs::ui::LogsPage;
use leptos::prelude::*;

/// Префикс ключа таба карточки записи; дальше идёт id или `new`
pub const BOOKING_DETAIL_PREFIX: &str = "a006_booking_detail_";

/// Ключ таба карточки записи
pub fn booking_detail_key(id: Option<&str>) -> String {
    format!("{}{}", BOOKING_DETAIL_PREFIX, id.unwrap_or("new"))
}

/// Рендерит контент таба по его ключу
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_branch" => view! { <BranchList /> }.into_any(),
        "a002_staff" => view! { <StaffList /> }.into_any(),
        "a003_salon_service" => view! { <SalonServiceList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_membership" => view! { <MembershipList /> }.into_any(),
        "a006_booking" => view! { <BookingList /> }.into_any(),
        k if k.starts_with(BOOKING_DETAIL_PREFIX) => {
            let id = k
                .strip_prefix(BOOKING_DETAIL_PREFIX)
                .filter(|id| *id != "new")
                .map(str::to_string);
            view! {
                <BookingDetails
                    id=id
                    tab_key=key_for_close.clone()
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "a007_notification" => view! { <NotificationTestPage /> }.into_any(),

        "d400_schedule_board" => view! { <ScheduleBoardDashboard /> }.into_any(),

        "sys_logs" => view! { <LogsPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="tabs__empty">{format!("Неизвестный раздел: {}", key)}</div> }
                .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_detail_keys() {
        assert_eq!(booking_detail_key(None), "a006_booking_detail_new");
        assert_eq!(booking_detail_key(Some("abc")), "a006_booking_detail_abc");
    }
}
