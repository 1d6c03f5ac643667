use super::grid::ScheduleGrid;
use super::hours_panel::HoursPanel;
use super::summary_panel::SummaryPanel;
use crate::dashboards::d400_schedule_board::api;
use crate::domain::{a001_branch, a002_staff};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::booking_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::date_utils::{format_day_title, parse_input_date, to_input_date, today};
use crate::shared::icons::icon;
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Duration;
use contracts::dashboards::d400_schedule_board::dto::{ScheduleBoardQuery, ScheduleHoursResponse};
use contracts::dashboards::d400_schedule_board::ScheduleBoard;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_staff::aggregate::{sort_for_board, Staff};
use contracts::domain::a006_booking::aggregate::Booking;
use contracts::domain::common::AggregateRoot;
use contracts::enums::booking_status::BookingStatus;
use contracts::shared::live_changes::{
    COLLECTION_BOOKING, COLLECTION_BRANCH, COLLECTION_SETTINGS, COLLECTION_STAFF,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Расписание дня: мастера по колонкам, 15-минутные слоты по строкам
#[component]
pub fn ScheduleBoardDashboard() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let date = RwSignal::new(today());
    let branch = RwSignal::new(String::new());
    let staff_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let board = RwSignal::new(None::<ScheduleBoard>);
    let hours = RwSignal::new(None::<ScheduleHoursResponse>);
    let branches = RwSignal::new(Vec::<Branch>::new());
    let staff = RwSignal::new(Vec::<Staff>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fetch_board = move || {
        let query = ScheduleBoardQuery {
            date: Some(date.get_untracked()),
            branch: optional(branch.get_untracked()),
            staff: optional(staff_filter.get_untracked()),
            status: optional(status_filter.get_untracked()),
            search: optional(search.get_untracked()),
        };
        loading.set(true);
        spawn_local(async move {
            match api::get_board(&query).await {
                Ok(b) => {
                    board.set(Some(b));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load schedule board: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    let fetch_hours = move || {
        spawn_local(async move {
            match api::get_hours().await {
                Ok(h) => hours.set(Some(h)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let fetch_references = move || {
        spawn_local(async move {
            match a001_branch::api::fetch_all().await {
                Ok(list) => branches.set(list),
                Err(e) => error.set(Some(e)),
            }
            match a002_staff::api::fetch_all().await {
                Ok(mut list) => {
                    sort_for_board(&mut list);
                    staff.set(list);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    fetch_hours();
    fetch_references();

    Effect::new(move |_| {
        date.track();
        branch.track();
        staff_filter.track();
        status_filter.track();
        search.track();
        fetch_board();
    });

    refetch_on_change(
        &[COLLECTION_BOOKING, COLLECTION_STAFF, COLLECTION_SETTINGS],
        fetch_board,
    );
    refetch_on_change(&[COLLECTION_SETTINGS], fetch_hours);
    refetch_on_change(&[COLLECTION_BRANCH, COLLECTION_STAFF], fetch_references);

    // Смена филиала сбрасывает мастера из фильтра
    Effect::new(move |prev: Option<String>| {
        let current = branch.get();
        if prev.is_some_and(|p| p != current) {
            staff_filter.set(String::new());
        }
        current
    });

    let staff_options = move || {
        let branch_id = branch.get();
        staff.with(|list| {
            list.iter()
                .filter(|s| branch_id.is_empty() || s.branch_ref == branch_id)
                .map(|s| (s.to_string_id(), s.base.description.clone()))
                .collect::<Vec<_>>()
        })
    };

    let toggle_hour = move |hour: u32| {
        let Some(mut current) = hours.get_untracked() else {
            return;
        };
        current.mask.toggle(hour);
        let mask = current.mask.clone();
        hours.set(Some(current));
        spawn_local(async move {
            match api::save_hours(&mask).await {
                Ok(()) => fetch_board(),
                Err(e) => {
                    error.set(Some(e));
                    fetch_hours();
                }
            }
        });
    };

    let set_all_hours = move |enabled: bool| {
        let Some(range) = hours.with_untracked(|h| h.as_ref().map(|h| h.range)) else {
            return;
        };
        spawn_local(async move {
            match api::set_hours_range(range.start_hour, range.end_hour, enabled).await {
                Ok(mask) => {
                    hours.update(|h| {
                        if let Some(h) = h {
                            h.mask = mask;
                        }
                    });
                    fetch_board();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let open_booking = Callback::new(move |(id, customer): (String, String)| {
        tabs_store.open_tab(
            &booking_detail_key(Some(&id)),
            &detail_tab_label(Booking::element_name(), &customer),
        );
    });

    let shift_day = move |days: i64| date.update(|d| *d = *d + Duration::days(days));

    view! {
        <PageFrame page_id="d400_schedule_board--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Расписание"</h1>
                    <div class="page__subtitle">{move || format_day_title(date.get())}</div>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| shift_day(-1)>
                        {icon("chevron-left")}
                    </Button>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || to_input_date(date.get())
                        on:change=move |ev| {
                            if let Some(d) = parse_input_date(&event_target_value(&ev)) {
                                date.set(d);
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| shift_day(1)>
                        {icon("chevron-right")}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| date.set(today())>
                        "Сегодня"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(&booking_detail_key(None), "Новая запись")
                    >
                        {icon("plus")} "Записать"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch_board()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Филиал:"</Label>
                    <Select value=branch>
                        <option value="">"Все филиалы"</option>
                        {move || branches.get().into_iter().map(|b| view! {
                            <option value=b.to_string_id()>{b.base.description.clone()}</option>
                        }).collect_view()}
                    </Select>
                    <Label>"Мастер:"</Label>
                    <Select value=staff_filter>
                        <option value="">"Все"</option>
                        {move || staff_options().into_iter().map(|(id, name)| view! {
                            <option value=id>{name}</option>
                        }).collect_view()}
                    </Select>
                    <Label>"Статус:"</Label>
                    <Select value=status_filter>
                        <option value="">"Любой"</option>
                        {BookingStatus::all().into_iter().filter(|s| s.occupies_schedule()).map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                    <Input value=search placeholder="Клиент или услуга" />
                    {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                </Flex>

                <HoursPanel hours=hours on_toggle=toggle_hour on_bulk=set_all_hours />

                <ScheduleGrid board=board on_open=open_booking />

                <SummaryPanel board=board />
            </div>
        </PageFrame>
    }
}
