use crate::domain::a001_branch;
use crate::domain::a006_booking::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::booking_detail_key;
use crate::shared::browser::confirm;
use crate::shared::components::badge::Badge;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_duration, format_rub, TableCellMoney};
use crate::shared::date_utils::{format_date, parse_input_date, to_input_date, today};
use crate::shared::export::{download_text, export_file_name};
use crate::shared::form_settings;
use crate::shared::icons::icon;
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::logs;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a006_booking::aggregate::{Booking, BookingListQuery};
use contracts::domain::a006_booking::filter::BookingFilter;
use contracts::domain::common::AggregateRoot;
use contracts::enums::booking_status::BookingStatus;
use contracts::shared::live_changes::{COLLECTION_BOOKING, COLLECTION_BRANCH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Период журнала по умолчанию: сегодня и шесть дней вперёд
const DEFAULT_PERIOD_DAYS: i64 = 6;

/// Ключ сохранённого фильтра журнала
const FILTER_SETTINGS_KEY: &str = "a006_booking.list_filter";

#[derive(Clone, Debug, PartialEq)]
struct BookingRow {
    id: String,
    date: String,
    time: String,
    customer: String,
    phone: String,
    branch: String,
    staff: String,
    services: String,
    duration: i32,
    final_total: f64,
    balance: f64,
    reconciled: bool,
    payment: String,
    status: BookingStatus,
}

impl BookingRow {
    fn new(b: &Booking) -> Self {
        let totals = b.totals();
        Self {
            id: b.to_string_id(),
            date: format_date(b.booking_date),
            time: b.booking_time.clone(),
            customer: b.customer_name().to_string(),
            phone: b.customer_phone.clone().unwrap_or_default(),
            branch: b.branch_name.clone(),
            staff: b.staff_name.clone(),
            services: b.services_summary(),
            duration: b.effective_duration(),
            final_total: totals.final_total,
            balance: totals.balance(),
            reconciled: totals.is_reconciled(),
            payment: b
                .payment_method
                .map(|m| m.display_name().to_string())
                .unwrap_or_default(),
            status: b.status,
        }
    }
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn BookingList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let items = RwSignal::new(Vec::<Booking>::new());
    let branches = RwSignal::new(Vec::<Branch>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let date_from = RwSignal::new(to_input_date(today()));
    let date_to = RwSignal::new(to_input_date(
        today() + chrono::Duration::days(DEFAULT_PERIOD_DAYS),
    ));
    let branch = RwSignal::new(String::new());

    // Условия фильтра; филиал задаётся выборкой
    let show_filters = RwSignal::new(false);
    let f_staff = RwSignal::new(String::new());
    let f_customer = RwSignal::new(String::new());
    let f_time = RwSignal::new(String::new());
    let f_status = RwSignal::new(String::new());
    let f_search = RwSignal::new(String::new());

    let filter = Memo::new(move |_| BookingFilter {
        branch: None,
        staff: optional(f_staff.get()),
        date: None,
        customer: optional(f_customer.get()),
        time: optional(f_time.get()),
        status: optional(f_status.get()),
        search: optional(f_search.get()),
    });

    let query = move || BookingListQuery {
        date_from: parse_input_date(&date_from.get_untracked()),
        date_to: parse_input_date(&date_to.get_untracked()),
        branch: optional(branch.get_untracked()),
    };

    let fetch = move || {
        let q = query();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(&q).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    spawn_local(async move {
        match a001_branch::api::fetch_all().await {
            Ok(list) => branches.set(list),
            Err(e) => error.set(Some(e)),
        }
        match form_settings::load::<BookingFilter>(FILTER_SETTINGS_KEY).await {
            Ok(Some(saved)) => {
                f_staff.set(saved.staff.unwrap_or_default());
                f_customer.set(saved.customer.unwrap_or_default());
                f_time.set(saved.time.unwrap_or_default());
                f_status.set(saved.status.unwrap_or_default());
                f_search.set(saved.search.unwrap_or_default());
            }
            Ok(None) => {}
            Err(e) => log::warn!("Saved booking filter ignored: {}", e),
        }
    });

    // Смена периода или филиала перечитывает журнал
    Effect::new(move |_| {
        date_from.track();
        date_to.track();
        branch.track();
        fetch();
    });
    refetch_on_change(&[COLLECTION_BOOKING, COLLECTION_BRANCH], fetch);

    let rows = Memo::new(move |_| {
        let filter = filter.get();
        items.with(|list| {
            let mut rows: Vec<(chrono::NaiveDate, Option<i32>, BookingRow)> = filter
                .apply(list)
                .into_iter()
                .map(|b| (b.booking_date, b.start_minutes(), BookingRow::new(b)))
                .collect();
            rows.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
            rows.into_iter().map(|(_, _, row)| row).collect::<Vec<_>>()
        })
    });

    let period_total =
        Memo::new(move |_| rows.with(|r| r.iter().map(|row| row.final_total).sum::<f64>()));

    let open_details = move |id: Option<String>, customer: Option<String>| {
        let key = booking_detail_key(id.as_deref());
        let title = match customer {
            Some(name) => detail_tab_label(Booking::element_name(), &name),
            None => "Новая запись".to_string(),
        };
        tabs_store.open_tab(&key, &title);
    };

    let set_status = move |id: String, status: BookingStatus| {
        spawn_local(async move {
            match api::change_status(&id, status).await {
                Ok(updated) => {
                    error.set(None);
                    items.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|b| b.to_string_id() == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Удалить запись клиента \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let export = move || {
        let period = query();
        let filter = filter.get_untracked();
        let file_name = export_file_name(
            "bookings",
            period.date_from.map(to_input_date).as_deref(),
            period.date_to.map(to_input_date).as_deref(),
        );
        spawn_local(async move {
            match api::export_csv(&period, &filter).await {
                Ok(csv) => match download_text(&csv, &file_name, "text/csv;charset=utf-8") {
                    Ok(()) => logs::api::report("export", format!("Выгрузка журнала записей: {}", file_name)),
                    Err(e) => error.set(Some(e)),
                },
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let fill_test_data = move || {
        spawn_local(async move {
            match api::insert_test_data().await {
                Ok(()) => fetch(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let remember_filters = move || {
        let current = filter.get_untracked();
        spawn_local(async move {
            if let Err(e) = form_settings::save(FILTER_SETTINGS_KEY, &current).await {
                error.set(Some(e));
            }
        });
    };

    let reset_filters = move || {
        for s in [f_staff, f_customer, f_time, f_status, f_search] {
            s.set(String::new());
        }
    };

    view! {
        <PageFrame page_id="a006_booking--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Журнал записей"
                subtitle=Signal::derive(move || Some(format!(
                    "Записей: {}, на сумму {}",
                    rows.with(|r| r.len()),
                    format_rub(period_total.get()),
                )))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None, None)>
                    {icon("plus")} "Новая запись"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Обновить"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                    {icon("download")} "CSV"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| fill_test_data()>
                    "Тестовые данные"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox error=error />

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Период:"</Label>
                    <input type="date" class="form__input" bind:value=date_from />
                    <span>"–"</span>
                    <input type="date" class="form__input" bind:value=date_to />
                    <Label>"Филиал:"</Label>
                    <Select value=branch>
                        <option value="">"Все филиалы"</option>
                        {move || branches.get().into_iter().map(|b| view! {
                            <option value=b.to_string_id()>{b.base.description.clone()}</option>
                        }).collect_view()}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| show_filters.update(|v| *v = !*v)
                    >
                        {icon("filter")} "Фильтр"
                        {move || {
                            let count = filter.with(|f| f.active_count());
                            (count > 0).then(|| view! {
                                <span class="filter-badge">{count}</span>
                            })
                        }}
                    </Button>
                    {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                </Flex>

                <Show when=move || show_filters.get()>
                    <Card class="filter-panel">
                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                            <div class="form__group">
                                <label class="form__label">"Мастер"</label>
                                <Input value=f_staff placeholder="Имя или id" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Клиент"</label>
                                <Input value=f_customer />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Время"</label>
                                <input type="time" class="form__input" bind:value=f_time />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Статус"</label>
                                <Select value=f_status>
                                    <option value="">"Любой"</option>
                                    {BookingStatus::all().into_iter().map(|s| view! {
                                        <option value=s.code()>{s.display_name()}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Поиск"</label>
                                <Input value=f_search placeholder="Клиент, филиал, услуга" />
                            </div>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| remember_filters()>
                                {icon("save")} "Запомнить"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset_filters()>
                                {icon("x")} "Сбросить"
                            </Button>
                        </Flex>
                    </Card>
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Дата"</TableHeaderCell>
                            <TableHeaderCell>"Время"</TableHeaderCell>
                            <TableHeaderCell>"Клиент"</TableHeaderCell>
                            <TableHeaderCell>"Филиал"</TableHeaderCell>
                            <TableHeaderCell>"Мастер"</TableHeaderCell>
                            <TableHeaderCell>"Услуги"</TableHeaderCell>
                            <TableHeaderCell>"Длит."</TableHeaderCell>
                            <TableHeaderCell>"Итого"</TableHeaderCell>
                            <TableHeaderCell>"Оплата"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 60px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|row| format!("{}:{:?}:{}", row.id, row.status, row.final_total)
                            children=move |row: BookingRow| {
                                let id_open = row.id.clone();
                                let id_status = row.id.clone();
                                let id_delete = row.id.clone();
                                let name_open = row.customer.clone();
                                let name_delete = row.customer.clone();
                                let current = row.status;
                                let payment_hint = if row.reconciled {
                                    row.payment.clone()
                                } else {
                                    format!("{} (остаток {})", row.payment, format_rub(row.balance))
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{row.date}</TableCell>
                                        <TableCell>{row.time}</TableCell>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                open_details(Some(id_open.clone()), Some(name_open.clone()));
                                            }>{row.customer}</a>
                                            <div class="table__hint">{row.phone}</div>
                                        </TableCell>
                                        <TableCell>{row.branch}</TableCell>
                                        <TableCell>{row.staff}</TableCell>
                                        <TableCell>{row.services}</TableCell>
                                        <TableCell>{format_duration(row.duration)}</TableCell>
                                        <TableCellMoney value=Some(row.final_total) bold=true />
                                        <TableCell>
                                            <span class={if row.reconciled { "" } else { "text-warning" }}>
                                                {payment_hint}
                                            </span>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                                <Badge class=current.badge_class() text=current.display_name() />
                                                <select
                                                    class="form__select form__select--compact"
                                                    on:change=move |ev| {
                                                        let code = event_target_value(&ev);
                                                        if let Some(status) = BookingStatus::from_code(&code) {
                                                            if status != current {
                                                                set_status(id_status.clone(), status);
                                                            }
                                                        }
                                                    }
                                                >
                                                    {BookingStatus::all().into_iter().map(|s| view! {
                                                        <option value=s.code() selected={s == current}>
                                                            {s.display_name()}
                                                        </option>
                                                    }).collect_view()}
                                                </select>
                                            </Flex>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| delete_row(id_delete.clone(), name_delete.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_trims_and_drops_blank() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" Анна ".into()), Some("Анна".to_string()));
    }
}
