use crate::domain::a005_membership::api;
use crate::domain::a005_membership::ui::details::MembershipDetails;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_membership::aggregate::Membership;
use contracts::enums::membership_tier::MembershipStatus;
use contracts::shared::live_changes::COLLECTION_MEMBERSHIP;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct MembershipRow {
    id: String,
    customer: String,
    phone: String,
    tier: &'static str,
    period: String,
    visits: String,
    price: f64,
    status: MembershipStatus,
    is_frozen: bool,
}

impl MembershipRow {
    fn new(m: &Membership, on: chrono::NaiveDate) -> Self {
        let visits = match m.visits_left() {
            Some(left) => format!("{} из {} (осталось {})", m.visits_used, m.visits_total, left),
            None => format!("{} / безлимит", m.visits_used),
        };
        Self {
            id: m.to_string_id(),
            customer: m.customer_name().to_string(),
            phone: m.customer_phone.clone().unwrap_or_default(),
            tier: m.tier.display_name(),
            period: format!("{} – {}", format_date(m.start_date), format_date(m.end_date)),
            visits,
            price: m.price,
            status: m.status_on(on),
            is_frozen: m.is_frozen,
        }
    }
}

impl Searchable for MembershipRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.customer, &self.phone, self.tier]
    }
}

#[component]
pub fn MembershipList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Membership>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    // Код статуса или пустая строка
    let status_filter = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Option<String>>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();
    refetch_on_change(&[COLLECTION_MEMBERSHIP], fetch);

    let rows = Memo::new(move |_| {
        let on = today();
        let status = status_filter.get();
        let all: Vec<MembershipRow> = items.with(|list| {
            list.iter()
                .map(|m| MembershipRow::new(m, on))
                .filter(|r| status.is_empty() || r.status.code() == status)
                .collect()
        });
        filter_list(all, &search.get())
    });

    // Ответ backend заменяет строку целиком
    let replace = move |updated: Membership| {
        let id = updated.to_string_id();
        items.update(|list| {
            if let Some(slot) = list.iter_mut().find(|m| m.to_string_id() == id) {
                *slot = updated;
            }
        });
    };

    let use_visit = move |id: String| {
        spawn_local(async move {
            match api::use_visit(&id).await {
                Ok(m) => {
                    error.set(None);
                    replace(m);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let toggle_freeze = move |id: String, frozen: bool| {
        spawn_local(async move {
            match api::set_frozen(&id, frozen).await {
                Ok(m) => {
                    error.set(None);
                    replace(m);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Удалить абонемент клиента \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
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

    view! {
        <PageFrame page_id="a005_membership--list" category=PAGE_CAT_LIST>
            <PageHeader title="Абонементы">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")} "Новый абонемент"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Обновить"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| fill_test_data()>
                    "Тестовые данные"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox error=error />

                {move || editing.get().map(|id| view! {
                    <MembershipDetails
                        id=id
                        on_saved=move |_| { editing.set(None); fetch(); }
                        on_cancel=move |_| editing.set(None)
                    />
                })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Статус:"</Label>
                    <Select value=status_filter>
                        <option value="">"Все"</option>
                        {MembershipStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </Select>
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Клиент или телефон" />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Клиент"</TableHeaderCell>
                            <TableHeaderCell>"Телефон"</TableHeaderCell>
                            <TableHeaderCell>"Уровень"</TableHeaderCell>
                            <TableHeaderCell>"Период"</TableHeaderCell>
                            <TableHeaderCell>"Посещения"</TableHeaderCell>
                            <TableHeaderCell>"Цена"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 260px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|row| format!("{}:{:?}:{}", row.id, row.status, row.visits)
                            children=move |row: MembershipRow| {
                                let id_edit = row.id.clone();
                                let id_visit = row.id.clone();
                                let id_freeze = row.id.clone();
                                let id_delete = row.id.clone();
                                let name = row.customer.clone();
                                let is_active = row.status == MembershipStatus::Active;
                                let frozen = row.is_frozen;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(id_edit.clone())));
                                            }>{row.customer}</a>
                                        </TableCell>
                                        <TableCell>{row.phone}</TableCell>
                                        <TableCell>{row.tier}</TableCell>
                                        <TableCell>{row.period}</TableCell>
                                        <TableCell>{row.visits}</TableCell>
                                        <TableCellMoney value=Some(row.price) />
                                        <TableCell>
                                            <span class=row.status.badge_class()>{row.status.display_name()}</span>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled={!is_active}
                                                    on_click=move |_| use_visit(id_visit.clone())
                                                >
                                                    "Списать визит"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| toggle_freeze(id_freeze.clone(), !frozen)
                                                >
                                                    {if frozen { "Разморозить" } else { "Заморозить" }}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| delete_row(id_delete.clone(), name.clone())
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </Flex>
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
