use crate::domain::a001_branch;
use crate::domain::a002_staff::api;
use crate::domain::a002_staff::ui::details::StaffDetails;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_staff::aggregate::{sort_for_board, Staff};
use contracts::shared::live_changes::{COLLECTION_BRANCH, COLLECTION_STAFF};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct StaffRow {
    id: String,
    name: String,
    position: String,
    branch_name: String,
    phone: String,
    sort_order: i32,
    is_active: bool,
}

impl StaffRow {
    fn new(s: Staff, branch_names: &HashMap<String, String>) -> Self {
        Self {
            id: s.to_string_id(),
            branch_name: branch_names
                .get(&s.branch_ref)
                .cloned()
                .unwrap_or_else(|| s.branch_ref.clone()),
            name: s.base.description,
            position: s.position,
            phone: s.phone.unwrap_or_default(),
            sort_order: s.sort_order,
            is_active: s.is_active,
        }
    }
}

impl Searchable for StaffRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.position, &self.branch_name, &self.phone]
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let staff = RwSignal::new(Vec::<Staff>::new());
    let branches = RwSignal::new(Vec::<Branch>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    // Пустая строка: все филиалы
    let branch_filter = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Option<String>>);

    let fetch = move || {
        let branch_id = branch_filter.get_untracked();
        spawn_local(async move {
            match a001_branch::api::fetch_all().await {
                Ok(list) => branches.set(list),
                Err(e) => error.set(Some(e)),
            }
            let loaded = if branch_id.is_empty() {
                api::fetch_all().await
            } else {
                api::fetch_by_branch(&branch_id).await
            };
            match loaded {
                Ok(mut list) => {
                    sort_for_board(&mut list);
                    staff.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();
    refetch_on_change(&[COLLECTION_STAFF, COLLECTION_BRANCH], fetch);

    Effect::new(move |prev: Option<String>| {
        let current = branch_filter.get();
        if prev.is_some_and(|p| p != current) {
            fetch();
        }
        current
    });

    let rows = Memo::new(move |_| {
        let names: HashMap<String, String> = branches.with(|list| {
            list.iter()
                .map(|b| (b.to_string_id(), b.base.description.clone()))
                .collect()
        });
        let all: Vec<StaffRow> = staff
            .get()
            .into_iter()
            .map(|s| StaffRow::new(s, &names))
            .collect();
        filter_list(all, &search.get())
    });

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Удалить мастера \"{}\"?", name)) {
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
        <PageFrame page_id="a002_staff--list" category=PAGE_CAT_LIST>
            <PageHeader title="Мастера">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")} "Новый мастер"
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
                    <StaffDetails
                        id=id
                        on_saved=move |_| { editing.set(None); fetch(); }
                        on_cancel=move |_| editing.set(None)
                    />
                })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Филиал:"</Label>
                    <Select value=branch_filter>
                        <option value="">"Все филиалы"</option>
                        {move || branches.get().into_iter().map(|b| {
                            view! { <option value=b.to_string_id()>{b.base.description.clone()}</option> }
                        }).collect_view()}
                    </Select>
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Имя, должность" />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 60px;">"№"</TableHeaderCell>
                            <TableHeaderCell>"Имя"</TableHeaderCell>
                            <TableHeaderCell>"Должность"</TableHeaderCell>
                            <TableHeaderCell>"Филиал"</TableHeaderCell>
                            <TableHeaderCell>"Телефон"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 50px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=move |row: StaffRow| {
                                let id_edit = row.id.clone();
                                let id_delete = row.id.clone();
                                let name = row.name.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{row.sort_order}</TableCell>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(id_edit.clone())));
                                            }>{row.name}</a>
                                        </TableCell>
                                        <TableCell>{row.position}</TableCell>
                                        <TableCell>{row.branch_name}</TableCell>
                                        <TableCell>{row.phone}</TableCell>
                                        <TableCell>
                                            <span class={if row.is_active { "badge badge--success" } else { "badge badge--neutral" }}>
                                                {if row.is_active { "Работает" } else { "Не работает" }}
                                            </span>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| delete_row(id_delete.clone(), name.clone())
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
