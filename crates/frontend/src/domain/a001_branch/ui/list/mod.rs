use crate::domain::a001_branch::api;
use crate::domain::a001_branch::ui::details::BranchDetails;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::shared::live_changes::COLLECTION_BRANCH;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct BranchRow {
    id: String,
    code: String,
    description: String,
    address: String,
    phone: String,
    is_active: bool,
}

impl From<Branch> for BranchRow {
    fn from(b: Branch) -> Self {
        Self {
            id: b.to_string_id(),
            code: b.base.code,
            description: b.base.description,
            address: b.address,
            phone: b.phone.unwrap_or_default(),
            is_active: b.is_active,
        }
    }
}

impl Searchable for BranchRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.code, &self.description, &self.address, &self.phone]
    }
}

impl Sortable for BranchRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => cmp_text(&self.code, &other.code),
            "address" => cmp_text(&self.address, &other.address),
            _ => cmp_text(&self.description, &other.description),
        }
    }
}

#[component]
pub fn BranchList() -> impl IntoView {
    let items = RwSignal::new(Vec::<BranchRow>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("description");
    let sort_asc = RwSignal::new(true);
    // None: форма закрыта; Some(None): новый филиал
    let editing = RwSignal::new(None::<Option<String>>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    items.set(list.into_iter().map(Into::into).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();
    refetch_on_change(&[COLLECTION_BRANCH], fetch);

    let visible = Memo::new(move |_| {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, sort_field.get(), sort_asc.get());
        rows
    });

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_asc.update(|a| *a = !*a);
        } else {
            sort_field.set(field);
            sort_asc.set(true);
        }
    };
    let header = move |field: &'static str, title: &'static str| {
        view! {
            <TableHeaderCell>
                <span class="table__sortable" on:click=move |_| toggle_sort(field)>
                    {title}
                    {move || get_sort_indicator(sort_field.get(), field, sort_asc.get())}
                </span>
            </TableHeaderCell>
        }
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Удалить филиал \"{}\"?", name)) {
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
        <PageFrame page_id="a001_branch--list" category=PAGE_CAT_LIST>
            <PageHeader title="Филиалы">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")} "Новый филиал"
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
                    <BranchDetails
                        id=id
                        on_saved=move |_| { editing.set(None); fetch(); }
                        on_cancel=move |_| editing.set(None)
                    />
                })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Наименование, адрес, телефон" />
                    <span class="page__counter">{move || format!("Всего: {}", visible.get().len())}</span>
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header("code", "Код")}
                            {header("description", "Наименование")}
                            {header("address", "Адрес")}
                            <TableHeaderCell>"Телефон"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 50px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|row| row.id.clone()
                            children=move |row: BranchRow| {
                                let id_edit = row.id.clone();
                                let id_delete = row.id.clone();
                                let name = row.description.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{row.code}</TableCell>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(id_edit.clone())));
                                            }>{row.description}</a>
                                        </TableCell>
                                        <TableCell>{row.address}</TableCell>
                                        <TableCell>{row.phone}</TableCell>
                                        <TableCell>
                                            <span class={if row.is_active { "badge badge--success" } else { "badge badge--neutral" }}>
                                                {if row.is_active { "Работает" } else { "Закрыт" }}
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
