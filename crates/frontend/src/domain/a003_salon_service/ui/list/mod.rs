use crate::domain::a003_salon_service::api;
use crate::domain::a003_salon_service::ui::details::SalonServiceDetails;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_duration, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_salon_service::aggregate::SalonService;
use contracts::shared::live_changes::COLLECTION_SALON_SERVICE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct ServiceRow {
    id: String,
    description: String,
    category: String,
    price: f64,
    duration_minutes: i32,
    is_active: bool,
}

impl From<SalonService> for ServiceRow {
    fn from(s: SalonService) -> Self {
        Self {
            id: s.to_string_id(),
            description: s.base.description,
            category: s.category,
            price: s.price,
            duration_minutes: s.duration_minutes,
            is_active: s.is_active,
        }
    }
}

impl Searchable for ServiceRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.category]
    }
}

impl Sortable for ServiceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => cmp_text(&self.category, &other.category)
                .then_with(|| cmp_text(&self.description, &other.description)),
            "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
            "duration" => self.duration_minutes.cmp(&other.duration_minutes),
            _ => cmp_text(&self.description, &other.description),
        }
    }
}

#[component]
pub fn SalonServiceList() -> impl IntoView {
    let items = RwSignal::new(Vec::<ServiceRow>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("category");
    let sort_asc = RwSignal::new(true);
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
    refetch_on_change(&[COLLECTION_SALON_SERVICE], fetch);

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
        if !confirm(&format!("Удалить услугу \"{}\"?", name)) {
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
        <PageFrame page_id="a003_salon_service--list" category=PAGE_CAT_LIST>
            <PageHeader title="Услуги">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")} "Новая услуга"
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
                    <SalonServiceDetails
                        id=id
                        on_saved=move |_| { editing.set(None); fetch(); }
                        on_cancel=move |_| editing.set(None)
                    />
                })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Наименование или категория" />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header("description", "Услуга")}
                            {header("category", "Категория")}
                            {header("price", "Цена")}
                            {header("duration", "Длительность")}
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 50px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|row| row.id.clone()
                            children=move |row: ServiceRow| {
                                let id_edit = row.id.clone();
                                let id_delete = row.id.clone();
                                let name = row.description.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(id_edit.clone())));
                                            }>{row.description}</a>
                                        </TableCell>
                                        <TableCell>{row.category}</TableCell>
                                        <TableCellMoney value=Some(row.price) />
                                        <TableCell>{format_duration(row.duration_minutes)}</TableCell>
                                        <TableCell>
                                            <span class={if row.is_active { "badge badge--success" } else { "badge badge--neutral" }}>
                                                {if row.is_active { "Доступна" } else { "Скрыта" }}
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
