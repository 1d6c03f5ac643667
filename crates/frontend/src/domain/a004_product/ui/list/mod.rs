use crate::domain::a004_product::api;
use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_product::aggregate::Product;
use contracts::shared::live_changes::COLLECTION_PRODUCT;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

/// Остаток, при котором строка подсвечивается
const LOW_STOCK: i32 = 3;

#[derive(Clone, Debug, PartialEq)]
struct ProductRow {
    id: String,
    description: String,
    category: String,
    brand: String,
    price: f64,
    stock_qty: i32,
    is_active: bool,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.to_string_id(),
            description: p.base.description,
            category: p.category,
            brand: p.brand,
            price: p.price,
            stock_qty: p.stock_qty,
            is_active: p.is_active,
        }
    }
}

impl Searchable for ProductRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.category, &self.brand]
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "brand" => cmp_text(&self.brand, &other.brand),
            "category" => cmp_text(&self.category, &other.category),
            "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
            "stock" => self.stock_qty.cmp(&other.stock_qty),
            _ => cmp_text(&self.description, &other.description),
        }
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let items = RwSignal::new(Vec::<ProductRow>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let only_in_stock = RwSignal::new(false);
    let sort_field = RwSignal::new("description");
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
    refetch_on_change(&[COLLECTION_PRODUCT], fetch);

    let visible = Memo::new(move |_| {
        let mut rows = filter_list(items.get(), &search.get());
        if only_in_stock.get() {
            rows.retain(|r| r.stock_qty > 0);
        }
        sort_list(&mut rows, sort_field.get(), sort_asc.get());
        rows
    });

    let stock_value = Memo::new(move |_| {
        items.with(|rows| rows.iter().map(|r| r.price * f64::from(r.stock_qty)).sum::<f64>())
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

    // Оптимистично меняем строку, ошибку backend показываем и перечитываем список
    let adjust = move |id: String, delta: i32| {
        spawn_local(async move {
            match api::adjust_stock(&id, delta).await {
                Ok(stock_qty) => items.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                        row.stock_qty = stock_qty;
                    }
                }),
                Err(e) => {
                    error.set(Some(e));
                    fetch();
                }
            }
        });
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Удалить товар \"{}\"?", name)) {
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
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Товары"
                subtitle=Signal::derive(move || Some(format!(
                    "Позиций: {}, запас на {} ₽",
                    items.with(|i| i.len()),
                    format_money(stock_value.get())
                )))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")} "Новый товар"
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
                    <ProductDetails
                        id=id
                        on_saved=move |_| { editing.set(None); fetch(); }
                        on_cancel=move |_| editing.set(None)
                    />
                })}

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Наименование, бренд, категория" />
                    <Checkbox checked=only_in_stock label="Только в наличии" />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header("description", "Товар")}
                            {header("brand", "Бренд")}
                            {header("category", "Категория")}
                            {header("price", "Цена")}
                            {header("stock", "Остаток")}
                            <TableHeaderCell attr:style="width: 130px;">"Движение"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 50px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|row| (row.id.clone(), row.stock_qty)
                            children=move |row: ProductRow| {
                                let id_edit = row.id.clone();
                                let id_in = row.id.clone();
                                let id_out = row.id.clone();
                                let id_delete = row.id.clone();
                                let name = row.description.clone();
                                let low = row.stock_qty <= LOW_STOCK;
                                view! {
                                    <TableRow class={if row.is_active { "" } else { "table__row--muted" }}>
                                        <TableCell>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(id_edit.clone())));
                                            }>{row.description}</a>
                                        </TableCell>
                                        <TableCell>{row.brand}</TableCell>
                                        <TableCell>{row.category}</TableCell>
                                        <TableCellMoney value=Some(row.price) />
                                        <TableCell>
                                            <span class:text-warning=low>{row.stock_qty}</span>
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button size=ButtonSize::Small on_click=move |_| adjust(id_out.clone(), -1)
                                                    disabled={row.stock_qty <= 0}
                                                >"−1"</Button>
                                                <Button size=ButtonSize::Small on_click=move |_| adjust(id_in.clone(), 1)>"+1"</Button>
                                            </Flex>
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
