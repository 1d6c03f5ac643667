use super::api;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::logger::LogEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use thaw::*;

fn matches(entry: &LogEntry, category: &str, needle: &str) -> bool {
    (category.is_empty() || entry.category == category)
        && (needle.is_empty() || entry.message.to_lowercase().contains(needle))
}

/// Журнал событий backend и клиента
#[component]
pub fn LogsPage() -> impl IntoView {
    let entries = RwSignal::new(Vec::<LogEntry>::new());
    let error = RwSignal::new(None::<String>);
    let category = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    entries.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();

    let categories = Memo::new(move |_| {
        entries.with(|list| {
            list.iter()
                .map(|e| e.category.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
        })
    });

    let rows = Signal::derive(move || {
        let category = category.get();
        let needle = search.get().trim().to_lowercase();
        entries.with(|list| {
            list.iter()
                .filter(|e| matches(e, &category, &needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let clear = move || {
        if !confirm("Удалить все записи журнала?") {
            return;
        }
        spawn_local(async move {
            match api::clear_all().await {
                Ok(()) => entries.set(Vec::new()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <PageFrame page_id="sys_logs--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Журнал событий"
                subtitle=Signal::derive(move || Some(format!("Записей: {}", rows.with(|r| r.len()))))
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Обновить"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear()>
                    {icon("delete")} "Очистить"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox error=error />

                <Flex gap=FlexGap::Small align=FlexAlign::Center class="page__toolbar">
                    <Label>"Категория:"</Label>
                    <Select value=category>
                        <option value="">"Все"</option>
                        {move || categories.get().into_iter().map(|c| view! {
                            <option value=c.clone()>{c.clone()}</option>
                        }).collect_view()}
                    </Select>
                    <Label>"Поиск:"</Label>
                    <Input value=search placeholder="Текст сообщения" />
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 170px;">"Время"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 90px;">"Источник"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 140px;">"Категория"</TableHeaderCell>
                            <TableHeaderCell>"Сообщение"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|e| e.id
                            children=move |e: LogEntry| view! {
                                <TableRow>
                                    <TableCell>{format_datetime(&e.timestamp)}</TableCell>
                                    <TableCell>{e.source}</TableCell>
                                    <TableCell>{e.category}</TableCell>
                                    <TableCell>{e.message}</TableCell>
                                </TableRow>
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

    fn entry(category: &str, message: &str) -> LogEntry {
        LogEntry {
            id: 1,
            timestamp: "2025-03-01T10:00:00Z".into(),
            source: "server".into(),
            category: category.into(),
            message: message.into(),
        }
    }

    #[test]
    fn filters_by_category_and_text() {
        let e = entry("booking", "Запись BK-1: статус Завершена");
        assert!(matches(&e, "", ""));
        assert!(matches(&e, "booking", "завершена"));
        assert!(!matches(&e, "maintenance", ""));
        assert!(!matches(&e, "", "отмена"));
    }
}
