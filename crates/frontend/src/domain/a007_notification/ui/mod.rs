//! Тест уведомлений: составить сообщение, "отправить" в выбранный канал
//! и посмотреть историю попыток. Реальной доставки нет, backend только
//! проверяет получателя и фиксирует результат.

use crate::domain::a007_notification::api;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_utc_local;
use crate::shared::icons::icon;
use crate::shared::live_changes::refetch_on_change;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::domain::a007_notification::aggregate::{
    validate_target, Notification, NotificationDto,
};
use contracts::enums::notification_channel::{NotificationChannel, NotificationStatus};
use contracts::shared::live_changes::COLLECTION_NOTIFICATION;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_class(status: NotificationStatus) -> &'static str {
    match status {
        NotificationStatus::Draft => "badge badge--neutral",
        NotificationStatus::Recorded => "badge badge--success",
        NotificationStatus::Failed => "badge badge--error",
    }
}

#[component]
pub fn NotificationTestPage() -> impl IntoView {
    let history = RwSignal::new(Vec::<Notification>::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let channel = RwSignal::new(NotificationChannel::Push.code().to_string());
    let target = RwSignal::new(String::new());

    let selected_channel =
        move || NotificationChannel::from_code(&channel.get()).unwrap_or(NotificationChannel::Push);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    history.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();
    refetch_on_change(&[COLLECTION_NOTIFICATION], fetch);

    // Последние попытки сверху
    let rows = Signal::derive(move || {
        let mut list = history.get();
        list.sort_by(|a, b| b.base.metadata.created_at.cmp(&a.base.metadata.created_at));
        list
    });

    let apply_result = move |n: Notification| {
        match n.status {
            NotificationStatus::Failed => {
                error.set(Some(n.error.clone().unwrap_or_else(|| "Ошибка отправки".into())))
            }
            _ => {
                error.set(None);
                info.set(Some(format!("Сообщение \"{}\" отправлено", n.title())));
            }
        }
        let id = n.to_string_id();
        history.update(|list| match list.iter_mut().find(|x| x.to_string_id() == id) {
            Some(slot) => *slot = n,
            None => list.push(n),
        });
    };

    // Черновик сохраняется всегда; отправка только если просили
    let submit = move |send: bool| {
        let dto = NotificationDto {
            title: title.get_untracked().trim().to_string(),
            body: body.get_untracked(),
            channel: selected_channel(),
            target: target.get_untracked().trim().to_string(),
        };
        if let Err(e) = validate_target(dto.channel, &dto.target) {
            error.set(Some(e));
            return;
        }
        busy.set(true);
        info.set(None);
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(id) if send => match api::send_test(&id).await {
                    Ok(n) => apply_result(n),
                    Err(e) => error.set(Some(e)),
                },
                Ok(_) => {
                    error.set(None);
                    info.set(Some("Черновик сохранён".into()));
                    fetch();
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let resend = move |id: String| {
        spawn_local(async move {
            match api::send_test(&id).await {
                Ok(n) => apply_result(n),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_row = move |id: String| {
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => history.update(|list| list.retain(|n| n.to_string_id() != id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let clear = move || {
        if !confirm("Очистить всю историю уведомлений?") {
            return;
        }
        spawn_local(async move {
            match api::clear_history().await {
                Ok(()) => history.set(Vec::new()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <PageFrame page_id="a007_notification--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Тест уведомлений">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Обновить"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear()>
                    {icon("delete")} "Очистить историю"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox error=error />
                {move || info.get().map(|msg| view! { <div class="info-box">{msg}</div> })}

                <Card>
                    <div class="details-form">
                        <Flex gap=FlexGap::Medium>
                            <div class="form__group">
                                <label class="form__label">"Канал"</label>
                                <Select value=channel>
                                    {NotificationChannel::all().into_iter().map(|c| view! {
                                        <option value=c.code()>{c.display_name()}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Получатель"</label>
                                <Input
                                    value=target
                                    placeholder=Signal::derive(move || Some(selected_channel().target_hint().to_string()))
                                />
                            </div>
                        </Flex>
                        <div class="form__group">
                            <label class="form__label">"Заголовок"</label>
                            <Input value=title />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Текст"</label>
                            <Textarea value=body attr:rows=4 />
                        </div>
                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || busy.get())
                                on_click=move |_| submit(true)
                            >
                                {icon("send")} "Отправить тест"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || busy.get())
                                on_click=move |_| submit(false)
                            >
                                {icon("save")} "Сохранить черновик"
                            </Button>
                        </Flex>
                    </div>
                </Card>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Создано"</TableHeaderCell>
                            <TableHeaderCell>"Канал"</TableHeaderCell>
                            <TableHeaderCell>"Получатель"</TableHeaderCell>
                            <TableHeaderCell>"Заголовок"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell>"Отправлено"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 120px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|n| format!("{}:{:?}", n.to_string_id(), n.status)
                            children=move |n: Notification| {
                                let id_send = n.to_string_id();
                                let id_delete = n.to_string_id();
                                let sent = n.status == NotificationStatus::Recorded;
                                let title = n.title().to_string();
                                view! {
                                    <TableRow>
                                        <TableCell>{format_utc_local(n.base.metadata.created_at)}</TableCell>
                                        <TableCell>{n.channel.display_name()}</TableCell>
                                        <TableCell>{n.target.clone()}</TableCell>
                                        <TableCell>
                                            {title}
                                            <div class="table__hint">{n.body.clone()}</div>
                                        </TableCell>
                                        <TableCell>
                                            <span class=status_class(n.status)>{n.status.display_name()}</span>
                                            {n.error.clone().map(|e| view! { <div class="table__hint text-error">{e}</div> })}
                                        </TableCell>
                                        <TableCell>{n.sent_at.map(format_utc_local).unwrap_or_default()}</TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled={sent}
                                                    on_click=move |_| resend(id_send.clone())
                                                >
                                                    {icon("send")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| delete_row(id_delete.clone())
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
