mod view_model;

use self::view_model::BookingDetailsVm;
use crate::shared::browser::confirm;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table::{format_duration, format_rub};
use crate::shared::date_utils::{parse_input_date, to_input_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::booking_status::BookingStatus;
use contracts::enums::payment_method::PaymentMethod;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BookingDetails(
    id: Option<String>,
    tab_key: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let vm = BookingDetailsVm::new();
    vm.load_references();
    vm.load_if_needed(id);

    let form = vm.form;
    let services_len = Memo::new(move |_| form.with(|f| f.services.len()));
    let payments_len = Memo::new(move |_| form.with(|f| f.payment_details.len()));
    let totals = Memo::new(move |_| vm.totals());

    let delete = move || {
        let name = form.with_untracked(|f| f.customer_name.clone());
        if confirm(&format!("Удалить запись клиента \"{}\"?", name)) {
            vm.delete_command(on_close);
        }
    };

    let service_row = move |i: usize| {
        let line = move || form.with(|f| f.services.get(i).cloned().unwrap_or_default());
        view! {
            <tr>
                <td>
                    <select
                        class="form__select"
                        prop:value=move || line().service_ref.unwrap_or_default()
                        on:change=move |ev| vm.pick_service(i, &event_target_value(&ev))
                    >
                        <option value="">"Своя услуга"</option>
                        {move || vm.catalog.get().into_iter().map(|s| view! {
                            <option value=s.to_string_id()>{s.base.description.clone()}</option>
                        }).collect_view()}
                    </select>
                </td>
                <td>
                    <input
                        class="form__input"
                        prop:value=move || line().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_service(i, |l| l.name = value);
                        }
                    />
                </td>
                <td>
                    <input
                        class="form__input form__input--number"
                        prop:value=move || line().price.to_string()
                        on:change=move |ev| {
                            if let Some(v) = vm.parse_number(&event_target_value(&ev), "Цена") {
                                vm.update_service(i, |l| l.price = v);
                            }
                        }
                    />
                </td>
                <td>
                    <input
                        class="form__input form__input--number"
                        prop:value=move || line().quantity.to_string()
                        on:change=move |ev| {
                            if let Some(v) = vm.parse_int(&event_target_value(&ev), "Количество") {
                                vm.update_service(i, |l| l.quantity = v);
                            }
                        }
                    />
                </td>
                <td>
                    <input
                        class="form__input form__input--number"
                        prop:value=move || line().duration_minutes.to_string()
                        on:change=move |ev| {
                            if let Some(v) = vm.parse_int(&event_target_value(&ev), "Длительность") {
                                vm.update_service(i, |l| l.duration_minutes = v);
                            }
                        }
                    />
                </td>
                <td class="text-right">
                    {move || {
                        let l = line();
                        format_rub(l.price * f64::from(l.quantity))
                    }}
                </td>
                <td>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.remove_service(i)
                    >
                        {icon("delete")}
                    </Button>
                </td>
            </tr>
        }
    };

    let payment_row = move |i: usize| {
        let line = move || form.with(|f| f.payment_details.get(i).cloned());
        view! {
            <tr>
                <td>
                    <select
                        class="form__select"
                        prop:value=move || line().map(|l| l.method.code()).unwrap_or_default()
                        on:change=move |ev| {
                            if let Some(m) = PaymentMethod::from_code(&event_target_value(&ev)) {
                                vm.update_payment(i, |l| l.method = m);
                            }
                        }
                    >
                        {PaymentMethod::line_methods().into_iter().map(|m| view! {
                            <option value=m.code()>{m.display_name()}</option>
                        }).collect_view()}
                    </select>
                </td>
                <td>
                    <input
                        class="form__input form__input--number"
                        prop:value=move || line().map(|l| l.amount.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            if let Some(v) = vm.parse_number(&event_target_value(&ev), "Сумма оплаты") {
                                vm.update_payment(i, |l| l.amount = v);
                            }
                        }
                    />
                </td>
                <td>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| vm.remove_payment(i)
                    >
                        {icon("delete")}
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <PageFrame page_id="a006_booking--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <div class="details-form__header">
                    <h2 class="details-form__title">
                        {move || if vm.is_edit_mode() {
                            format!("Запись {}", form.with(|f| f.code.clone().unwrap_or_default()))
                        } else {
                            "Новая запись".to_string()
                        }}
                    </h2>
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click={
                                let tab_key = tab_key.clone();
                                move |_| vm.save_command(tab_key.clone())
                            }
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {icon("save")} "Сохранить"
                        </Button>
                        <Show when=move || vm.is_edit_mode()>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| delete()>
                                {icon("delete")} "Удалить"
                            </Button>
                        </Show>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")} "Закрыть"
                        </Button>
                    </Flex>
                </div>

                <ErrorBox error=vm.error />
                {move || vm.loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}

                <Card>
                    <h3 class="details-form__section">"Клиент"</h3>
                    <Flex gap=FlexGap::Medium>
                        <div class="form__group">
                            <label class="form__label">"Имя"</label>
                            <input
                                class="form__input"
                                prop:value=move || form.with(|f| f.customer_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.customer_name = value);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Телефон"</label>
                            <input
                                class="form__input"
                                prop:value=move || form.with(|f| f.customer_phone.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.customer_phone = Some(value));
                                }
                            />
                        </div>
                    </Flex>
                </Card>

                <Card>
                    <h3 class="details-form__section">"Визит"</h3>
                    <Flex gap=FlexGap::Medium>
                        <div class="form__group">
                            <label class="form__label">"Дата"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || form.with(|f| to_input_date(f.booking_date))
                                on:change=move |ev| {
                                    if let Some(d) = parse_input_date(&event_target_value(&ev)) {
                                        form.update(|f| f.booking_date = d);
                                    }
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Время"</label>
                            <input
                                type="time"
                                class="form__input"
                                prop:value=move || form.with(|f| f.booking_time.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.booking_time = value);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Филиал"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.with(|f| f.branch_ref.clone())
                                on:change=move |ev| vm.set_branch(&event_target_value(&ev))
                            >
                                <option value="">"Не выбран"</option>
                                {move || vm.branches.get().into_iter().map(|b| view! {
                                    <option value=b.to_string_id()>{b.base.description.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Мастер"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.with(|f| f.staff_ref.clone())
                                on:change=move |ev| vm.set_staff(&event_target_value(&ev))
                            >
                                <option value="">"Не выбран"</option>
                                {move || vm.staff_for_branch().into_iter().map(|s| view! {
                                    <option value=s.to_string_id()>{s.base.description.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Статус"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.with(|f| f.status.code())
                                on:change=move |ev| {
                                    if let Some(s) = BookingStatus::from_code(&event_target_value(&ev)) {
                                        form.update(|f| f.status = s);
                                    }
                                }
                            >
                                {BookingStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </Flex>
                </Card>

                <Card>
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="details-form__section">"Услуги"</h3>
                        <Button size=ButtonSize::Small on_click=move |_| vm.add_service()>
                            {icon("plus")} "Добавить услугу"
                        </Button>
                    </Flex>
                    <table class="details-form__lines">
                        <thead>
                            <tr>
                                <th>"Из прайса"</th>
                                <th>"Название"</th>
                                <th>"Цена"</th>
                                <th>"Кол-во"</th>
                                <th>"Мин."</th>
                                <th>"Сумма"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || (0..services_len.get()).map(service_row).collect_view()}
                        </tbody>
                    </table>
                </Card>

                <Card>
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="details-form__section">"Оплата"</h3>
                        <Flex gap=FlexGap::Small>
                            <Button size=ButtonSize::Small on_click=move |_| vm.add_payment()>
                                {icon("plus")} "Строка оплаты"
                            </Button>
                            <Button size=ButtonSize::Small on_click=move |_| vm.settle_balance()>
                                "Закрыть остаток"
                            </Button>
                        </Flex>
                    </Flex>
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <div class="form__group">
                            <label class="form__label">"Способ оплаты"</label>
                            <select
                                class="form__select"
                                disabled=move || { payments_len.get() > 0 }
                                prop:value=move || form.with(|f| {
                                    f.payment_method.map(|m| m.code()).unwrap_or_default()
                                })
                                on:change=move |ev| {
                                    let method = PaymentMethod::from_code(&event_target_value(&ev));
                                    form.update(|f| f.payment_method = method);
                                }
                            >
                                <option value="">"Не указан"</option>
                                {PaymentMethod::all().into_iter().map(|m| view! {
                                    <option value=m.code()>{m.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Чаевые"</label>
                            <input
                                class="form__input form__input--number"
                                prop:value=move || form.with(|f| f.tip_amount.to_string())
                                on:change=move |ev| {
                                    if let Some(v) = vm.parse_number(&event_target_value(&ev), "Чаевые") {
                                        form.update(|f| f.tip_amount = v);
                                    }
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Скидка"</label>
                            <input
                                class="form__input form__input--number"
                                prop:value=move || form.with(|f| f.discount.to_string())
                                on:change=move |ev| {
                                    if let Some(v) = vm.parse_number(&event_target_value(&ev), "Скидка") {
                                        form.update(|f| f.discount = v);
                                    }
                                }
                            />
                        </div>
                    </Flex>
                    <table class="details-form__lines">
                        <thead>
                            <tr>
                                <th>"Способ"</th>
                                <th>"Сумма"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || (0..payments_len.get()).map(payment_row).collect_view()}
                        </tbody>
                    </table>
                </Card>

                <Card class="details-form__totals">
                    <h3 class="details-form__section">"Итоги"</h3>
                    <dl class="totals">
                        <dt>"Услуги"</dt>
                        <dd>{move || format_rub(totals.get().services_total)}</dd>
                        <dt>"Чаевые"</dt>
                        <dd>{move || format_rub(totals.get().tip)}</dd>
                        <dt>"Скидка"</dt>
                        <dd>{move || format_rub(-totals.get().discount)}</dd>
                        <dt>"К оплате"</dt>
                        <dd class="totals__main">{move || format_rub(totals.get().final_total)}</dd>
                        <dt>"Оплачено"</dt>
                        <dd>{move || format_rub(totals.get().payments_total)}</dd>
                        <dt>"Остаток"</dt>
                        <dd class=move || {
                            if totals.get().is_reconciled() { "totals__ok" } else { "totals__warn" }
                        }>
                            {move || {
                                let t = totals.get();
                                if t.is_reconciled() {
                                    "Сходится".to_string()
                                } else {
                                    format_rub(t.balance())
                                }
                            }}
                        </dd>
                        <dt>"Длительность"</dt>
                        <dd>{move || format_duration(totals.get().total_duration)}</dd>
                    </dl>
                </Card>

                <Card>
                    <div class="form__group">
                        <label class="form__label">"Комментарий"</label>
                        <textarea
                            class="form__textarea"
                            rows=2
                            prop:value=move || form.with(|f| f.note.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.note = Some(value));
                            }
                        />
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
