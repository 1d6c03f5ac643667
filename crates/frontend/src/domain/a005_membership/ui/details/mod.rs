mod view_model;

use self::view_model::MembershipDetailsVm;
use crate::shared::components::error_box::ErrorBox;
use contracts::enums::membership_tier::MembershipTier;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MembershipDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MembershipDetailsVm::new();
    vm.load_if_needed(id);

    view! {
        <Card>
            <div class="details-form">
                <h3 class="details-form__title">
                    {move || if vm.is_edit_mode() { "Абонемент" } else { "Новый абонемент" }}
                </h3>
                <ErrorBox error=vm.error />

                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Клиент"</label>
                        <Input value=vm.customer_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Телефон"</label>
                        <Input value=vm.customer_phone />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Уровень"</label>
                        <Select value=vm.tier>
                            {MembershipTier::all().into_iter().map(|t| view! {
                                <option value=t.code()>{t.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </Flex>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Начало"</label>
                        <input type="date" class="form__input" bind:value=vm.start_date />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Окончание"</label>
                        <input type="date" class="form__input" bind:value=vm.end_date />
                    </div>
                </Flex>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Посещений (0 = безлимит)"</label>
                        <Input value=vm.visits_total />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Использовано"</label>
                        <Input value=vm.visits_used />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Цена, ₽"</label>
                        <Input value=vm.price />
                    </div>
                </Flex>
                <div class="form__group">
                    <Checkbox checked=vm.is_frozen label="Заморожен" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Комментарий"</label>
                    <Textarea value=vm.comment attr:rows=2 />
                </div>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        "Сохранить"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Отмена"
                    </Button>
                </Flex>
            </div>
        </Card>
    }
}
