mod view_model;

use self::view_model::SalonServiceDetailsVm;
use crate::shared::components::error_box::ErrorBox;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SalonServiceDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SalonServiceDetailsVm::new();
    vm.load_if_needed(id);

    view! {
        <Card>
            <div class="details-form">
                <h3 class="details-form__title">
                    {move || if vm.is_edit_mode() { "Услуга" } else { "Новая услуга" }}
                </h3>
                <ErrorBox error=vm.error />

                <div class="form__group">
                    <label class="form__label">"Наименование"</label>
                    <Input value=vm.description />
                </div>
                <div class="form__group">
                    <label class="form__label">"Категория"</label>
                    <Input value=vm.category placeholder="Волосы, ногти, уход..." />
                </div>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Цена, ₽"</label>
                        <Input value=vm.price />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Длительность, мин"</label>
                        <Input value=vm.duration_minutes />
                    </div>
                </Flex>
                <div class="form__group">
                    <Checkbox checked=vm.is_active label="Доступна для записи" />
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
