mod view_model;

use self::view_model::BranchDetailsVm;
use crate::shared::components::error_box::ErrorBox;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BranchDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BranchDetailsVm::new();
    vm.load_if_needed(id);

    let title = move || if vm.is_edit_mode() { "Филиал" } else { "Новый филиал" };

    view! {
        <Card>
            <div class="details-form">
                <h3 class="details-form__title">{title}</h3>
                <ErrorBox error=vm.error />

                <div class="form__group">
                    <label class="form__label">"Наименование"</label>
                    <Input value=vm.description placeholder="Например: Салон на Тверской" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Адрес"</label>
                    <Input value=vm.address />
                </div>
                <div class="form__group">
                    <label class="form__label">"Телефон"</label>
                    <Input value=vm.phone placeholder="+7 ..." />
                </div>
                <div class="form__group">
                    <Checkbox checked=vm.is_active label="Работает" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Комментарий"</label>
                    <Textarea value=vm.comment placeholder="Опционально" attr:rows=3 />
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
