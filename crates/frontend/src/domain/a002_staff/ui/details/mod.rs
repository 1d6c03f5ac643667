mod view_model;

use self::view_model::StaffDetailsVm;
use crate::shared::components::error_box::ErrorBox;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StaffDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StaffDetailsVm::new();
    vm.load(id);

    view! {
        <Card>
            <div class="details-form">
                <h3 class="details-form__title">
                    {move || if vm.is_edit_mode() { "Мастер" } else { "Новый мастер" }}
                </h3>
                <ErrorBox error=vm.error />

                <div class="form__group">
                    <label class="form__label">"Имя"</label>
                    <Input value=vm.description />
                </div>
                <div class="form__group">
                    <label class="form__label">"Филиал"</label>
                    <Select value=vm.branch_ref>
                        <option value="">"— выберите —"</option>
                        {move || vm.branches.get().into_iter().map(|b| {
                            let id = b.to_string_id();
                            view! { <option value=id>{b.base.description}</option> }
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Должность"</label>
                    <Input value=vm.position placeholder="Стилист, мастер маникюра..." />
                </div>
                <div class="form__group">
                    <label class="form__label">"Телефон"</label>
                    <Input value=vm.phone />
                </div>
                <div class="form__group">
                    <label class="form__label">"Порядок в сетке"</label>
                    <Input value=vm.sort_order />
                </div>
                <div class="form__group">
                    <Checkbox checked=vm.is_active label="Работает" />
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
