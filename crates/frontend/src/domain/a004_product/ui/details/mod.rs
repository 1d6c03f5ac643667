mod view_model;

use self::view_model::ProductDetailsVm;
use crate::shared::components::error_box::ErrorBox;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsVm::new();
    vm.load_if_needed(id);

    view! {
        <Card>
            <div class="details-form">
                <h3 class="details-form__title">
                    {move || if vm.is_edit_mode() { "Товар" } else { "Новый товар" }}
                </h3>
                <ErrorBox error=vm.error />

                <div class="form__group">
                    <label class="form__label">"Наименование"</label>
                    <Input value=vm.description />
                </div>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Категория"</label>
                        <Input value=vm.category />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Бренд"</label>
                        <Input value=vm.brand />
                    </div>
                </Flex>
                <Flex gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Цена, ₽"</label>
                        <Input value=vm.price />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Остаток, шт"</label>
                        // Остаток существующего товара меняется только приходом/списанием
                        <Input value=vm.stock_qty disabled=Signal::derive(move || vm.is_edit_mode()) />
                    </div>
                </Flex>
                <div class="form__group">
                    <label class="form__label">"Ссылка на изображение"</label>
                    <Input value=vm.image_url placeholder="https://..." />
                </div>
                {move || {
                    let url = vm.image_url.get();
                    (!url.trim().is_empty()).then(|| view! {
                        <img class="details-form__preview" src=url alt="" />
                    })
                }}
                <div class="form__group">
                    <Checkbox checked=vm.is_active label="В продаже" />
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
