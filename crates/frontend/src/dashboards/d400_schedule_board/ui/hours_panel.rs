use contracts::dashboards::d400_schedule_board::dto::ScheduleHoursResponse;
use leptos::prelude::*;
use thaw::*;

/// Переключатели рабочих часов. Выключенный час скрывает свои строки сетки.
#[component]
pub fn HoursPanel(
    #[prop(into)] hours: Signal<Option<ScheduleHoursResponse>>,
    #[prop(into)] on_toggle: Callback<u32>,
    /// `true`: включить весь диапазон, `false`: выключить
    #[prop(into)]
    on_bulk: Callback<bool>,
) -> impl IntoView {
    let buttons = move || {
        hours.get().map(|h| {
            h.range
                .hours()
                .map(|hour| {
                    let enabled = h.mask.is_enabled(hour);
                    let class = if enabled {
                        "hours__toggle hours__toggle--on"
                    } else {
                        "hours__toggle hours__toggle--off"
                    };
                    view! {
                        <button class=class on:click=move |_| on_toggle.run(hour)>
                            {format!("{:02}", hour)}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let hidden = move || {
        hours
            .get()
            .map(|h| h.range.hours().filter(|hour| !h.mask.is_enabled(*hour)).count())
            .unwrap_or(0)
    };

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="hours">
            <Label>"Часы:"</Label>
            <div class="hours__list">{buttons}</div>
            <Button size=ButtonSize::Small on_click=move |_| on_bulk.run(true)>"Все"</Button>
            <Button size=ButtonSize::Small on_click=move |_| on_bulk.run(false)>"Ни одного"</Button>
            {move || {
                let n = hidden();
                (n > 0).then(|| view! { <span class="hours__hint">{format!("скрыто часов: {}", n)}</span> })
            }}
        </Flex>
    }
}
