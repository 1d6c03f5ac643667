use crate::shared::components::table::{format_duration, format_rub};
use contracts::dashboards::d400_schedule_board::ScheduleBoard;
use leptos::prelude::*;
use thaw::*;

/// Итоги дня и состояние сетки
#[component]
pub fn SummaryPanel(#[prop(into)] board: Signal<Option<ScheduleBoard>>) -> impl IntoView {
    move || {
        board.get().map(|b| {
            let s = b.summary;
            let stats = b.stats;
            let outstanding = s.outstanding();
            let by_method = s
                .by_method
                .into_iter()
                .map(|m| {
                    view! {
                        <dt>{m.method.display_name()}</dt>
                        <dd>{format_rub(m.amount)}</dd>
                    }
                })
                .collect_view();
            view! {
                <Flex gap=FlexGap::Large class="board-summary">
                    <Card class="board-summary__card">
                        <h4>"День"</h4>
                        <dl class="totals">
                            <dt>"Записей"</dt>
                            <dd>{s.bookings_count}</dd>
                            <dt>"Завершено"</dt>
                            <dd>{s.completed_count}</dd>
                            <dt>"Услуги"</dt>
                            <dd>{format_rub(s.services_total)}</dd>
                            <dt>"Чаевые"</dt>
                            <dd>{format_rub(s.tips)}</dd>
                            <dt>"Скидки"</dt>
                            <dd>{format_rub(-s.discounts)}</dd>
                            <dt>"Итого"</dt>
                            <dd class="totals__main">{format_rub(s.final_total)}</dd>
                            <dt>"Оплачено"</dt>
                            <dd>{format_rub(s.payments_total)}</dd>
                            <dt>"Не оплачено"</dt>
                            <dd class={if outstanding > 0.0 { "totals__warn" } else { "totals__ok" }}>
                                {format_rub(outstanding)}
                            </dd>
                            <dt>"Загрузка"</dt>
                            <dd>{format_duration(s.total_duration)}</dd>
                        </dl>
                        {(s.unreconciled_completed > 0).then(|| view! {
                            <div class="text-warning">
                                {format!("Завершённых без сверки оплат: {}", s.unreconciled_completed)}
                            </div>
                        })}
                    </Card>
                    <Card class="board-summary__card">
                        <h4>"По способам оплаты"</h4>
                        <dl class="totals">{by_method}</dl>
                    </Card>
                    <Card class="board-summary__card">
                        <h4>"Сетка"</h4>
                        <dl class="totals">
                            <dt>"Размещено записей"</dt>
                            <dd>{stats.placed_bookings}</dd>
                            <dt>"В скрытых часах"</dt>
                            <dd>{stats.hidden_bookings}</dd>
                            <dt>"С неверным временем"</dt>
                            <dd>{stats.invalid_time}</dd>
                            <dt>"Занято ячеек"</dt>
                            <dd>{stats.occupied_cells}</dd>
                            <dt>"Свободно ячеек"</dt>
                            <dd>{stats.free_cells}</dd>
                            <dt>"Пересечений"</dt>
                            <dd class={if stats.conflict_cells > 0 { "totals__warn" } else { "" }}>
                                {stats.conflict_cells}
                            </dd>
                        </dl>
                    </Card>
                </Flex>
            }
        })
    }
}
