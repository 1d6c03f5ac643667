use contracts::dashboards::d400_schedule_board::{BoardBooking, BoardCell, ScheduleBoard};
use leptos::prelude::*;

/// Карточка записи рисуется в первой видимой строке, где запись есть.
/// В следующих строках той же колонки остаётся только заливка.
pub fn starts_visually(prev: Option<&BoardCell>, booking_id: &str) -> bool {
    match prev {
        Some(cell) => !cell.bookings.iter().any(|b| b.id == booking_id),
        None => true,
    }
}

fn cell_class(cell: &BoardCell) -> &'static str {
    if cell.conflict {
        "board__cell board__cell--conflict"
    } else if cell.bookings.is_empty() {
        "board__cell board__cell--free"
    } else {
        "board__cell board__cell--busy"
    }
}

#[component]
fn BookingChip(booking: BoardBooking, #[prop(into)] on_open: Callback<(String, String)>) -> impl IntoView {
    let id = booking.id.clone();
    let name = booking.customer_name.clone();
    let title = format!(
        "{} {}–{}\n{}",
        booking.customer_name, booking.start_label, booking.end_label, booking.services
    );
    view! {
        <div
            class=format!("board__chip {}", booking.status.badge_class())
            title=title
            on:click=move |_| on_open.run((id.clone(), name.clone()))
        >
            <div class="board__chip-time">
                {if booking.from_previous_day { "↩ " } else { "" }}
                {format!("{}–{}", booking.start_label, booking.end_label)}
            </div>
            <div class="board__chip-name">{booking.customer_name}</div>
            <div class="board__chip-services">{booking.services}</div>
        </div>
    }
}

/// Сетка: строки по 15 минут, колонки по мастерам
#[component]
pub fn ScheduleGrid(
    #[prop(into)] board: Signal<Option<ScheduleBoard>>,
    #[prop(into)] on_open: Callback<(String, String)>,
) -> impl IntoView {
    move || {
        let Some(board) = board.get() else {
            return view! { <div class="board__empty">"Нет данных"</div> }.into_any();
        };
        if board.columns.is_empty() {
            return view! { <div class="board__empty">"В филиале нет мастеров"</div> }.into_any();
        }

        let header = board
            .columns
            .iter()
            .map(|c| {
                let class = if c.from_bookings_only {
                    "board__head board__head--extra"
                } else {
                    "board__head"
                };
                let hint = c
                    .from_bookings_only
                    .then_some("Мастер не числится в филиале, но у него есть записи");
                view! { <th class=class title=hint>{c.staff_name.clone()}</th> }
            })
            .collect_view();

        let visible: Vec<_> = board.visible_rows().cloned().collect();
        let body = visible
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let prev_row = row_idx.checked_sub(1).and_then(|i| visible.get(i));
                let row_class = if row.slot.is_hour_start() {
                    "board__row board__row--hour"
                } else {
                    "board__row"
                };
                let cells = row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(col_idx, cell)| {
                        let prev_cell = prev_row.and_then(|r| r.cells.get(col_idx));
                        let chips = cell
                            .bookings
                            .iter()
                            .filter(|b| starts_visually(prev_cell, &b.id))
                            .cloned()
                            .map(|b| view! { <BookingChip booking=b on_open=on_open /> })
                            .collect_view();
                        view! { <td class=cell_class(cell)>{chips}</td> }
                    })
                    .collect_view();
                view! {
                    <tr class=row_class>
                        <td class="board__time">{row.slot.label.clone()}</td>
                        {cells}
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="board__scroll">
                <table class="board">
                    <thead>
                        <tr>
                            <th class="board__head board__head--time">"Время"</th>
                            {header}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::booking_status::BookingStatus;

    fn bb(id: &str) -> BoardBooking {
        BoardBooking {
            id: id.into(),
            customer_name: "Клиент".into(),
            services: "Стрижка".into(),
            status: BookingStatus::Confirmed,
            start_label: "10:00".into(),
            end_label: "11:00".into(),
            duration: 60,
            from_previous_day: false,
        }
    }

    fn cell(ids: &[&str]) -> BoardCell {
        BoardCell {
            staff_ref: "st-1".into(),
            bookings: ids.iter().map(|id| bb(id)).collect(),
            starts_here: Vec::new(),
            enabled: true,
            conflict: ids.len() > 1,
        }
    }

    #[test]
    fn chip_on_first_visible_row_only() {
        assert!(starts_visually(None, "a"));
        assert!(starts_visually(Some(&cell(&[])), "a"));
        assert!(!starts_visually(Some(&cell(&["a"])), "a"));
        assert!(starts_visually(Some(&cell(&["a"])), "b"));
    }

    #[test]
    fn conflict_wins_over_busy() {
        assert_eq!(cell_class(&cell(&[])), "board__cell board__cell--free");
        assert_eq!(cell_class(&cell(&["a"])), "board__cell board__cell--busy");
        assert_eq!(cell_class(&cell(&["a", "b"])), "board__cell board__cell--conflict");
    }
}
