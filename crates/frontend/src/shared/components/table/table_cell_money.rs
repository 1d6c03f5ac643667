//! Ячейка таблицы с денежной суммой
//!
//! ```ignore
//! <TableCellMoney value=total />
//! <TableCellMoney value=balance color_by_sign=true bold=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Сумма с разделителем тысяч, выровненная вправо. `None` выводится прочерком.
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    /// Положительные зелёным, отрицательные красным
    #[prop(optional)]
    color_by_sign: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_money(v),
        None => "-".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
