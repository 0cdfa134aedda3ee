//! Ячейка таблицы с суммой
//!
//! ```text
//! <TableCellMoney value=factura.total />
//! <TableCellMoney value=saldo highlight_debt=true bold=true />
//! <TableCellMoney value=factura.outstanding() highlight_debt=true />
//! ```
//!
//! `None` выводится прочерком.

use super::number_format::format_opt_money;
use leptos::prelude::*;

/// Сумма по правому краю. `highlight_debt` красит ненулевой остаток.
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Option<f64>,
    #[prop(optional)] highlight_debt: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let mut styles = Vec::new();
    if highlight_debt && value.is_some_and(|v| v > 0.0) {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <td class="table__cell table__cell--money">
            <span style=styles.join("; ")>{format_opt_money(value)}</span>
        </td>
    }
}
