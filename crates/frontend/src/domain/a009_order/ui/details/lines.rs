//! Строки comanda: таблица с количеством, отметкой "entregado" и
//! добавлением продукта. Все изменения идут через `OrderDraft`, ошибки
//! правил (дубликат, количество, закрытая comanda) уходят в `error`.

use crate::shared::components::table::format_money;
use crate::shared::icons::icon;
use contracts::domain::a005_product::aggregate::{Producto, ProductoId};
use contracts::domain::a009_order::{OrderDraft, OrderError};
use contracts::domain::common::{AggregateId, Deactivatable};
use leptos::prelude::*;

/// Только активные продукты, с ценой в подписи
pub fn product_options(productos: &[Producto]) -> Vec<(String, String)> {
    productos
        .iter()
        .filter(|p| !p.is_deactivated())
        .map(|p| {
            (
                p.id_producto.as_string(),
                format!("{} ({})", p.nombre, format_money(p.precio)),
            )
        })
        .collect()
}

pub fn parse_quantity(raw: &str) -> Result<i32, OrderError> {
    match raw.trim().parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(OrderError::InvalidQuantity),
    }
}

/// Применяет операцию к черновику и показывает её ошибку
pub fn apply_to_draft<T>(
    draft: RwSignal<OrderDraft>,
    error: RwSignal<Option<String>>,
    op: impl FnOnce(&mut OrderDraft) -> Result<T, OrderError>,
) -> Option<T> {
    match draft.try_update(op)? {
        Ok(value) => {
            error.set(None);
            Some(value)
        }
        Err(e) => {
            error.set(Some(e.to_string()));
            None
        }
    }
}

#[component]
pub fn OrderLinesEditor(
    draft: RwSignal<OrderDraft>,
    #[prop(into)] productos: Signal<Vec<Producto>>,
    error: RwSignal<Option<String>>,
    /// Колонка "Entregado": в comanda из брони её нет
    #[prop(optional)]
    show_delivered: bool,
) -> impl IntoView {
    let selected = RwSignal::new(String::new());
    let cantidad = RwSignal::new("1".to_string());
    let is_open = move || draft.with(|d| d.is_open());
    let colspan = if show_delivered { 6 } else { 5 };

    let add = move |_| {
        let Ok(id) = ProductoId::from_string(&selected.get_untracked()) else {
            error.set(Some("Seleccione un producto".to_string()));
            return;
        };
        let Some(producto) = productos.with_untracked(|list| {
            list.iter().find(|p| p.id_producto == id).cloned()
        }) else {
            error.set(Some("Producto no válido".to_string()));
            return;
        };
        let qty = match parse_quantity(&cantidad.get_untracked()) {
            Ok(q) => q,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        if apply_to_draft(draft, error, |d| d.add_line(&producto, qty)).is_some() {
            selected.set(String::new());
            cantidad.set("1".to_string());
        }
    };

    view! {
        <div class="order-lines">
            <Show when=is_open>
                <div class="order-lines__add">
                    <select
                        class="order-lines__product"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Seleccione producto..."</option>
                        {move || {
                            productos
                                .with(|p| product_options(p))
                                .into_iter()
                                .map(|(v, text)| view! { <option value=v>{text}</option> })
                                .collect_view()
                        }}
                    </select>
                    <input
                        class="order-lines__qty"
                        type="number"
                        min="1"
                        prop:value=move || cantidad.get()
                        on:input=move |ev| cantidad.set(event_target_value(&ev))
                    />
                    <button class="button button--secondary" on:click=add>
                        {icon("plus")}
                        "Agregar"
                    </button>
                </div>
            </Show>

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Producto"</th>
                        <th class="table__header-cell">"Cantidad"</th>
                        <th class="table__header-cell table__header-cell--money">"Precio"</th>
                        <th class="table__header-cell table__header-cell--money">"Subtotal"</th>
                        {show_delivered.then(|| view! { <th class="table__header-cell">"Entregado"</th> })}
                        <th class="table__header-cell table__header-cell--actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let lines = draft.with(|d| d.lines().to_vec());
                        if lines.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan=colspan>
                                        "Sin productos"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        let editable = is_open();
                        lines
                            .into_iter()
                            .enumerate()
                            .map(|(index, line)| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.nombre.clone()}</td>
                                        <td class="table__cell">
                                            <input
                                                class="order-lines__qty"
                                                type="number"
                                                min="1"
                                                disabled=!editable
                                                prop:value=line.cantidad.to_string()
                                                on:change=move |ev| {
                                                    let raw = event_target_value(&ev);
                                                    match parse_quantity(&raw) {
                                                        Ok(q) => {
                                                            apply_to_draft(draft, error, |d| d.set_quantity(index, q));
                                                        }
                                                        Err(e) => error.set(Some(e.to_string())),
                                                    }
                                                }
                                            />
                                        </td>
                                        <td class="table__cell table__cell--money">{format_money(line.precio_unitario)}</td>
                                        <td class="table__cell table__cell--money">{format_money(line.subtotal())}</td>
                                        {show_delivered.then(|| view! {
                                            <td class="table__cell">
                                                <input
                                                    type="checkbox"
                                                    disabled=!editable
                                                    prop:checked=line.entregado
                                                    on:change=move |_| {
                                                        apply_to_draft(draft, error, |d| d.toggle_delivered(index));
                                                    }
                                                />
                                            </td>
                                        })}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost button--small"
                                                title="Quitar"
                                                disabled=!editable
                                                on:click=move |_| {
                                                    apply_to_draft(draft, error, |d| d.remove_line(index));
                                                }
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
                <tfoot>
                    <tr class="table__total-row">
                        <td class="table__cell" colspan="3"><strong>"Total"</strong></td>
                        <td class="table__cell table__cell--money">
                            <strong>{move || format_money(draft.with(|d| d.total()))}</strong>
                        </td>
                        <td class="table__cell" colspan={colspan - 4}></td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_section::aggregate::SeccionId;

    fn producto(id: i64, nombre: &str, precio: f64, baja: bool) -> Producto {
        Producto {
            id_producto: ProductoId(id),
            codigo: format!("P{}", id),
            nombre: nombre.into(),
            precio,
            id_seccion: SeccionId(1),
            seccion: None,
            descripcion: None,
            tipo: None,
            cm3: None,
            baja,
        }
    }

    #[test]
    fn inactive_products_are_not_offered() {
        let options = product_options(&[
            producto(1, "Milanesa", 1500.0, false),
            producto(2, "Flan", 700.0, true),
        ]);
        assert_eq!(options, vec![("1".to_string(), "Milanesa ($ 1.500,00)".to_string())]);
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(parse_quantity(" 2 "), Ok(2));
        assert_eq!(parse_quantity("0"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity("1.5"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity(""), Err(OrderError::InvalidQuantity));
    }
}
