use crate::domain::a011_payment::ui::details::PagoDetails;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{
    EmptyRow, ErrorBanner, FilterDate, FilterInput, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::lookups::{display_options, load_options};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_payment_method::aggregate::MedioPago;
use contracts::domain::a011_payment::aggregate::{Pago, FILTER_KEYS};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_state::ListState;
use leptos::prelude::*;

/// Подпись фильтра по ключу запроса
fn filter_label(key: &str) -> &'static str {
    FILTER_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

#[component]
pub fn PagoList() -> impl IntoView {
    let list = ListController::<Pago>::new(Pago::api_path(), ListState::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);
    // Все, включая снятые: старые платежи ссылаются и на них
    let medios = RwSignal::new(Vec::<MedioPago>::new());
    load_options::<MedioPago>("", medios);

    let open_form = move |_| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <PagoDetails
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        list.refresh();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a011_payment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Pago::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=open_form>
                        {icon("plus")}
                        "Registrar pago"
                    </button>
                    <button class="button button--secondary" on:click=move |_| list.refresh()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <ErrorBanner error=list.error on_retry=Callback::new(move |_| list.refresh()) />

            <FilterPanel
                is_expanded=filters_open
                active_filters_count=Signal::derive(move || list.state.with(|s| s.filters.len()))
                on_clear=Callback::new(move |_| list.clear_filters())
            >
                <FilterSelect
                    label=filter_label("id_medio_pago")
                    value=list.filter("id_medio_pago")
                    on_change=Callback::new(move |v: String| list.set_filter("id_medio_pago", v))
                    options=Signal::derive(move || medios.with(|m| display_options(m)))
                />
                <FilterDate
                    label=filter_label("fecha_desde")
                    value=list.filter("fecha_desde")
                    on_change=Callback::new(move |v: String| list.set_filter("fecha_desde", v))
                />
                <FilterDate
                    label=filter_label("fecha_hasta")
                    value=list.filter("fecha_hasta")
                    on_change=Callback::new(move |v: String| list.set_filter("fecha_hasta", v))
                />
                <FilterInput
                    label=filter_label("search")
                    placeholder="Código de factura"
                    value=list.filter("search")
                    on_change=Callback::new(move |v: String| list.set_filter("search", v))
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Fecha"</th>
                            <th class="table__header-cell">"Factura"</th>
                            <th class="table__header-cell">"Medio de pago"</th>
                            <th class="table__header-cell table__header-cell--money">"Monto"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=4 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=4 text="No hay pagos" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|pago| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{pago.fecha_display()}</td>
                                            <td class="table__cell">{pago.factura_label()}</td>
                                            <td class="table__cell">{pago.medio_pago_label()}</td>
                                            <TableCellMoney value=pago.monto bold=true />
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                state=list.state
                on_page_change=Callback::new(move |p| list.go_to_page(p))
                on_page_size_change=Callback::new(move |n| list.set_per_page(n))
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels_come_from_query_keys() {
        assert_eq!(filter_label("fecha_desde"), "Desde");
        assert_eq!(filter_label("search"), "Buscar");
        assert_eq!(filter_label("desconocido"), "");
    }
}
