use crate::domain::a005_product::ui::details::ProductoDetails;
use crate::shared::api_utils::deactivate_aggregate;
use crate::shared::components::filter_panel::active_options;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{
    confirm, ActiveBadge, EmptyRow, ErrorBanner, FilterInput, FilterPanel, FilterSelect,
    LoadingRow, PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::lookups::{load_options, to_options, ACTIVE_ONLY};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_section::aggregate::Seccion;
use contracts::domain::a005_product::aggregate::{ProductKind, Producto, ProductoId};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn seccion_label(secciones: &[Seccion], producto: &Producto) -> String {
    producto
        .seccion
        .as_ref()
        .or_else(|| secciones.iter().find(|s| s.id_seccion == producto.id_seccion))
        .map(|s| s.nombre.clone())
        .unwrap_or_else(|| format!("Sección #{}", producto.id_seccion))
}

#[component]
pub fn ProductoList() -> impl IntoView {
    let list = ListController::<Producto>::new(
        Producto::api_path(),
        ListState::default().with_filter("activos", "true"),
    );
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);
    let secciones = RwSignal::new(Vec::<Seccion>::new());
    load_options::<Seccion>(ACTIVE_ONLY, secciones);

    let open_details = move |id: Option<ProductoId>| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <ProductoDetails
                    id=id
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

    let deactivate = move |producto: Producto| {
        if !confirm(&format!("¿Dar de baja el producto {}?", producto.display_name())) {
            return;
        }
        spawn_local(async move {
            match deactivate_aggregate::<Producto>(producto.id_producto).await {
                Ok(()) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a005_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Producto::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nuevo producto"
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
                    label="Estado"
                    value=list.filter("activos")
                    on_change=Callback::new(move |v: String| list.set_filter("activos", v))
                    options=active_options()
                />
                <FilterSelect
                    label="Sección"
                    value=list.filter("id_seccion")
                    on_change=Callback::new(move |v: String| list.set_filter("id_seccion", v))
                    options=Signal::derive(move || secciones.with(|s| to_options(s, |x| x.nombre.clone())))
                    all_label="Todas las secciones"
                />
                <FilterInput
                    label="Precio desde"
                    input_type="number"
                    value=list.filter("precio_min")
                    on_change=Callback::new(move |v: String| list.set_filter("precio_min", v))
                />
                <FilterInput
                    label="Precio hasta"
                    input_type="number"
                    value=list.filter("precio_max")
                    on_change=Callback::new(move |v: String| list.set_filter("precio_max", v))
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Código"</th>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Sección"</th>
                            <th class="table__header-cell table__header-cell--money">"Precio"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=7 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=7 text="No hay productos" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|producto| {
                                    let id = producto.id_producto;
                                    let can_delete = producto.can_delete();
                                    let seccion = secciones.with(|s| seccion_label(s, &producto));
                                    let tipo = match (producto.tipo, producto.cm3) {
                                        (Some(ProductKind::Bebida), Some(cm3)) => format!("Bebida ({} cm3)", cm3),
                                        (Some(k), _) => k.label().to_string(),
                                        (None, _) => "-".to_string(),
                                    };
                                    let for_delete = producto.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{producto.codigo.clone()}</td>
                                            <td class="table__cell">{producto.nombre.clone()}</td>
                                            <td class="table__cell">{tipo}</td>
                                            <td class="table__cell">{seccion}</td>
                                            <TableCellMoney value=producto.precio />
                                            <td class="table__cell"><ActiveBadge baja=producto.baja /></td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Dar de baja"
                                                    disabled=!can_delete
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        deactivate(for_delete.clone());
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
    use contracts::domain::a004_section::aggregate::SeccionId;

    #[test]
    fn section_label_prefers_embedded_section() {
        let secciones = vec![Seccion { id_seccion: SeccionId(3), nombre: "Bebidas".into(), baja: false }];
        let mut producto = Producto {
            id_producto: ProductoId(1),
            codigo: "COC".into(),
            nombre: "Coca".into(),
            precio: 900.0,
            id_seccion: SeccionId(3),
            seccion: None,
            descripcion: None,
            tipo: None,
            cm3: None,
            baja: false,
        };
        assert_eq!(seccion_label(&secciones, &producto), "Bebidas");
        producto.seccion = Some(Seccion { id_seccion: SeccionId(3), nombre: "Tragos".into(), baja: false });
        assert_eq!(seccion_label(&secciones, &producto), "Tragos");
        producto.seccion = None;
        producto.id_seccion = SeccionId(8);
        assert_eq!(seccion_label(&secciones, &producto), "Sección #8");
    }
}
