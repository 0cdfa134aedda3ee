use crate::domain::a003_waiter::ui::details::MozoDetails;
use crate::shared::api_utils::deactivate_aggregate;
use crate::shared::components::filter_panel::{active_options, static_options};
use crate::shared::components::{
    confirm, ActiveBadge, EmptyRow, ErrorBanner, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::lookups::{display_options, load_unpaged};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_sector::aggregate::{Sector, ALL_SECTORS_PATH};
use contracts::domain::a003_waiter::aggregate::{Mozo, MozoId};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn sector_name(sectores: &[Sector], mozo: &Mozo) -> String {
    mozo.id_sector
        .and_then(|id| sectores.iter().find(|s| s.id_sector == id))
        .map(|s| s.display_name())
        .or_else(|| mozo.id_sector.map(|id| format!("Sector #{}", id)))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn MozoList() -> impl IntoView {
    let list = ListController::<Mozo>::new(
        Mozo::api_path(),
        ListState::default().with_filter("activos", "true"),
    );
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);
    let sectores = RwSignal::new(Vec::<Sector>::new());
    load_unpaged(ALL_SECTORS_PATH, sectores);

    let open_details = move |id: Option<MozoId>| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <MozoDetails
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

    let deactivate = move |mozo: Mozo| {
        if !confirm(&format!("¿Dar de baja a {}?", mozo.display_name())) {
            return;
        }
        spawn_local(async move {
            match deactivate_aggregate::<Mozo>(mozo.id_mozo).await {
                Ok(()) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a003_waiter--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Mozo::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nuevo mozo"
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
                    label="Sector"
                    value=list.filter("sector_id")
                    on_change=Callback::new(move |v: String| list.set_filter("sector_id", v))
                    options=Signal::derive(move || sectores.with(|s| display_options(s)))
                    all_label="Todos los sectores"
                />
                <FilterSelect
                    label="Ordenar por"
                    value=list.filter("ordenar_por")
                    on_change=Callback::new(move |v: String| list.set_filter("ordenar_por", v))
                    options=static_options(&[
                        ("nombre_apellido", "Nombre"),
                        ("documento", "Documento"),
                    ])
                    all_label="Predeterminado"
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Documento"</th>
                            <th class="table__header-cell">"Nombre y apellido"</th>
                            <th class="table__header-cell">"Teléfono"</th>
                            <th class="table__header-cell">"Sector"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=6 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=6 text="No hay mozos" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|mozo| {
                                    let id = mozo.id_mozo;
                                    let can_delete = mozo.can_delete();
                                    let sector = sectores.with(|s| sector_name(s, &mozo));
                                    let for_delete = mozo.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{mozo.documento.clone()}</td>
                                            <td class="table__cell">{mozo.nombre_apellido.clone()}</td>
                                            <td class="table__cell">{mozo.telefono.clone().unwrap_or_default()}</td>
                                            <td class="table__cell">{sector}</td>
                                            <td class="table__cell"><ActiveBadge baja=mozo.baja /></td>
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
    use contracts::domain::a001_sector::aggregate::SectorId;

    fn mozo(id_sector: Option<i64>) -> Mozo {
        Mozo {
            id_mozo: MozoId(1),
            documento: "30111222".into(),
            nombre_apellido: "Juan Pérez".into(),
            direccion: None,
            telefono: None,
            id_sector: id_sector.map(SectorId),
            baja: false,
        }
    }

    #[test]
    fn sector_column_falls_back_to_id() {
        let sectores = vec![Sector { id_sector: SectorId(2), numero: 5, baja: false }];
        assert_eq!(sector_name(&sectores, &mozo(Some(2))), "Sector 5");
        assert_eq!(sector_name(&sectores, &mozo(Some(9))), "Sector #9");
        assert_eq!(sector_name(&sectores, &mozo(None)), "-");
    }
}
