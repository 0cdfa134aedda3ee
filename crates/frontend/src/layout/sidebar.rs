//! Боковое меню с раскрывающимися группами.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "operacion",
            label: "Operación",
            icon: "clipboard",
            items: vec![
                ("a008_reservation", "calendar"),
                ("a009_order", "clipboard"),
                ("a010_invoice", "file-text"),
                ("a011_payment", "credit-card"),
            ],
        },
        MenuGroup {
            id: "catalogo",
            label: "Catálogo",
            icon: "database",
            items: vec![
                ("a003_waiter", "users"),
                ("a002_dining_table", "table"),
                ("a001_sector", "layers"),
                ("a005_product", "package"),
                ("a004_section", "list"),
                ("a006_payment_method", "dollar-sign"),
                ("a007_client", "contact"),
            ],
        },
        MenuGroup {
            id: "reportes",
            label: "Reportes",
            icon: "bar-chart",
            items: vec![("d400_reports", "bar-chart")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // "Operación" раскрыта при старте
    let expanded_groups = RwSignal::new(vec!["operacion".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|open| open.contains(&group_id_for_exp))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|open| open.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    let label_for_click = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
