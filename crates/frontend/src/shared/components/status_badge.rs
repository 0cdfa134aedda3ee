use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Вариант из contracts (`badge_variant()`) → цвет thaw
pub fn badge_color(variant: &str) -> BadgeColor {
    match variant {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "error" => BadgeColor::Danger,
        "primary" => BadgeColor::Brand,
        _ => BadgeColor::Informative,
    }
}

/// Бейдж статуса строки: "Activa", "Cerrada", "Impaga"...
#[component]
pub fn StatusBadge(#[prop(into)] label: String, #[prop(into)] variant: String) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(&variant)>
            {label}
        </Badge>
    }
}

/// Активна / снята с учёта (флаг `baja`)
#[component]
pub fn ActiveBadge(baja: bool) -> impl IntoView {
    let (label, variant) = if baja {
        ("Inactivo", "error")
    } else {
        ("Activo", "success")
    };
    view! { <StatusBadge label=label variant=variant /> }
}
