use crate::shared::datetime;
use crate::shared::money::deserialize_money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Отчёты `/api/reportes/...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    MonthlySales,
    TopProducts,
    ReservationsPerDay,
    PaymentMethods,
    SectorUsage,
    WaiterBilling,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::MonthlySales,
        ReportKind::TopProducts,
        ReportKind::ReservationsPerDay,
        ReportKind::PaymentMethods,
        ReportKind::SectorUsage,
        ReportKind::WaiterBilling,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ReportKind::MonthlySales => "/api/reportes/ventas/mensuales",
            ReportKind::TopProducts => "/api/reportes/productos/mas-vendidos",
            ReportKind::ReservationsPerDay => "/api/reportes/reservas/por-dia",
            ReportKind::PaymentMethods => "/api/reportes/medios-pago",
            ReportKind::SectorUsage => "/api/reportes/sectores/uso",
            ReportKind::WaiterBilling => "/api/reportes/mozos/facturacion",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::MonthlySales => "Ventas mensuales",
            ReportKind::TopProducts => "Productos más vendidos",
            ReportKind::ReservationsPerDay => "Reservas por día",
            ReportKind::PaymentMethods => "Medios de pago",
            ReportKind::SectorUsage => "Uso de sectores",
            ReportKind::WaiterBilling => "Facturación por mozo",
        }
    }

    /// Заголовки колонок: подпись и значение
    pub fn columns(&self) -> (&'static str, &'static str) {
        match self {
            ReportKind::MonthlySales => ("Mes", "Total"),
            ReportKind::TopProducts => ("Producto", "Cantidad"),
            ReportKind::ReservationsPerDay => ("Fecha", "Reservas"),
            ReportKind::PaymentMethods => ("Medio de pago", "Total"),
            ReportKind::SectorUsage => ("Sector", "Comandas"),
            ReportKind::WaiterBilling => ("Mozo", "Facturado"),
        }
    }

    /// Значения в деньгах (остальные - штуки)
    pub fn is_money(&self) -> bool {
        matches!(
            self,
            ReportKind::MonthlySales | ReportKind::PaymentMethods | ReportKind::WaiterBilling
        )
    }
}

/// Необязательный период отчёта
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub fecha_desde: Option<String>,
    pub fecha_hasta: Option<String>,
}

impl ReportQuery {
    pub fn url(&self, kind: ReportKind) -> String {
        let params: Vec<String> = [("fecha_desde", &self.fecha_desde), ("fecha_hasta", &self.fecha_hasta)]
            .into_iter()
            .filter_map(|(k, v)| {
                v.as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", k, urlencoding::encode(v)))
            })
            .collect();
        if params.is_empty() {
            kind.path().to_string()
        } else {
            format!("{}?{}", kind.path(), params.join("&"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesRow {
    /// Первый день месяца, `2025-03-01`
    pub mes: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductRow {
    pub producto: String,
    pub cantidad: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationsPerDayRow {
    pub fecha: String,
    pub cantidad: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodRow {
    pub medio_pago: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub total: f64,
    pub cantidad: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorUsageRow {
    /// Номер сектора
    pub sector: serde_json::Value,
    pub uso: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiterBillingRow {
    pub mozo: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub facturado: f64,
}

/// Строка отчёта, приведённая к виду "подпись + значение"
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBar {
    pub label: String,
    pub value: f64,
    /// Доля от максимума в процентах, 0..=100
    pub percent: f64,
    pub detail: Option<String>,
}

pub trait ReportRow {
    fn label(&self) -> String;
    fn value(&self) -> f64;
    fn detail(&self) -> Option<String> {
        None
    }
}

impl ReportRow for MonthlySalesRow {
    fn label(&self) -> String {
        datetime::parse_date(&self.mes)
            .map(|d| d.format("%m/%Y").to_string())
            .unwrap_or_else(|| self.mes.clone())
    }

    fn value(&self) -> f64 {
        self.total
    }
}

impl ReportRow for TopProductRow {
    fn label(&self) -> String {
        self.producto.clone()
    }

    fn value(&self) -> f64 {
        self.cantidad as f64
    }
}

impl ReportRow for ReservationsPerDayRow {
    fn label(&self) -> String {
        datetime::format_display_date(&self.fecha)
    }

    fn value(&self) -> f64 {
        self.cantidad as f64
    }
}

impl ReportRow for PaymentMethodRow {
    fn label(&self) -> String {
        self.medio_pago.clone()
    }

    fn value(&self) -> f64 {
        self.total
    }

    fn detail(&self) -> Option<String> {
        Some(format!("{} pagos", self.cantidad))
    }
}

impl ReportRow for SectorUsageRow {
    fn label(&self) -> String {
        match &self.sector {
            serde_json::Value::String(s) => format!("Sector {}", s),
            other => format!("Sector {}", other),
        }
    }

    fn value(&self) -> f64 {
        self.uso as f64
    }
}

impl ReportRow for WaiterBillingRow {
    fn label(&self) -> String {
        self.mozo.clone()
    }

    fn value(&self) -> f64 {
        self.facturado
    }
}

pub fn to_bars<R: ReportRow>(rows: &[R]) -> Vec<ReportBar> {
    let max = rows.iter().map(ReportRow::value).fold(0.0_f64, f64::max);
    rows.iter()
        .map(|r| {
            let value = r.value();
            let percent = if max > 0.0 { (value / max * 100.0).clamp(0.0, 100.0) } else { 0.0 };
            ReportBar {
                label: r.label(),
                value,
                percent,
                detail: r.detail(),
            }
        })
        .collect()
}

/// Бэкенд группирует брони по полной дате-времени; сводим их по дням.
pub fn group_reservations_by_day(rows: Vec<ReservationsPerDayRow>) -> Vec<ReservationsPerDayRow> {
    let mut by_day: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        let day = datetime::parse_date(&row.fecha)
            .map(|d| d.format(datetime::BACKEND_DATE).to_string())
            .unwrap_or(row.fecha);
        *by_day.entry(day).or_default() += row.cantidad;
    }
    by_day
        .into_iter()
        .map(|(fecha, cantidad)| ReservationsPerDayRow { fecha, cantidad })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_adds_only_filled_dates() {
        let q = ReportQuery::default();
        assert_eq!(q.url(ReportKind::SectorUsage), "/api/reportes/sectores/uso");
        let q = ReportQuery {
            fecha_desde: Some("2025-03-01".into()),
            fecha_hasta: Some(" ".into()),
        };
        assert_eq!(
            q.url(ReportKind::MonthlySales),
            "/api/reportes/ventas/mensuales?fecha_desde=2025-03-01"
        );
    }

    #[test]
    fn bars_are_relative_to_max() {
        let rows: Vec<WaiterBillingRow> = serde_json::from_str(
            r#"[{"mozo": "Juan Pérez", "facturado": 3500.0},
                {"mozo": "Ana Ruiz", "facturado": "1750.00"}]"#,
        )
        .unwrap();
        let bars = to_bars(&rows);
        assert_eq!(bars[0].percent, 100.0);
        assert_eq!(bars[1].percent, 50.0);
        assert_eq!(bars[1].label, "Ana Ruiz");
        assert!(to_bars::<WaiterBillingRow>(&[]).is_empty());
    }

    #[test]
    fn reservations_collapse_to_days() {
        let rows = vec![
            ReservationsPerDayRow { fecha: "2025-03-15 21:00:00".into(), cantidad: 2 },
            ReservationsPerDayRow { fecha: "2025-03-15 22:30:00".into(), cantidad: 1 },
            ReservationsPerDayRow { fecha: "2025-03-16 20:00:00".into(), cantidad: 4 },
        ];
        let days = group_reservations_by_day(rows);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].cantidad, 3);
        assert_eq!(days[0].label(), "15/03/2025");
    }

    #[test]
    fn labels_for_month_and_sector() {
        let row = MonthlySalesRow { mes: "2025-03-01".into(), total: 10.0 };
        assert_eq!(row.label(), "03/2025");
        let row: SectorUsageRow = serde_json::from_str(r#"{"sector": 2, "uso": 5}"#).unwrap();
        assert_eq!(row.label(), "Sector 2");
        let pm: PaymentMethodRow =
            serde_json::from_str(r#"{"medio_pago": "Efectivo", "total": 100, "cantidad": 3}"#).unwrap();
        assert_eq!(pm.detail().as_deref(), Some("3 pagos"));
    }
}
