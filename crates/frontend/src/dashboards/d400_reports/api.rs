use crate::shared::api_utils::fetch_one;
use contracts::dashboards::d400_reports::dto::{
    group_reservations_by_day, to_bars, MonthlySalesRow, PaymentMethodRow, ReportBar,
    ReservationsPerDayRow, SectorUsageRow, TopProductRow, WaiterBillingRow,
};
use contracts::dashboards::d400_reports::{ReportKind, ReportQuery};
use serde::de::DeserializeOwned;

async fn bars_of<R>(url: &str) -> Result<Vec<ReportBar>, String>
where
    R: contracts::dashboards::d400_reports::dto::ReportRow + DeserializeOwned,
{
    let rows = fetch_one::<Vec<R>>(url).await?;
    Ok(to_bars(&rows))
}

/// Загрузить отчёт и привести строки к полосам
pub async fn fetch_report(kind: ReportKind, query: &ReportQuery) -> Result<Vec<ReportBar>, String> {
    let url = query.url(kind);
    match kind {
        ReportKind::MonthlySales => bars_of::<MonthlySalesRow>(&url).await,
        ReportKind::TopProducts => bars_of::<TopProductRow>(&url).await,
        ReportKind::ReservationsPerDay => {
            let rows = fetch_one::<Vec<ReservationsPerDayRow>>(&url).await?;
            Ok(to_bars(&group_reservations_by_day(rows)))
        }
        ReportKind::PaymentMethods => bars_of::<PaymentMethodRow>(&url).await,
        ReportKind::SectorUsage => bars_of::<SectorUsageRow>(&url).await,
        ReportKind::WaiterBilling => bars_of::<WaiterBillingRow>(&url).await,
    }
}
