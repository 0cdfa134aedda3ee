//! Денежные суммы.
//!
//! Суммы хранятся в `f64` (так их отдаёт API), но каждая арифметика
//! округляется до сотых, чтобы остаток по счёту сходился до нуля.

use serde::{Deserialize, Deserializer};

pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn sum_money<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    round_money(values.into_iter().map(round_money).sum())
}

/// Значение для поля ввода: `1500` → `"1500.00"`
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_money(value))
}

/// Разбор суммы из поля ввода: "1500", "1500.5", "1.500", "1.500,50", "$ 2000".
pub fn parse_money(input: &str) -> Result<f64, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err("Ingrese un monto".to_string());
    }
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if is_grouped_thousands(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };
    let value = normalized
        .parse::<f64>()
        .map_err(|_| format!("Monto inválido: {}", input.trim()))?;
    if !value.is_finite() {
        return Err(format!("Monto inválido: {}", input.trim()));
    }
    Ok(round_money(value))
}

/// `1.500`, `12.345.678`: точки делят тысячи, как в `format_money`.
/// Точка с одной или двумя цифрами после неё остаётся десятичной.
fn is_grouped_thousands(value: &str) -> bool {
    let mut groups = value.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len())
        && !head.starts_with('0')
        && head.chars().all(|c| c.is_ascii_digit());
    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Сумма может прийти числом или строкой (`Decimal` в JSON бэкенда).
pub fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(round_money(n)),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(round_money)
            .map_err(serde::de::Error::custom),
    }
}

/// То же для необязательных полей.
pub fn deserialize_opt_money<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_money")] f64);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_money(0.1 + 0.2), 0.3);
        assert_eq!(sum_money([1500.0, 1500.0, 500.0]), 3500.0);
        assert_eq!(round_money(3500.0 - 2000.0 - 1500.0), 0.0);
    }

    #[test]
    fn parses_local_and_plain_formats() {
        assert_eq!(parse_money("1500").unwrap(), 1500.0);
        assert_eq!(parse_money(" 1500.5 ").unwrap(), 1500.5);
        assert_eq!(parse_money("1.500,50").unwrap(), 1500.5);
        assert_eq!(parse_money("1.500").unwrap(), 1500.0);
        assert_eq!(parse_money("$ 1.234.567").unwrap(), 1234567.0);
        assert_eq!(parse_money("12.50").unwrap(), 12.5);
        assert_eq!(parse_money("0.500").unwrap(), 0.5);
        assert_eq!(parse_money("1500.500").unwrap(), 1500.5);
        assert_eq!(parse_money("$ 2000").unwrap(), 2000.0);
        assert!(parse_money("").is_err());
        assert!(parse_money("abc").is_err());
        assert_eq!(format_amount(1500.0), "1500.00");
        assert_eq!(parse_money(&format_amount(0.1 + 0.2)).unwrap(), 0.3);
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_money")]
        total: f64,
        #[serde(default, deserialize_with = "deserialize_opt_money")]
        pagado: Option<f64>,
    }

    #[test]
    fn accepts_decimal_strings() {
        let row: Row = serde_json::from_str(r#"{"total": "3500.00", "pagado": 2000}"#).unwrap();
        assert_eq!(row.total, 3500.0);
        assert_eq!(row.pagado, Some(2000.0));
        let row: Row = serde_json::from_str(r#"{"total": 10.005}"#).unwrap();
        assert_eq!(row.pagado, None);
    }
}
