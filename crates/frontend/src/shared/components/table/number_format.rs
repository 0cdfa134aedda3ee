//! Форматирование чисел для таблиц: точка между тысячами, запятая перед
//! дробной частью (`1.234,50`), как принято в ресторане.

/// Разделяет целую часть по три цифры и ставит `decimals` знаков после запятой.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut integer: String = grouped.chars().rev().collect();
    // -0,00 после округления не показываем со знаком
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{},{}", integer, d),
        None => integer,
    }
}

/// `3500.0` → `$ 3.500,00`
pub fn format_money(value: f64) -> String {
    format!("$ {}", format_number_with_decimals(value, 2))
}

/// Сумма, которая может быть ещё неизвестна
pub fn format_opt_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| "-".to_string())
}

/// Штуки и счётчики: `1234` → `1.234`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_local_separators() {
        assert_eq!(format_money(3500.0), "$ 3.500,00");
        assert_eq!(format_money(1234567.891), "$ 1.234.567,89");
        assert_eq!(format_money(0.0), "$ 0,00");
        assert_eq!(format_money(-1500.5), "$ -1.500,50");
        assert_eq!(format_money(-0.001), "$ 0,00");
        assert_eq!(format_opt_money(Some(1500.0)), "$ 1.500,00");
        assert_eq!(format_opt_money(None), "-");
    }

    #[test]
    fn integers_have_no_decimals() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(12.0), "12");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
    }
}
