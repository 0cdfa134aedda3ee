//! Простые проверки полей форм. Все функции возвращают первое сообщение
//! об ошибке на испанском, как его показывает UI.

pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn required_id<T>(value: Option<T>, message: &str) -> Result<T, String> {
    value.ok_or_else(|| message.to_string())
}

pub fn min_chars(value: &str, min: usize, field: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        Err(format!("{} debe tener al menos {} caracteres", field, min))
    } else {
        Ok(())
    }
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Документ: только цифры, не короче `min_len`.
pub fn document(value: &str, min_len: usize) -> Result<(), String> {
    let value = value.trim();
    required(value, "El documento es obligatorio")?;
    if !is_digits(value) {
        return Err("El documento debe contener solo números".to_string());
    }
    if value.len() < min_len {
        return Err(format!("El documento debe tener al menos {} dígitos", min_len));
    }
    Ok(())
}

/// Телефон: 7–15 цифр; пробелы, дефисы, скобки и ведущий `+` допускаются.
pub fn phone(value: &str) -> Result<(), String> {
    let value = value.trim();
    let allowed = value
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')') || (c == '+' && i == 0));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !allowed || !(7..=15).contains(&digits) {
        return Err("El teléfono debe tener entre 7 y 15 dígitos".to_string());
    }
    Ok(())
}

/// Минимальная проверка формата `local@dominio.tld`.
pub fn email(value: &str) -> Result<(), String> {
    let value = value.trim();
    let invalid = || Err("El email no tiene un formato válido".to_string());
    let Some((local, domain)) = value.split_once('@') else {
        return invalid();
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return invalid();
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => Ok(()),
        _ => invalid(),
    }
}

pub fn positive_amount(value: f64, message: &str) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_rules() {
        assert!(document("30111222", 7).is_ok());
        assert_eq!(
            document("30.111.222", 7).unwrap_err(),
            "El documento debe contener solo números"
        );
        assert!(document("123", 7).is_err());
        assert!(document("  ", 7).is_err());
    }

    #[test]
    fn phone_rules() {
        assert!(phone("351-555-1234").is_ok());
        assert!(phone("+54 9 351 5551234").is_ok());
        assert!(phone("12345").is_err());
        assert!(phone("1234567890123456").is_err());
        assert!(phone("351+5551234").is_err());
        assert!(phone("abc1234567").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(email("maria@example.com").is_ok());
        assert!(email("maria@example").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("maria example@x.com").is_err());
        assert!(email("a@b@c.com").is_err());
    }

    #[test]
    fn min_chars_counts_unicode() {
        assert!(min_chars("Ñu", 2, "El nombre").is_ok());
        assert_eq!(
            min_chars("J", 2, "El nombre").unwrap_err(),
            "El nombre debe tener al menos 2 caracteres"
        );
    }
}
