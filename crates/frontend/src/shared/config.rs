//! Настройки приложения, известные на этапе сборки.

use once_cell::sync::Lazy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8099";

/// Бэкенд не отдаёт больше 100 строк на страницу; этого хватает для
/// выпадающих списков справочников.
pub const SELECT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Без завершающего `/`
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env(value: Option<&str>) -> Self {
        let url = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();
        Self { backend_url: url }
    }
}

/// `BACKEND_URL` при сборке (`BACKEND_URL=http://api:8099 trunk build`).
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig::from_env(option_env!("BACKEND_URL")));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_trimmed_urls() {
        assert_eq!(AppConfig::from_env(None).backend_url, "http://localhost:8099");
        assert_eq!(AppConfig::from_env(Some("  ")).backend_url, "http://localhost:8099");
        assert_eq!(
            AppConfig::from_env(Some("http://10.0.0.5:5001//")).backend_url,
            "http://10.0.0.5:5001"
        );
    }
}
