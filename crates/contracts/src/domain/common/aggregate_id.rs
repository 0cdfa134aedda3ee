use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (для URL и ключей табов)
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("ID inválido '{}': {}", s, e))
    }
}

/// Объявляет newtype-идентификатор поверх `i64`.
///
/// Бэкенд отдаёт целочисленные ключи (`id_mesa`, `id_cliente`...), поэтому
/// newtype сериализуется прозрачно.
#[macro_export]
macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::int_id!(TestId);

    #[test]
    fn parses_trimmed_integer_ids() {
        assert_eq!(TestId::from_string(" 42 ").unwrap(), TestId(42));
        assert_eq!(TestId(7).as_string(), "7");
        assert!(TestId::from_string("abc").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&TestId(3)).unwrap();
        assert_eq!(json, "3");
        let back: TestId = serde_json::from_str("3").unwrap();
        assert_eq!(back, TestId(3));
    }
}
