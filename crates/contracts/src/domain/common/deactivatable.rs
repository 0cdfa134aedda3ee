/// Мягкое удаление ("baja").
///
/// Записи не удаляются физически: сервер выставляет флаг, после чего
/// редактирование и повторная деактивация в UI недоступны.
pub trait Deactivatable {
    /// Запись деактивирована
    fn is_deactivated(&self) -> bool;

    /// Выставить флаг локально (после успешного ответа сервера)
    fn deactivate(&mut self);

    fn can_edit(&self) -> bool {
        !self.is_deactivated()
    }

    fn can_delete(&self) -> bool {
        !self.is_deactivated()
    }

    /// Подпись состояния для таблиц
    fn status_label(&self) -> &'static str {
        if self.is_deactivated() {
            "Inactivo"
        } else {
            "Activo"
        }
    }
}

/// Реализует `Deactivatable` для структуры с полем `baja: bool`.
#[macro_export]
macro_rules! impl_deactivatable_by_baja {
    ($ty:ty) => {
        impl $crate::domain::common::Deactivatable for $ty {
            fn is_deactivated(&self) -> bool {
                self.baja
            }

            fn deactivate(&mut self) {
                self.baja = true;
            }
        }
    };
}
