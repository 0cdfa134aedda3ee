//! Общие типы фронтенда и REST-бэкенда ресторана.
//!
//! Всё, что не зависит от браузера: DTO сущностей, конверт ответов API,
//! редьюсер списков, правила рабочего процесса comanda → factura → pago.

pub mod dashboards;
pub mod domain;
pub mod shared;
