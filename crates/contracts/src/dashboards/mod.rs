//! Сводные отчёты

pub mod d400_reports;
