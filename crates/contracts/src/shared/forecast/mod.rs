//! Данные прогноза спроса: разбор CSV и подготовка серий для графика

pub mod chart;
pub mod row;

pub use chart::{derive_chart_series, ChartSeries};
pub use row::{decode_csv, decode_line, ForecastRow};
