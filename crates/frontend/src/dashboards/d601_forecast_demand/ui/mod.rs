pub mod chart;
pub mod layout;

pub use chart::ForecastChart;
