pub mod ui;

pub use ui::ForecastChart;
