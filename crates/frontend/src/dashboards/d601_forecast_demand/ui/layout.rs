//! Геометрия столбчатой диаграммы прогноза (SVG, координаты в пикселях).

use contracts::shared::forecast::ChartSeries;

pub const PLOT_HEIGHT: f64 = 320.0;
pub const PLOT_TOP: f64 = 16.0;
pub const AXIS_LEFT: f64 = 48.0;
pub const BAR_WIDTH: f64 = 28.0;
pub const BAR_GAP: f64 = 14.0;
/// Место под повёрнутые подписи
pub const LABEL_AREA: f64 = 120.0;

const AXIS_TICKS: u64 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// `None`: значение не разобрано, столбец нулевой высоты
    pub value: Option<u64>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: u64,
    pub y: f64,
}

/// Нижняя граница области построения
pub fn baseline() -> f64 {
    PLOT_TOP + PLOT_HEIGHT
}

pub fn chart_width(bars: usize) -> f64 {
    AXIS_LEFT + BAR_GAP + bars as f64 * (BAR_WIDTH + BAR_GAP)
}

pub fn chart_height() -> f64 {
    baseline() + LABEL_AREA
}

/// Верх шкалы: максимум серии, но не меньше 1
pub fn scale_max(series: &ChartSeries) -> u64 {
    series.max_value().max(1)
}

pub fn layout_bars(series: &ChartSeries) -> Vec<Bar> {
    let max = scale_max(series) as f64;

    series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = value.unwrap_or(0) as f64 / max * PLOT_HEIGHT;
            Bar {
                label: label.to_string(),
                value,
                x: AXIS_LEFT + BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP),
                y: baseline() - height,
                width: BAR_WIDTH,
                height,
            }
        })
        .collect()
}

/// Деления оси Y от 0 до верха шкалы, без повторов
pub fn axis_ticks(series: &ChartSeries) -> Vec<Tick> {
    let max = scale_max(series);
    let mut ticks: Vec<Tick> = (0..=AXIS_TICKS)
        .map(|step| {
            let value = max * step / AXIS_TICKS;
            Tick {
                value,
                y: baseline() - value as f64 / max as f64 * PLOT_HEIGHT,
            }
        })
        .collect();
    ticks.dedup_by_key(|tick| tick.value);
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<Option<u64>>) -> ChartSeries {
        ChartSeries {
            labels: (0..values.len()).map(|i| format!("P{} (S{})", i, i)).collect(),
            values,
        }
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let bars = layout_bars(&series(vec![Some(10), Some(5)]));

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, PLOT_HEIGHT);
        assert_eq!(bars[0].y, PLOT_TOP);
        assert_eq!(bars[1].height, PLOT_HEIGHT / 2.0);
        assert_eq!(bars[1].y + bars[1].height, baseline());
    }

    #[test]
    fn test_bars_keep_row_order_and_spacing() {
        let bars = layout_bars(&series(vec![Some(1), Some(2), Some(3)]));

        assert_eq!(bars[0].label, "P0 (S0)");
        assert_eq!(bars[2].label, "P2 (S2)");
        assert_eq!(bars[1].x - bars[0].x, BAR_WIDTH + BAR_GAP);
        assert_eq!(chart_width(bars.len()), bars[2].x + BAR_WIDTH + BAR_GAP);
    }

    #[test]
    fn test_unset_value_has_zero_height() {
        let bars = layout_bars(&series(vec![None, Some(4)]));

        assert_eq!(bars[0].value, None);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[0].y, baseline());
        assert_eq!(bars[1].height, PLOT_HEIGHT);
    }

    #[test]
    fn test_all_zero_series_does_not_divide_by_zero() {
        let bars = layout_bars(&series(vec![Some(0), None]));

        assert!(bars.iter().all(|bar| bar.height == 0.0));
        assert_eq!(scale_max(&series(vec![Some(0)])), 1);
    }

    #[test]
    fn test_axis_ticks() {
        let ticks = axis_ticks(&series(vec![Some(100)]));
        let values: Vec<u64> = ticks.iter().map(|t| t.value).collect();

        assert_eq!(values, vec![0, 25, 50, 75, 100]);
        assert_eq!(ticks[0].y, baseline());
        assert_eq!(ticks[4].y, PLOT_TOP);

        let small: Vec<u64> = axis_ticks(&series(vec![Some(2)])).iter().map(|t| t.value).collect();
        assert_eq!(small, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_series() {
        assert!(layout_bars(&ChartSeries::default()).is_empty());
    }
}
