use super::row::ForecastRow;

/// Серии для столбчатой диаграммы: подпись и значение на каждую строку
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<u64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Высота столбца: неразобранное значение рисуется нулевым
    pub fn bar_value(&self, index: usize) -> u64 {
        self.values.get(index).copied().flatten().unwrap_or(0)
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, Option<u64>)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Подпись `"<product> (<store>)"` в порядке строк, без сортировки и агрегации
pub fn derive_chart_series(rows: &[ForecastRow]) -> ChartSeries {
    let labels = rows
        .iter()
        .map(|row| format!("{} ({})", row.product, row.store))
        .collect();
    let values = rows.iter().map(|row| row.demand).collect();
    ChartSeries { labels, values }
}
