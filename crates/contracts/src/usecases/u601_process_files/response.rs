use serde::{Deserialize, Serialize};

/// Данные для графика прогноза. Путь фиксирован и не берётся из `forecast_csv`
pub const FORECAST_DATA_PATH: &str = "/download/forecast_df.csv";

/// PNG-снимок интерактивной карты
pub const MAP_SNAPSHOT_PATH: &str = "/map-to-png";

/// Ссылки на артефакты, сформированные сервисом обработки.
///
/// Пути относительные (от базового адреса сервиса) и на клиенте не
/// проверяются. Отсутствующее поле означает «артефакт недоступен».
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLinkSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_csv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_csv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_html: Option<String>,
}

impl ArtifactLinkSet {
    /// Путь артефакта; пустая строка трактуется как отсутствие
    pub fn path(&self, kind: ArtifactKind) -> Option<&str> {
        let raw = match kind {
            ArtifactKind::ForecastCsv => &self.forecast_csv,
            ArtifactKind::RecommendationCsv => &self.recommendation_csv,
            ArtifactKind::PdfReport => &self.pdf_report,
            ArtifactKind::MapHtml => &self.map_html,
        };
        raw.as_deref().filter(|p| !p.is_empty())
    }

    pub fn is_available(&self, kind: ArtifactKind) -> bool {
        self.path(kind).is_some()
    }

    /// Откуда грузить данные для графика прогноза. `forecast_csv` служит
    /// только ссылкой на скачивание.
    pub fn forecast_data_path(&self) -> &'static str {
        FORECAST_DATA_PATH
    }

    /// Ссылка на PNG-снимок карты, если сама карта доступна
    pub fn map_snapshot_path(&self) -> Option<&'static str> {
        self.is_available(ArtifactKind::MapHtml)
            .then_some(MAP_SNAPSHOT_PATH)
    }

    pub fn missing(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| !self.is_available(*kind))
            .collect()
    }
}

/// Вид артефакта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    ForecastCsv,
    RecommendationCsv,
    PdfReport,
    MapHtml,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::ForecastCsv,
        ArtifactKind::RecommendationCsv,
        ArtifactKind::PdfReport,
        ArtifactKind::MapHtml,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::ForecastCsv => "Forecast CSV",
            ArtifactKind::RecommendationCsv => "Recommendations CSV",
            ArtifactKind::PdfReport => "PDF Report",
            ArtifactKind::MapHtml => "Interactive Map",
        }
    }

    /// Иконка из `shared::icons`
    pub fn icon(self) -> &'static str {
        match self {
            ArtifactKind::ForecastCsv => "table",
            ArtifactKind::RecommendationCsv => "bar-chart",
            ArtifactKind::PdfReport => "file-text",
            ArtifactKind::MapHtml => "map-pin",
        }
    }

    /// Скачивается файлом (CSV/PDF) или открывается навигацией (карта)
    pub fn is_download(self) -> bool {
        !matches!(self, ArtifactKind::MapHtml)
    }

    /// Открывать в новой вкладке
    pub fn opens_in_new_tab(self) -> bool {
        matches!(self, ArtifactKind::PdfReport | ArtifactKind::MapHtml)
    }
}
