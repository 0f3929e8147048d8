use contracts::shared::forecast::{decode_csv, derive_chart_series, ChartSeries, ForecastRow};
use contracts::usecases::common::UseCaseResult;
use contracts::usecases::u601_process_files::{ArtifactKind, ArtifactLinkSet};
use contracts::usecases::u602_send_report::EmailRequest;

use crate::shared::api::ForecastApi;

/// Работа с готовыми артефактами: данные для графика, ссылки, отправка PDF.
///
/// Только читает `ArtifactLinkSet` и ничего не кеширует: каждый вызов
/// `load_forecast_series` заново запрашивает файл.
pub struct ArtifactPresenter<A> {
    api: A,
}

impl<A: ForecastApi> ArtifactPresenter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Загружает и разбирает CSV прогноза. Ошибка загрузки даёт пустой список.
    pub async fn load_forecast_series(&self, links: &ArtifactLinkSet) -> Vec<ForecastRow> {
        let path = links.forecast_data_path();
        match self.api.fetch_text(path).await {
            Ok(text) => {
                let rows = decode_csv(&text);
                let unset = rows.iter().filter(|row| row.demand.is_none()).count();
                if unset > 0 {
                    log::warn!("d601: {} of {} forecast rows have no parsable demand", unset, rows.len());
                }
                rows
            }
            Err(err) => {
                log::warn!("d601: failed to load forecast data from {}: {}", path, err);
                Vec::new()
            }
        }
    }

    pub fn derive_chart_series(&self, rows: &[ForecastRow]) -> ChartSeries {
        derive_chart_series(rows)
    }

    pub async fn load_chart_series(&self, links: &ArtifactLinkSet) -> ChartSeries {
        let rows = self.load_forecast_series(links).await;
        self.derive_chart_series(&rows)
    }

    /// Абсолютная ссылка на артефакт или `None`, если сервис его не вернул
    pub fn artifact_url(&self, links: &ArtifactLinkSet, kind: ArtifactKind) -> Option<String> {
        links.path(kind).map(|path| self.api.resolve(path))
    }

    pub fn map_snapshot_url(&self, links: &ArtifactLinkSet) -> Option<String> {
        links.map_snapshot_path().map(|path| self.api.resolve(path))
    }

    /// Отправляет PDF по почте. При пустом адресе или пути отказ без сетевого вызова.
    pub async fn dispatch_email(&self, request: &EmailRequest) -> UseCaseResult<()> {
        if let Err(err) = request.validate() {
            log::warn!("u602: email rejected: {}", err);
            return Err(err);
        }

        match self.api.send_email(request).await {
            Ok(()) => {
                log::info!("u602: report {} sent to {}", request.file_path, request.email);
                Ok(())
            }
            Err(err) => {
                log::error!("u602: failed to send email [{}]: {}", err.code(), err);
                Err(err)
            }
        }
    }
}
