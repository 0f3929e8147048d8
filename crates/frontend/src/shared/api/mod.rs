//! Seam between use-case logic and the network.
//!
//! `BrowserApi` talks to the processing service from the browser; tests
//! substitute a recording fake.

mod browser;
#[cfg(test)]
pub mod fake;

pub use browser::BrowserApi;

use async_trait::async_trait;
use contracts::usecases::common::{SelectedFile, UseCaseResult};
use contracts::usecases::u601_process_files::{ArtifactLinkSet, ProcessRequest};
use contracts::usecases::u602_send_report::EmailRequest;
use contracts::usecases::u603_store_locations::UploadResponse;
use std::rc::Rc;

#[async_trait(?Send)]
pub trait ForecastApi {
    /// `POST /process/` с двумя файлами
    async fn process_files(&self, request: ProcessRequest<'_>) -> UseCaseResult<ArtifactLinkSet>;

    /// GET произвольного артефакта как текста
    async fn fetch_text(&self, path: &str) -> UseCaseResult<String>;

    /// `POST /send-email`
    async fn send_email(&self, request: &EmailRequest) -> UseCaseResult<()>;

    /// `POST /store-locations/upload`
    async fn upload_store_locations(&self, file: &SelectedFile) -> UseCaseResult<UploadResponse>;

    /// Полный URL для относительного пути сервиса
    fn resolve(&self, path: &str) -> String;
}

#[async_trait(?Send)]
impl<A: ForecastApi + ?Sized> ForecastApi for Rc<A> {
    async fn process_files(&self, request: ProcessRequest<'_>) -> UseCaseResult<ArtifactLinkSet> {
        (**self).process_files(request).await
    }

    async fn fetch_text(&self, path: &str) -> UseCaseResult<String> {
        (**self).fetch_text(path).await
    }

    async fn send_email(&self, request: &EmailRequest) -> UseCaseResult<()> {
        (**self).send_email(request).await
    }

    async fn upload_store_locations(&self, file: &SelectedFile) -> UseCaseResult<UploadResponse> {
        (**self).upload_store_locations(file).await
    }

    fn resolve(&self, path: &str) -> String {
        (**self).resolve(path)
    }
}
