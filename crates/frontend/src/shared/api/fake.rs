//! Recording `ForecastApi` for unit tests.

use async_trait::async_trait;
use contracts::usecases::common::{SelectedFile, UseCaseError, UseCaseResult};
use contracts::usecases::u601_process_files::{ArtifactLinkSet, ProcessRequest};
use contracts::usecases::u602_send_report::EmailRequest;
use contracts::usecases::u603_store_locations::UploadResponse;
use futures::channel::oneshot;
use std::cell::RefCell;

use super::ForecastApi;

pub const BASE: &str = "http://test.local:8000";

#[derive(Default)]
pub struct FakeApi {
    /// Лог вызовов в порядке поступления
    pub calls: RefCell<Vec<String>>,
    pub process_result: RefCell<Option<UseCaseResult<ArtifactLinkSet>>>,
    /// Если задан, `process_files` ждёт ответа из канала
    pub gate: RefCell<Option<oneshot::Receiver<UseCaseResult<ArtifactLinkSet>>>>,
    pub text_result: RefCell<Option<UseCaseResult<String>>>,
    pub email_result: RefCell<Option<UseCaseResult<()>>>,
    pub upload_result: RefCell<Option<UseCaseResult<UploadResponse>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process_result(self, result: UseCaseResult<ArtifactLinkSet>) -> Self {
        *self.process_result.borrow_mut() = Some(result);
        self
    }

    pub fn with_text(self, result: UseCaseResult<String>) -> Self {
        *self.text_result.borrow_mut() = Some(result);
        self
    }

    pub fn with_email_result(self, result: UseCaseResult<()>) -> Self {
        *self.email_result.borrow_mut() = Some(result);
        self
    }

    pub fn with_upload_result(self, result: UseCaseResult<UploadResponse>) -> Self {
        *self.upload_result.borrow_mut() = Some(result);
        self
    }

    /// Держит `process_files` в полёте, пока не придёт ответ через отправитель
    pub fn gated(self) -> (Self, oneshot::Sender<UseCaseResult<ArtifactLinkSet>>) {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        (self, tx)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn unconfigured<T>() -> UseCaseResult<T> {
    Err(UseCaseError::transport("fake response not configured"))
}

#[async_trait(?Send)]
impl ForecastApi for FakeApi {
    async fn process_files(&self, request: ProcessRequest<'_>) -> UseCaseResult<ArtifactLinkSet> {
        let parts = request
            .parts()
            .iter()
            .map(|(field, file)| format!("{}={}", field, file.name))
            .collect::<Vec<_>>()
            .join("&");
        self.record(format!("POST /process/ {}", parts));

        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or_else(|_| Err(UseCaseError::transport("gate dropped")));
        }
        self.process_result
            .borrow_mut()
            .take()
            .unwrap_or_else(unconfigured)
    }

    async fn fetch_text(&self, path: &str) -> UseCaseResult<String> {
        self.record(format!("GET {}", path));
        self.text_result.borrow().clone().unwrap_or_else(unconfigured)
    }

    async fn send_email(&self, request: &EmailRequest) -> UseCaseResult<()> {
        self.record(format!("POST /send-email {} {}", request.email, request.file_path));
        self.email_result.borrow().clone().unwrap_or_else(unconfigured)
    }

    async fn upload_store_locations(&self, file: &SelectedFile) -> UseCaseResult<UploadResponse> {
        self.record(format!("POST /store-locations/upload file={}", file.name));
        self.upload_result.borrow().clone().unwrap_or_else(unconfigured)
    }

    fn resolve(&self, path: &str) -> String {
        format!("{}{}", BASE, path)
    }
}
