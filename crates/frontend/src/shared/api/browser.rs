use async_trait::async_trait;
use contracts::usecases::common::{SelectedFile, UseCaseError, UseCaseResult};
use contracts::usecases::u601_process_files::{ArtifactLinkSet, ProcessRequest, PROCESS_PATH};
use contracts::usecases::u602_send_report::{EmailRequest, SEND_EMAIL_PATH};
use contracts::usecases::u603_store_locations::{UploadResponse, FILE_FIELD, UPLOAD_PATH};
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::ForecastApi;
use crate::shared::api_utils::{api_url, decode_json, location_api_base, normalize_base};
use crate::shared::config::ApiConfig;

/// HTTP-клиент сервиса обработки (fetch API браузера через gloo-net)
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserApi {
    base: String,
    timeout_ms: u32,
}

impl BrowserApi {
    pub fn new(config: &ApiConfig) -> Self {
        let base = match normalize_base(&config.base_url) {
            base if base.is_empty() => location_api_base(),
            base => base,
        };
        Self {
            base,
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn send(&self, request: Request) -> UseCaseResult<Response> {
        let response = with_timeout(self.timeout_ms, request.send()).await?;
        if !response.ok() {
            return Err(UseCaseError::Status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ForecastApi for BrowserApi {
    async fn process_files(&self, request: ProcessRequest<'_>) -> UseCaseResult<ArtifactLinkSet> {
        let form = multipart_form(&request.parts())?;
        let request = Request::post(&self.resolve(PROCESS_PATH))
            .body(form)
            .map_err(|e| UseCaseError::transport(format!("Failed to build request: {}", e)))?;

        let body = self
            .send(request)
            .await?
            .text()
            .await
            .map_err(|e| UseCaseError::decode(e.to_string()))?;
        decode_json(&body)
    }

    async fn fetch_text(&self, path: &str) -> UseCaseResult<String> {
        let request = Request::get(&self.resolve(path))
            .build()
            .map_err(|e| UseCaseError::transport(format!("Failed to build request: {}", e)))?;

        self.send(request)
            .await?
            .text()
            .await
            .map_err(|e| UseCaseError::decode(e.to_string()))
    }

    async fn send_email(&self, request: &EmailRequest) -> UseCaseResult<()> {
        let request = Request::post(&self.resolve(SEND_EMAIL_PATH))
            .json(request)
            .map_err(|e| UseCaseError::transport(format!("Failed to serialize request: {}", e)))?;

        self.send(request).await?;
        Ok(())
    }

    async fn upload_store_locations(&self, file: &SelectedFile) -> UseCaseResult<UploadResponse> {
        let form = multipart_form(&[(FILE_FIELD, file)])?;
        let request = Request::post(&self.resolve(UPLOAD_PATH))
            .body(form)
            .map_err(|e| UseCaseError::transport(format!("Failed to build request: {}", e)))?;

        let body = self
            .send(request)
            .await?
            .text()
            .await
            .map_err(|e| UseCaseError::decode(e.to_string()))?;
        decode_json(&body)
    }

    fn resolve(&self, path: &str) -> String {
        api_url(&self.base, path)
    }
}

/// Обрывает запрос по таймауту
async fn with_timeout<T, F>(timeout_ms: u32, request: F) -> UseCaseResult<T>
where
    F: Future<Output = Result<T, gloo_net::Error>>,
{
    let request = Box::pin(request);
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));

    match future::select(request, timer).await {
        Either::Left((result, _)) => result.map_err(|e| UseCaseError::transport(e.to_string())),
        Either::Right(_) => Err(UseCaseError::Timeout(timeout_ms)),
    }
}

/// multipart/form-data; boundary и Content-Type выставляет браузер
fn multipart_form(parts: &[(&str, &SelectedFile)]) -> UseCaseResult<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for (field, file) in parts {
        let blob = file_blob(file)?;
        form.append_with_blob_and_filename(field, &blob, &file.name)
            .map_err(js_error)?;
    }
    Ok(form)
}

fn file_blob(file: &SelectedFile) -> UseCaseResult<Blob> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let array = js_sys::Array::new();
    array.push(&bytes);

    let properties = BlobPropertyBag::new();
    properties.set_type(file.effective_media_type());

    Blob::new_with_u8_array_sequence_and_options(&array, &properties).map_err(js_error)
}

fn js_error(e: JsValue) -> UseCaseError {
    UseCaseError::transport(format!("{:?}", e))
}
