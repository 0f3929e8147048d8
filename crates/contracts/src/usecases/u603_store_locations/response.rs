use serde::{Deserialize, Serialize};

/// Ответ сервиса на загрузку файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
}
