use serde::{Deserialize, Serialize};

/// Результат выполнения UseCase
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Ошибка выполнения UseCase
///
/// `Validation` возникает до любого сетевого вызова. Остальные варианты
/// описывают сбой обмена с сервисом; пользователю они показываются одинаково
/// (см. [`UseCaseError::user_message`]), а вид ошибки сохраняется для логов.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UseCaseError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service responded with HTTP {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl UseCaseError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Стабильный код для логов и UI-атрибутов
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Status(_) => "HTTP_STATUS_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Timeout(_) => "TIMEOUT_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Текст для пользователя: подсказка при валидации, общий текст при сбое сервиса
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            _ => "Error processing files".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_share_user_message() {
        let errors = [
            UseCaseError::Status(500),
            UseCaseError::decode("missing field"),
            UseCaseError::transport("network unreachable"),
            UseCaseError::Timeout(1000),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "Error processing files");
            assert!(!err.is_validation());
        }
    }

    #[test]
    fn test_validation_keeps_prompt() {
        let err = UseCaseError::validation("Please upload both files.");
        assert!(err.is_validation());
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.user_message(), "Please upload both files.");
    }

    #[test]
    fn test_display_keeps_diagnostics() {
        assert_eq!(
            UseCaseError::Status(500).to_string(),
            "service responded with HTTP 500"
        );
        assert_eq!(UseCaseError::Status(404).code(), "HTTP_STATUS_ERROR");
    }
}
