use serde::{Deserialize, Serialize};

use crate::usecases::common::{UseCaseError, UseCaseResult};
use crate::usecases::u601_process_files::{ArtifactKind, WorkflowState};

const INVALID_REQUEST: &str = "Enter a valid email and ensure PDF is generated.";

/// Запрос на отправку PDF-отчёта по почте
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    /// Адрес получателя
    pub email: String,
    /// Путь PDF-артефакта из готового набора ссылок
    pub file_path: String,
}

impl EmailRequest {
    /// Собирает запрос из текущего состояния загрузки.
    /// До `Ready` (или без PDF в наборе) отправка запрещена.
    pub fn for_state(state: &WorkflowState, email: &str) -> UseCaseResult<Self> {
        let pdf_path = state
            .links()
            .and_then(|links| links.path(ArtifactKind::PdfReport))
            .ok_or_else(|| UseCaseError::validation(INVALID_REQUEST))?;

        let request = Self {
            email: email.trim().to_string(),
            file_path: pdf_path.to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> UseCaseResult<()> {
        if self.email.trim().is_empty() || self.file_path.is_empty() {
            return Err(UseCaseError::validation(INVALID_REQUEST));
        }
        Ok(())
    }
}
