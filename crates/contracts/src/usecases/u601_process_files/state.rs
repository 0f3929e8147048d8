use serde::{Deserialize, Serialize};

use super::response::ArtifactLinkSet;
use crate::usecases::common::UseCaseError;

/// Состояние процесса загрузки.
///
/// Допустимые переходы:
/// ```text
/// Idle ──┐
/// Ready ─┼─> Submitting ─┬─> Ready(links)
/// Failed ┘               └─> Failed(error)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum WorkflowState {
    /// Отправки ещё не было
    #[default]
    Idle,
    /// Запрос в полёте
    Submitting,
    /// Артефакты готовы
    Ready(ArtifactLinkSet),
    /// Ошибка отправки или обмена с сервисом
    Failed(UseCaseError),
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Ready(_) => "ready",
            WorkflowState::Failed(_) => "failed",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }

    pub fn links(&self) -> Option<&ArtifactLinkSet> {
        match self {
            WorkflowState::Ready(links) => Some(links),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&UseCaseError> {
        match self {
            WorkflowState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Разрешён ли переход в `next`
    pub fn can_transition_to(&self, next: &WorkflowState) -> bool {
        match (self, next) {
            (WorkflowState::Submitting, WorkflowState::Ready(_))
            | (WorkflowState::Submitting, WorkflowState::Failed(_)) => true,
            (WorkflowState::Submitting, _) => false,
            (_, WorkflowState::Submitting) => true,
            _ => false,
        }
    }
}
