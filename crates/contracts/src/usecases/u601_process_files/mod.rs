pub mod request;
pub mod response;
pub mod state;

pub use request::{FileRole, ProcessRequest};
pub use response::{ArtifactKind, ArtifactLinkSet};
pub use state::WorkflowState;

use crate::usecases::common::UseCaseMetadata;

/// Эндпоинт обработки пары файлов
pub const PROCESS_PATH: &str = "/process/";

pub struct ProcessFiles;

impl UseCaseMetadata for ProcessFiles {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "process_files"
    }

    fn display_name() -> &'static str {
        "Data Upload"
    }

    fn description() -> &'static str {
        "Upload sales and inventory CSV files and generate forecast, recommendations, report and map"
    }
}
