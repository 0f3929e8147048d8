pub mod presenter;
pub mod view;
pub mod workflow;

pub use presenter::ArtifactPresenter;
pub use view::UploadPage;
pub use workflow::SubmissionWorkflow;
