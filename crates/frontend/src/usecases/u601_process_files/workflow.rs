use contracts::usecases::common::{SelectedFile, UseCaseError, UseCaseResult};
use contracts::usecases::u601_process_files::{ProcessRequest, WorkflowState};
use std::cell::RefCell;

use crate::shared::api::ForecastApi;

type Listener = Box<dyn Fn(&WorkflowState)>;

/// Жизненный цикл загрузки пары файлов.
///
/// Владеет единственным значением [`WorkflowState`]. Одновременно в полёте
/// может быть только одна отправка; повторный `submit` в состоянии
/// `Submitting` отклоняется без сетевого вызова.
pub struct SubmissionWorkflow<A> {
    api: A,
    state: RefCell<WorkflowState>,
    listeners: RefCell<Vec<Listener>>,
}

impl<A: ForecastApi> SubmissionWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(WorkflowState::Idle),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Подписка на переходы (рендер, журнал ошибок)
    pub fn subscribe(&self, listener: impl Fn(&WorkflowState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Отправляет оба файла на обработку.
    ///
    /// `Err` означает отказ до отправки (валидация или уже идёт отправка),
    /// состояние при этом не меняется. `Ok` содержит итоговое состояние:
    /// `Ready` или `Failed`.
    pub async fn submit(
        &self,
        sales: Option<&SelectedFile>,
        inventory: Option<&SelectedFile>,
    ) -> UseCaseResult<WorkflowState> {
        if self.state.borrow().is_submitting() {
            log::warn!("u601: submit ignored, a submission is already in flight");
            return Err(UseCaseError::validation(
                "A submission is already in progress.",
            ));
        }

        let request = match ProcessRequest::from_slots(sales, inventory) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("u601: submit rejected: {}", err);
                return Err(err);
            }
        };

        log::info!(
            "u601: submitting sales={} ({} bytes), inventory={} ({} bytes)",
            request.sales.name,
            request.sales.size(),
            request.inventory.name,
            request.inventory.size()
        );
        self.transition(WorkflowState::Submitting);

        let next = match self.api.process_files(request).await {
            Ok(links) => {
                let missing = links.missing();
                if !missing.is_empty() {
                    log::warn!("u601: service omitted artifacts: {:?}", missing);
                }
                log::info!("u601: artifacts ready");
                WorkflowState::Ready(links)
            }
            Err(err) => {
                log::error!("u601: processing failed [{}]: {}", err.code(), err);
                WorkflowState::Failed(err)
            }
        };

        self.transition(next.clone());
        Ok(next)
    }

    fn transition(&self, next: WorkflowState) {
        {
            let mut state = self.state.borrow_mut();
            debug_assert!(
                state.can_transition_to(&next),
                "illegal transition {} -> {}",
                state.name(),
                next.name()
            );
            *state = next.clone();
        }
        for listener in self.listeners.borrow().iter() {
            listener(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::FakeApi;
    use contracts::usecases::u601_process_files::{ArtifactKind, ArtifactLinkSet};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn csv(name: &str) -> SelectedFile {
        SelectedFile::new(name, "text/csv", b"Store,Product,Qty\nS1,P1,3\n".to_vec())
    }

    fn links() -> ArtifactLinkSet {
        ArtifactLinkSet {
            forecast_csv: Some("/download/forecast_df.csv".to_string()),
            recommendation_csv: Some("/download/enhanced_sourcing_recommendations.csv".to_string()),
            pdf_report: Some("/download/sourcing_recommendation_report.pdf".to_string()),
            map_html: Some("/download/sourcing_map_with_legend.html".to_string()),
        }
    }

    fn record_states<A: ForecastApi>(workflow: &SubmissionWorkflow<A>) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        workflow.subscribe(move |state| sink.borrow_mut().push(state.name().to_string()));
        seen
    }

    #[test]
    fn test_missing_file_makes_no_call() {
        let workflow = SubmissionWorkflow::new(FakeApi::new().with_process_result(Ok(links())));
        let seen = record_states(&workflow);
        let sales = csv("sales.csv");

        let err = block_on(workflow.submit(Some(&sales), None)).unwrap_err();

        assert_eq!(err.user_message(), "Please upload both files.");
        assert!(workflow.api().calls().is_empty());
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_empty_file_makes_no_call() {
        let workflow = SubmissionWorkflow::new(FakeApi::new().with_process_result(Ok(links())));
        let sales = csv("sales.csv");
        let inventory = SelectedFile::new("inventory.csv", "text/csv", Vec::new());

        let err = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap_err();

        assert!(err.is_validation());
        assert!(workflow.api().calls().is_empty());
        assert!(!workflow.state().is_submitting());
    }

    #[test]
    fn test_success_exposes_links_unchanged() {
        let workflow = SubmissionWorkflow::new(FakeApi::new().with_process_result(Ok(links())));
        let seen = record_states(&workflow);
        let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));

        let state = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();

        assert_eq!(state, WorkflowState::Ready(links()));
        assert_eq!(workflow.state().links(), Some(&links()));
        assert_eq!(*seen.borrow(), vec!["submitting", "ready"]);
        assert_eq!(
            workflow.api().calls(),
            vec!["POST /process/ sales_file=sales.csv&inventory_file=inventory.csv"]
        );
    }

    #[test]
    fn test_http_500_fails_without_links() {
        let workflow =
            SubmissionWorkflow::new(FakeApi::new().with_process_result(Err(UseCaseError::Status(500))));
        let seen = record_states(&workflow);
        let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));

        let state = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();

        assert_eq!(state, WorkflowState::Failed(UseCaseError::Status(500)));
        assert!(workflow.state().links().is_none());
        assert_eq!(state.error().map(|e| e.user_message()).as_deref(), Some("Error processing files"));
        assert_eq!(*seen.borrow(), vec!["submitting", "failed"]);
    }

    #[test]
    fn test_decode_and_timeout_failures_end_in_failed() {
        for err in [UseCaseError::decode("expected value"), UseCaseError::Timeout(10)] {
            let workflow = SubmissionWorkflow::new(FakeApi::new().with_process_result(Err(err.clone())));
            let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));

            let state = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();

            assert_eq!(state, WorkflowState::Failed(err));
        }
    }

    #[test]
    fn test_missing_artifact_is_still_ready() {
        let partial = ArtifactLinkSet {
            map_html: None,
            ..links()
        };
        let workflow = SubmissionWorkflow::new(FakeApi::new().with_process_result(Ok(partial)));
        let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));

        let state = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();

        let ready = state.links().unwrap();
        assert!(!ready.is_available(ArtifactKind::MapHtml));
        assert!(ready.is_available(ArtifactKind::PdfReport));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let (api, release) = FakeApi::new().gated();
        let workflow = SubmissionWorkflow::new(api);
        let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));
        let release = RefCell::new(Some(release));

        let first = workflow.submit(Some(&sales), Some(&inventory));
        let second = async {
            assert!(workflow.state().is_submitting());
            let rejected = workflow.submit(Some(&sales), Some(&inventory)).await;
            if let Some(tx) = release.borrow_mut().take() {
                let _ = tx.send(Ok(links()));
            }
            rejected
        };

        let (first, second) = block_on(futures::future::join(first, second));

        assert_eq!(first.unwrap(), WorkflowState::Ready(links()));
        assert!(second.unwrap_err().is_validation());
        assert_eq!(workflow.api().calls().len(), 1);
    }

    #[test]
    fn test_resubmit_after_failure_restarts() {
        let workflow =
            SubmissionWorkflow::new(FakeApi::new().with_process_result(Err(UseCaseError::Status(502))));
        let seen = record_states(&workflow);
        let (sales, inventory) = (csv("sales.csv"), csv("inventory.csv"));

        block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();
        *workflow.api().process_result.borrow_mut() = Some(Ok(links()));
        let state = block_on(workflow.submit(Some(&sales), Some(&inventory))).unwrap();

        assert_eq!(state, WorkflowState::Ready(links()));
        assert_eq!(*seen.borrow(), vec!["submitting", "failed", "submitting", "ready"]);
        assert_eq!(workflow.api().calls().len(), 2);
    }
}
