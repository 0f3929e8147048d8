use super::{ArtifactPresenter, SubmissionWorkflow};
use crate::dashboards::d601_forecast_demand::ForecastChart;
use crate::shared::api::BrowserApi;
use crate::shared::file_reader::{file_slot_handler, slot_caption};
use crate::shared::icons::icon;
use crate::shared::notice::{Notice, NoticeBar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::usecases::u602_send_report::SendReportForm;
use crate::usecases::u603_store_locations::StoreLocationsPanel;
use contracts::usecases::common::{FileSlot, UseCaseMetadata};
use contracts::usecases::u601_process_files::{
    ArtifactKind, ArtifactLinkSet, FileRole, ProcessFiles, ProcessRequest, WorkflowState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn UploadPage(api: BrowserApi) -> impl IntoView {
    let sales_file = RwSignal::new(FileSlot::default());
    let inventory_file = RwSignal::new(FileSlot::default());
    let (state, set_state) = signal(WorkflowState::Idle);
    let (notice, set_notice) = signal(None::<Notice>);

    let workflow = Rc::new(SubmissionWorkflow::new(api.clone()));
    workflow.subscribe(move |next| {
        if let WorkflowState::Failed(err) = next {
            set_notice.set(Some(Notice::Error(err.user_message())));
        }
        set_state.set(next.clone());
    });
    let workflow = StoredValue::new_local(workflow);
    let api = StoredValue::new(api);

    let on_submit = move |_| {
        if state.get_untracked().is_submitting() {
            return;
        }
        // Файл, который ещё читается, не отправляется
        let sales = sales_file.with_untracked(|slot| slot.selected().cloned());
        let inventory = inventory_file.with_untracked(|slot| slot.selected().cloned());

        // Без файлов подсказка сразу, без запроса
        if let Err(err) = ProcessRequest::from_slots(sales.as_ref(), inventory.as_ref()) {
            set_notice.set(Some(Notice::Error(err.user_message())));
            return;
        }
        set_notice.set(None);

        let workflow = workflow.get_value();
        spawn_local(async move {
            if let Err(err) = workflow.submit(sales.as_ref(), inventory.as_ref()).await {
                set_notice.set(Some(Notice::Error(err.user_message())));
            }
        });
    };

    let file_inputs = FileRole::ALL
        .into_iter()
        .map(|role| {
            let slot = match role {
                FileRole::Sales => sales_file,
                FileRole::Inventory => inventory_file,
            };
            let input_id = format!("u601-{}-file", role.label());
            let caption = match role {
                FileRole::Sales => "Sales CSV",
                FileRole::Inventory => "Inventory CSV",
            };
            view! {
                <div class="upload-form__slot">
                    <label class="form__label" for=input_id.clone()>{caption}</label>
                    <input
                        id=input_id
                        type="file"
                        accept=".csv"
                        on:change=file_slot_handler(slot, set_notice)
                    />
                    <span class="upload-form__fileinfo">
                        {move || slot.with(slot_caption)}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=page_id(&ProcessFiles::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"PredictSmart+ Data Upload Portal"</h1>
                </div>
            </div>

            <div class="page__content">
                <NoticeBar notice=notice />

                <Card>
                    <div class="upload-form">
                        {file_inputs}
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || {
                                state.get().is_submitting()
                                    || sales_file.with(FileSlot::is_reading)
                                    || inventory_file.with(FileSlot::is_reading)
                            })
                        >
                            {move || if state.get().is_submitting() {
                                view! { <Spinner size=SpinnerSize::Tiny /> " Processing..." }.into_any()
                            } else {
                                view! { {icon("upload")} " Submit & Generate Insights" }.into_any()
                            }}
                        </Button>
                    </div>
                </Card>

                {move || state.get().links().cloned().map(|links| {
                    view! {
                        <div class="results">
                            <ArtifactLinks api=api.get_value() links=links.clone() />
                            <ForecastChart api=api.get_value() links=links />
                            <SendReportForm api=api.get_value() state=state />
                        </div>
                    }
                })}

                <StoreLocationsPanel api=api.get_value() />
            </div>
        </PageFrame>
    }
}

/// Кнопки артефактов; отсутствующие в ответе сервиса показываются недоступными
#[component]
fn ArtifactLinks(api: BrowserApi, links: ArtifactLinkSet) -> impl IntoView {
    let presenter = ArtifactPresenter::new(api);

    let items = ArtifactKind::ALL
        .into_iter()
        .map(|kind| match presenter.artifact_url(&links, kind) {
            Some(url) => {
                let new_tab = kind.opens_in_new_tab();
                view! {
                    <a
                        class="artifact-link"
                        href=url
                        download=kind.is_download().then_some("")
                        target=new_tab.then_some("_blank")
                        rel=new_tab.then_some("noopener noreferrer")
                    >
                        {icon(kind.icon())}
                        <span class="artifact-link__label">{kind.label()}</span>
                    </a>
                }
                .into_any()
            }
            None => view! {
                <span class="artifact-link artifact-link--unavailable" title="Not provided by the service">
                    {icon(kind.icon())}
                    <span class="artifact-link__label">{kind.label()}</span>
                    <span class="artifact-link__hint">"unavailable"</span>
                </span>
            }
            .into_any(),
        })
        .collect_view();

    let snapshot = presenter.map_snapshot_url(&links).map(|url| {
        view! {
            <a class="artifact-link artifact-link--secondary" href=url target="_blank" rel="noopener noreferrer">
                {icon("image")}
                <span class="artifact-link__label">"Map Snapshot (PNG)"</span>
            </a>
        }
    });

    view! {
        <div class="artifact-links">
            {items}
            {snapshot}
        </div>
    }
}
