use crate::shared::api::BrowserApi;
use crate::shared::icons::icon;
use crate::shared::notice::{Notice, NoticeBar};
use crate::usecases::u601_process_files::ArtifactPresenter;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_process_files::WorkflowState;
use contracts::usecases::u602_send_report::{EmailRequest, SendReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Отправка PDF-отчёта по почте. Доступна только в состоянии `Ready`.
#[component]
pub fn SendReportForm(api: BrowserApi, state: ReadSignal<WorkflowState>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let (is_sending, set_is_sending) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let api = StoredValue::new(api);

    let on_send = move |_| {
        if is_sending.get_untracked() {
            return;
        }
        let request = match EmailRequest::for_state(&state.get_untracked(), &email.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                set_notice.set(Some(Notice::Error(err.user_message())));
                return;
            }
        };

        set_is_sending.set(true);
        set_notice.set(None);
        let presenter = ArtifactPresenter::new(api.get_value());
        spawn_local(async move {
            let result = presenter.dispatch_email(&request).await;
            set_notice.set(Some(match result {
                Ok(()) => Notice::Success("Email sent!".to_string()),
                Err(err) if err.is_validation() => Notice::Error(err.user_message()),
                Err(_) => Notice::Error("Failed to send email".to_string()),
            }));
            set_is_sending.set(false);
        });
    };

    view! {
        <Card>
            <div class="send-report">
                <h3 class="send-report__title">{SendReport::display_name()}</h3>
                <div class="send-report__row">
                    <Input value=email placeholder="name@example.com" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_send
                        disabled=Signal::derive(move || is_sending.get())
                    >
                        {icon("send")}
                        {move || if is_sending.get() { " Sending..." } else { " Send Email" }}
                    </Button>
                </div>
                <NoticeBar notice=notice />
            </div>
        </Card>
    }
}
