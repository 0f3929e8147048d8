use crate::shared::api::BrowserApi;
use crate::shared::config::load_config;
use crate::usecases::u601_process_files::UploadPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let api = BrowserApi::new(&config.api);
    log::info!(
        "Processing service at {} (timeout {} ms)",
        api.base(),
        config.api.request_timeout_ms
    );

    view! {
        <ConfigProvider>
            <UploadPage api=api />
        </ConfigProvider>
    }
}
