use super::upload_store_locations;
use crate::shared::api::{BrowserApi, ForecastApi};
use crate::shared::file_reader::{file_slot_handler, slot_caption};
use crate::shared::icons::icon;
use crate::shared::notice::{Notice, NoticeBar};
use contracts::usecases::common::{FileSlot, UseCaseMetadata};
use contracts::usecases::u603_store_locations::{StoreLocations, DOWNLOAD_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StoreLocationsPanel(api: BrowserApi) -> impl IntoView {
    let file = RwSignal::new(FileSlot::default());
    let (is_uploading, set_is_uploading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let download_url = api.resolve(DOWNLOAD_PATH);
    let api = StoredValue::new(api);

    let on_upload = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        let selected = file.with_untracked(|slot| slot.selected().cloned());
        let api = api.get_value();

        set_is_uploading.set(true);
        set_notice.set(None);
        spawn_local(async move {
            let result = upload_store_locations(&api, selected.as_ref()).await;
            set_notice.set(Some(match result {
                Ok(response) if response.message.is_empty() => {
                    Notice::Success("Store locations uploaded.".to_string())
                }
                Ok(response) => Notice::Success(response.message),
                Err(err) if err.is_validation() => Notice::Error(err.user_message()),
                Err(err) => Notice::Error(format!("Failed to upload store locations: {}", err)),
            }));
            set_is_uploading.set(false);
        });
    };

    view! {
        <Card>
            <div class="store-locations">
                <h3 class="store-locations__title">{StoreLocations::display_name()}</h3>
                <p class="store-locations__hint">{StoreLocations::description()}</p>
                <div class="store-locations__row">
                    <input type="file" accept=".csv" on:change=file_slot_handler(file, set_notice) />
                    <span class="upload-form__fileinfo">{move || file.with(slot_caption)}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_upload
                        disabled=Signal::derive(move || is_uploading.get() || file.with(FileSlot::is_reading))
                    >
                        {icon("upload")}
                        {move || if is_uploading.get() { " Uploading..." } else { " Upload" }}
                    </Button>
                    <a class="artifact-link artifact-link--secondary" href=download_url download="">
                        {icon("download")}
                        <span class="artifact-link__label">"Current locations CSV"</span>
                    </a>
                </div>
                <NoticeBar notice=notice />
            </div>
        </Card>
    }
}
