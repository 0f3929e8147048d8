pub mod view;

pub use view::StoreLocationsPanel;

use contracts::usecases::common::selected_file::require_file;
use contracts::usecases::common::{SelectedFile, UseCaseResult};
use contracts::usecases::u603_store_locations::UploadResponse;

use crate::shared::api::ForecastApi;

/// Загружает новый CSV с координатами магазинов.
/// Без файла или с пустым файлом запрос не отправляется.
pub async fn upload_store_locations<A: ForecastApi>(
    api: &A,
    slot: Option<&SelectedFile>,
) -> UseCaseResult<UploadResponse> {
    let file = require_file(slot, "store locations")?;
    log::info!("u603: uploading {} ({} bytes)", file.name, file.size());

    let response = api.upload_store_locations(file).await;
    if let Err(err) = &response {
        log::error!("u603: upload failed [{}]: {}", err.code(), err);
    }
    response
}
