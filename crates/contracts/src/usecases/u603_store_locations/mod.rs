pub mod response;

pub use response::UploadResponse;

use crate::usecases::common::UseCaseMetadata;

/// Загрузка нового CSV с координатами магазинов (multipart, часть `file`)
pub const UPLOAD_PATH: &str = "/store-locations/upload";

/// Текущий CSV с координатами магазинов
pub const DOWNLOAD_PATH: &str = "/store-locations";

pub const FILE_FIELD: &str = "file";

pub struct StoreLocations;

impl UseCaseMetadata for StoreLocations {
    fn usecase_index() -> &'static str {
        "u603"
    }

    fn usecase_name() -> &'static str {
        "store_locations"
    }

    fn display_name() -> &'static str {
        "Store Locations"
    }

    fn description() -> &'static str {
        "Replace the store locations CSV used for the sourcing map"
    }
}
