//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{usecase}--{category}` (e.g. `"u601_process_files--usecase"`)
//!   - `data-page-category` with one of the constants below

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case wizard / action page (uploads, sending reports).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Page id for a use case, e.g. `page_id("u601_process_files", PAGE_CAT_USECASE)`.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}
