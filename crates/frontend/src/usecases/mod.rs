pub mod u601_process_files;
pub mod u602_send_report;
pub mod u603_store_locations;
