pub mod view;

pub use view::SendReportForm;
