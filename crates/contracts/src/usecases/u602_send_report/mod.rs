pub mod request;

pub use request::EmailRequest;

use crate::usecases::common::UseCaseMetadata;

pub const SEND_EMAIL_PATH: &str = "/send-email";

pub struct SendReport;

impl UseCaseMetadata for SendReport {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "send_report"
    }

    fn display_name() -> &'static str {
        "Send Report via Email"
    }

    fn description() -> &'static str {
        "Email the generated PDF report to a recipient"
    }
}
