//! File exports of a finished run

mod assessment_html;
mod json_report;

pub use assessment_html::write_assessment_html;
pub use json_report::JsonReportWriter;
