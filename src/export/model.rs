//! Tabular projection of application records shared by the CSV and XLSX
//! writers (JSON serializes the records directly).

use crate::models::application::Application;
use crate::utils::date;

pub(crate) fn headers() -> [&'static str; 11] {
    [
        "id",
        "name",
        "cabinet",
        "phone",
        "applicationText",
        "process",
        "executor",
        "submittedAt",
        "startedAt",
        "finishedAt",
        "done",
    ]
}

pub(crate) fn record_to_row(rec: &Application) -> Vec<String> {
    vec![
        rec.id.to_string(),
        rec.name.clone(),
        rec.cabinet.clone(),
        rec.phone.clone(),
        rec.application_text.clone(),
        rec.process.clone(),
        rec.executor.clone(),
        date::format_stamp(&rec.submitted_at),
        rec.started_at.as_ref().map(date::format_stamp).unwrap_or_default(),
        rec.finished_at.as_ref().map(date::format_stamp).unwrap_or_default(),
        if rec.done { "true" } else { "false" }.to_string(),
    ]
}
