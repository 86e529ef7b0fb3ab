//! JSON file writer for quiz reports.
//!
//! The whole [`QuizReport`] is written as one pretty-printed JSON document,
//! replacing any previous file at the same path.

use quiz_application::{QuizReport, ReportError, ReportWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes reports to a fixed path
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, report: &QuizReport) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, report)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;
        writeln!(writer)?;
        writer.flush()?;

        info!("Report written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{
        AnswerRecord, CandidateName, QuestionRecord, QuestionSource, Topic, resolve_answer,
    };

    fn report() -> QuizReport {
        let q = QuestionRecord::new("What is 2+2?", ["3", "4", "5", "6"].map(String::from), "B")
            .with_explanation("Basic arithmetic.");
        QuizReport::new(
            CandidateName::try_new("Ada").unwrap(),
            Topic::JavaScript,
            QuestionSource::fallback("quota exceeded"),
            vec![AnswerRecord::answered(&q, "3", &resolve_answer(&q, "3"))],
        )
    }

    #[test]
    fn test_writes_report_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("ada.json");
        let writer = JsonReportWriter::new(&path);

        writer.write(&report()).unwrap();

        let content = std::fs::read_to_string(writer.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["questionSource"]["reason"], "quota exceeded");
        assert_eq!(value["score"]["wrong"], 1);
        assert_eq!(value["answers"][0]["correctOption"], "4");
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "old contents that are much longer than needed").unwrap();

        JsonReportWriter::new(&path).write(&report()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        let err = JsonReportWriter::new(dir.path()).write(&report()).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
