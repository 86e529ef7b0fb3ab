//! Standalone HTML page for an assessment

use maud::{DOCTYPE, Markup, html};
use quiz_domain::{AssessmentDocument, CandidateName, Topic};
use std::path::Path;
use tracing::info;

/// Write `document` as a complete HTML page
pub fn write_assessment_html(
    path: &Path,
    name: &CandidateName,
    topic: &Topic,
    document: &AssessmentDocument,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, page(name, topic, document).into_string())?;
    info!("Assessment written to {}", path.display());
    Ok(())
}

fn page(name: &CandidateName, topic: &Topic, document: &AssessmentDocument) -> Markup {
    let title = format!("{} - {} assessment", name, topic);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                (document.to_markup())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("assessment.html");
        let name = CandidateName::try_new("Ada <3").unwrap();
        let document = AssessmentDocument::parse("1. **Summary:** Solid work.");

        write_assessment_html(&path, &name, &Topic::Cpp, &document).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada &lt;3 - C++ assessment</title>"));
        assert!(html.contains("<div class=\"assessment\"><h2>Summary</h2><p>Solid work.</p></div>"));
    }

    #[test]
    fn test_title_quotes_are_escaped() {
        let name = CandidateName::try_new("Ada \"The Countess\" & co").unwrap();
        let html = page(&name, &Topic::Python, &AssessmentDocument::default()).into_string();
        assert!(html.contains("<h1>Ada &quot;The Countess&quot; &amp; co - Python assessment</h1>"));
    }
}
