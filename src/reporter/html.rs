//! HTML report generator - fixed placeholder document

use crate::reporter::{ReportContext, Reporter};
use anyhow::Result;

pub struct HtmlReporter;

impl Reporter for HtmlReporter {
    fn generate(ctx: &ReportContext) -> Result<String> {
        // results_dir is echoed as given, without escaping
        Ok(format!(r#"
<!DOCTYPE html>
<html>
<head><title>Security Report</title></head>
<body>
<h1>Security Scan Report</h1>
<p>Generated: {timestamp}</p>
<p>Results directory: {results_dir}</p>
</body>
</html>
"#,
            timestamp = ctx.timestamp(),
            results_dir = ctx.results_dir,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn context(results_dir: &str) -> ReportContext {
        ReportContext {
            results_dir: results_dir.to_string(),
            generated_at: Local.with_ymd_and_hms(2024, 5, 1, 13, 45, 2).unwrap(),
        }
    }

    #[test]
    fn test_document_layout() {
        let html = HtmlReporter::generate(&context("./scans")).unwrap();
        let expected = "\n<!DOCTYPE html>\n<html>\n<head><title>Security Report</title></head>\n<body>\n\
            <h1>Security Scan Report</h1>\n<p>Generated: 2024-05-01 13:45:02</p>\n\
            <p>Results directory: ./scans</p>\n</body>\n</html>\n";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_results_dir_not_escaped() {
        let html = HtmlReporter::generate(&context("<b>&scans</b>")).unwrap();
        assert!(html.contains("<p>Results directory: <b>&scans</b></p>"));
    }
}
