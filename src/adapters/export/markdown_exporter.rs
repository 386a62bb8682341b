//! Markdown results exporter.
//!
//! Emits YAML front matter (title, date and a LaTeX page footer picked up
//! when the document is rendered to PDF) followed by a two-column pipe
//! table. The PDF exporter feeds this output to Pandoc.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::analysis::ResultsTable;
use crate::ports::{ExportError, ExportFormat, ResultsExporter};

/// LaTeX snippets placing a centred `Page N` footer on every page.
const PAGE_FOOTER_INCLUDES: [&str; 4] = [
    "\\usepackage{fancyhdr}",
    "\\pagestyle{fancy}",
    "\\fancyhf{}",
    "\\fancyfoot[C]{Page \\thepage}",
];

#[derive(Debug, Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    date: String,
    #[serde(rename = "header-includes")]
    header_includes: Vec<&'static str>,
}

/// Renders results as a Markdown document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownResultsExporter;

impl MarkdownResultsExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document as text.
    pub fn render(&self, table: &ResultsTable) -> Result<String, ExportError> {
        let front_matter = FrontMatter {
            title: &table.title,
            date: table.generated_at.date_string(),
            header_includes: PAGE_FOOTER_INCLUDES.to_vec(),
        };
        let yaml = serde_yaml::to_string(&front_matter)
            .map_err(|e| ExportError::conversion_failed(ExportFormat::Markdown, e.to_string()))?;

        let mut md = String::new();
        md.push_str("---\n");
        md.push_str(&yaml);
        md.push_str("---\n\n");

        let [solution, score] = table.headers();
        md.push_str(&format!("| {} | {} |\n", solution, score));
        md.push_str("|:---|---:|\n");
        for row in &table.rows {
            md.push_str(&format!("| {} | {} |\n", table_cell(&row.name), row.score));
        }

        Ok(md)
    }
}

#[async_trait]
impl ResultsExporter for MarkdownResultsExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    async fn export(&self, table: &ResultsTable) -> Result<Vec<u8>, ExportError> {
        let md = self.render(table)?;
        tracing::debug!(rows = table.rows.len(), bytes = md.len(), "markdown results rendered");
        Ok(md.into_bytes())
    }
}

/// Escape characters that would break a pipe-table cell.
fn table_cell(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Scores;

    fn table(entries: Vec<(&str, i32)>) -> ResultsTable {
        let scores: Scores = entries.into_iter().collect();
        ResultsTable::from_scores("Results", &scores)
    }

    #[test]
    fn front_matter_carries_title_and_page_footer() {
        let md = MarkdownResultsExporter::new()
            .render(&table(vec![("Baseline", 0)]))
            .unwrap();

        assert!(md.starts_with("---\n"));
        assert!(md.contains("title: Results"));
        assert!(md.contains("header-includes:"));
        assert!(md.contains("fancyfoot[C]{Page "));
    }

    #[test]
    fn table_rows_follow_rank_order() {
        let md = MarkdownResultsExporter::new()
            .render(&table(vec![("Baseline", 0), ("Solution 1", 3), ("Alt", -1)]))
            .unwrap();

        let rows: Vec<&str> = md.lines().filter(|l| l.starts_with("| ")).collect();
        assert_eq!(
            rows,
            vec![
                "| Solution | Score |",
                "| Solution 1 | 3 |",
                "| Baseline | 0 |",
                "| Alt | -1 |",
            ]
        );
    }

    #[test]
    fn pipes_in_names_are_escaped() {
        assert_eq!(table_cell("A|B"), "A\\|B");
        assert_eq!(table_cell("line\nbreak"), "line break");
    }

    #[tokio::test]
    async fn export_returns_utf8_bytes() {
        let exporter = MarkdownResultsExporter::new();
        let bytes = exporter.export(&table(vec![("Ünïcode", 1)])).await.unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains("| Ünïcode | 1 |"));
        assert_eq!(exporter.format(), ExportFormat::Markdown);
    }
}
