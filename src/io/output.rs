use crate::core::SmellRecord;
use crate::filter::FilterPredicate;
use crate::formatting::{FormattingConfig, Painter};
use crate::pipeline::DashboardView;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(view)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    max_recommendations: usize,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, max_recommendations: usize) -> Self {
        Self {
            writer,
            max_recommendations,
        }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        self.write_header(view)?;
        self.write_summary(view)?;
        self.write_severity_breakdown(view)?;
        self.write_category_breakdown(view)?;
        self.write_recommendations(view)?;
        self.write_detailed_issues(view)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        writeln!(self.writer, "# Code Quality Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "**Quality Score: {}/100**",
            view.summary.quality_score()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Total Issues: {}**", view.total_smells)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Files Affected | {} |", view.report.unique_files)?;
        writeln!(self.writer, "| Smell Types | {} |", view.report.counts_by_type.len())?;
        writeln!(self.writer, "| Issues Shown | {} |", view.visible.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_severity_breakdown(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        if view.report.total_smells == 0 {
            return Ok(());
        }
        writeln!(self.writer, "## Issues by Severity")?;
        for (severity, count) in view.report.counts_by_severity.iter() {
            if count > 0 {
                writeln!(self.writer, "- {}: {}", severity.label(), count)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category_breakdown(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        if view.report.counts_by_category.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Issues by Category")?;
        for (category, count) in &view.report.counts_by_category {
            writeln!(self.writer, "- {}: {}", category.label(), count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        let recommendations = view.summary.top_recommendations(self.max_recommendations);
        if recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, recommendation) in recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, recommendation)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_detailed_issues(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        writeln!(self.writer, "## Detailed Issues")?;
        writeln!(self.writer)?;
        if let Some(filter) = describe_filter(&view.options.predicate) {
            writeln!(
                self.writer,
                "_Showing {} of {} issues ({})_",
                view.visible.len(),
                view.total_smells,
                filter
            )?;
            writeln!(self.writer)?;
        }

        for (file_path, smells) in group_by_file(&view.visible) {
            writeln!(self.writer, "### {}", file_heading(file_path))?;
            writeln!(self.writer)?;
            for smell in smells {
                writeln!(
                    self.writer,
                    "**Line {}** - {}: {}",
                    smell.line_number,
                    smell.severity.as_str().to_uppercase(),
                    smell.description
                )?;
                if smell.has_suggestion() {
                    writeln!(self.writer, "*Suggestion: {}*", smell.suggestion)?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    painter: Painter,
    max_recommendations: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, max_recommendations: usize) -> Self {
        Self {
            writer,
            painter: Painter::new(formatting),
            max_recommendations,
        }
    }

    pub fn plain(writer: W, max_recommendations: usize) -> Self {
        Self {
            writer,
            painter: Painter::plain(),
            max_recommendations,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        self.print_header(view)?;
        self.print_summary(view)?;
        self.print_breakdown(view)?;
        self.print_recommendations(view)?;
        self.print_issues(view)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.painter.header("Code Smell Report"))?;
        writeln!(self.writer, "{}", self.painter.header("================="))?;
        writeln!(
            self.writer,
            "{}",
            self.painter.dim(&format!(
                "Generated {}",
                view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.painter.bold("Summary:"))?;
        writeln!(
            self.writer,
            "  Quality score: {}/100",
            self.painter.score(view.summary.quality_score())
        )?;
        writeln!(self.writer, "  Total issues: {}", view.total_smells)?;
        writeln!(self.writer, "  Files affected: {}", view.report.unique_files)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_breakdown(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        if view.report.total_smells == 0 {
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Severity", "Count", "Category", "Count"]);

        let severities: Vec<(String, String)> = view
            .charts
            .severity_series
            .iter()
            .map(|entry| (entry.label.clone(), entry.value.to_string()))
            .collect();
        let categories: Vec<(String, String)> = view
            .charts
            .category_series
            .iter()
            .map(|entry| (entry.label.clone(), entry.value.to_string()))
            .collect();

        let rows = severities.len().max(categories.len());
        for i in 0..rows {
            let (sev_label, sev_count) = severities.get(i).cloned().unwrap_or_default();
            let (cat_label, cat_count) = categories.get(i).cloned().unwrap_or_default();
            table.add_row(vec![sev_label, sev_count, cat_label, cat_count]);
        }
        for index in [1, 3] {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_recommendations(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        let recommendations = view.summary.top_recommendations(self.max_recommendations);
        if recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", self.painter.bold("Recommendations:"))?;
        for recommendation in recommendations {
            writeln!(self.writer, "  - {recommendation}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_issues(&mut self, view: &DashboardView) -> anyhow::Result<()> {
        if view.visible.is_empty() {
            if view.total_smells > 0 {
                writeln!(self.writer, "No issues match the current filter.")?;
            }
            return Ok(());
        }

        let title = match describe_filter(&view.options.predicate) {
            Some(filter) => format!(
                "Issues ({} of {}, {}):",
                view.visible.len(),
                view.total_smells,
                filter
            ),
            None => format!("Issues ({} of {}):", view.visible.len(), view.total_smells),
        };
        writeln!(self.writer, "{}", self.painter.bold(&title))?;

        for (i, smell) in view.visible.iter().enumerate() {
            let tag = format!("[{}]", smell.severity.as_str().to_uppercase());
            writeln!(
                self.writer,
                "  {}. {} {} {} - {}",
                i + 1,
                self.painter.severity(smell.severity, &tag),
                smell.location(),
                self.painter.bold(&smell.smell_type),
                smell.description
            )?;
            if smell.has_suggestion() {
                writeln!(
                    self.writer,
                    "     {}",
                    self.painter.dim(&format!("Suggestion: {}", smell.suggestion))
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn file_heading(file_path: &str) -> &str {
    if file_path.is_empty() {
        "(unknown file)"
    } else {
        file_path
    }
}

/// Records grouped by file path, groups in first-seen order. Records keep
/// their relative order inside a group.
pub fn group_by_file(records: &[SmellRecord]) -> Vec<(&str, Vec<&SmellRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&SmellRecord>)> = Vec::new();
    for record in records {
        let path = record.file_path.as_str();
        match index.get(path) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(path, groups.len());
                groups.push((path, vec![record]));
            }
        }
    }
    groups
}

/// Human-readable description of the active filter clauses, if any.
pub fn describe_filter(predicate: &FilterPredicate) -> Option<String> {
    if predicate.is_identity() {
        return None;
    }
    let mut parts = Vec::new();
    if !predicate.severity.is_all() {
        parts.push(format!("severity={}", predicate.severity));
    }
    if !predicate.category.is_all() {
        parts.push(format!("category={}", predicate.category));
    }
    if !predicate.search_text.is_empty() {
        parts.push(format!("search={:?}", predicate.search_text));
    }
    Some(parts.join(", "))
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    max_recommendations: usize,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, max_recommendations)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(writer, formatting, max_recommendations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Severity};
    use crate::filter::Selection;
    use crate::pipeline::{build_dashboard, ViewOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn view(options: ViewOptions) -> DashboardView {
        let payload = json!({
            "smells": [
                {
                    "smellType": "Hardcoded Secret",
                    "description": "API key in source",
                    "severity": "critical",
                    "category": "security",
                    "lineNumber": 10,
                    "filePath": "app.py",
                    "suggestion": "Move it to the environment"
                },
                {
                    "smellType": "Long Line",
                    "description": "Line exceeds 120 characters",
                    "severity": "low",
                    "category": "style",
                    "lineNumber": 42,
                    "filePath": "app.py"
                },
                {
                    "smellType": "Deep Nesting",
                    "description": "Nesting depth 6",
                    "severity": "medium",
                    "category": "complexity",
                    "lineNumber": 7,
                    "filePath": "util.py"
                }
            ]
        });
        build_dashboard(&payload, &options).unwrap()
    }

    fn render(writer: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buffer = Vec::new();
        writer(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn markdown_groups_issues_by_file() {
        let view = view(ViewOptions::default());
        let output = render(|buf| MarkdownWriter::new(buf, 5).write_dashboard(&view));

        assert!(output.starts_with("# Code Quality Report\n"));
        assert!(output.contains("**Quality Score: 80/100**"));
        assert!(output.contains("**Total Issues: 3**"));
        assert!(output.contains("- Critical: 1\n- Medium: 1\n- Low: 1\n"));
        assert!(!output.contains("- High:"));
        assert_eq!(output.matches("### app.py").count(), 1);
        assert!(output.contains("**Line 10** - CRITICAL: API key in source\n*Suggestion: Move it to the environment*\n"));
        assert!(!output.contains("_Showing"));
    }

    #[test]
    fn markdown_keeps_one_heading_per_file_when_ranked() {
        let options = ViewOptions {
            ranked: true,
            ..Default::default()
        };
        let view = view(options);
        let files: Vec<_> = view.visible.iter().map(|s| s.file_path.as_str()).collect();
        assert_eq!(files, vec!["app.py", "util.py", "app.py"]);

        let output = render(|buf| MarkdownWriter::new(buf, 5).write_dashboard(&view));
        assert_eq!(output.matches("### app.py").count(), 1);
        assert_eq!(output.matches("### util.py").count(), 1);

        let app = output.find("### app.py").unwrap();
        let util = output.find("### util.py").unwrap();
        let line_10 = output.find("**Line 10**").unwrap();
        let line_42 = output.find("**Line 42**").unwrap();
        assert!(app < line_10 && line_10 < line_42 && line_42 < util);
    }

    #[test]
    fn group_by_file_uses_first_seen_order() {
        let record = |file: &str, line: u64| SmellRecord {
            file_path: file.to_string(),
            line_number: line,
            ..Default::default()
        };
        let records = vec![record("a.py", 1), record("b.py", 2), record("a.py", 3), record("", 4)];
        let groups = group_by_file(&records);

        let summary: Vec<(&str, Vec<u64>)> = groups
            .iter()
            .map(|(file, members)| (*file, members.iter().map(|r| r.line_number).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![("a.py", vec![1, 3]), ("b.py", vec![2]), ("", vec![4])]
        );
    }

    #[test]
    fn markdown_notes_active_filter() {
        let options = ViewOptions {
            predicate: FilterPredicate::all().with_category(Selection::Only(Category::Style)),
            ..Default::default()
        };
        let output = render(|buf| MarkdownWriter::new(buf, 5).write_dashboard(&view(options)));
        assert!(output.contains("_Showing 1 of 3 issues (category=style)_"));
        assert!(!output.contains("### util.py"));
        // Breakdown still covers every record.
        assert!(output.contains("- Medium: 1"));
    }

    #[test]
    fn markdown_limits_recommendations() {
        let view = view(ViewOptions::default());
        let output = render(|buf| MarkdownWriter::new(buf, 1).write_dashboard(&view));
        assert!(output.contains("1. "));
        assert!(!output.contains("\n2. "));
    }

    #[test]
    fn json_writer_emits_camel_case_view() {
        let view = view(ViewOptions::default());
        let output = render(|buf| JsonWriter::new(buf).write_dashboard(&view));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalSmells"], 3);
        assert_eq!(value["summary"]["qualityScore"], 80);
        assert_eq!(value["visible"][0]["smellType"], "Hardcoded Secret");
        assert_eq!(value["charts"]["severitySeries"][0]["label"], "Critical");
    }

    #[test]
    fn plain_terminal_output_has_no_escape_codes() {
        let view = view(ViewOptions::default());
        let output = render(|buf| TerminalWriter::plain(buf, 5).write_dashboard(&view));
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("Quality score: 80/100"));
        assert!(output.contains("1. [CRITICAL] app.py:10 Hardcoded Secret - API key in source"));
        assert!(output.contains("Suggestion: Move it to the environment"));
        assert!(output.contains("Severity"));
    }

    #[test]
    fn terminal_reports_empty_filter_result() {
        let options = ViewOptions {
            predicate: FilterPredicate::all().with_search("nothing matches this"),
            ..Default::default()
        };
        let output = render(|buf| TerminalWriter::plain(buf, 5).write_dashboard(&view(options)));
        assert!(output.contains("No issues match the current filter."));
    }

    #[test]
    fn describe_filter_lists_active_clauses() {
        assert_eq!(describe_filter(&FilterPredicate::all()), None);
        let predicate = FilterPredicate::all()
            .with_severity(Selection::Only(Severity::High))
            .with_search("token");
        assert_eq!(
            describe_filter(&predicate).as_deref(),
            Some("severity=high, search=\"token\"")
        );
    }
}
