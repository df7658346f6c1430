use super::{configured_color_mode, resolve_config};
use crate::config::{max_recommendations, SmelldashConfig};
use crate::filter::FilterPredicate;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{create_writer, ensure_dir, read_payload, OutputFormat};
use crate::pipeline::{build_dashboard, ViewOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct ReportConfig {
    pub payload: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub predicate: FilterPredicate,
    pub top: Option<usize>,
    pub ranked: bool,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

impl ReportConfig {
    /// CLI flags first, then `[display]`, then built-in defaults.
    pub fn view_options(&self, file: &SmelldashConfig) -> ViewOptions {
        let display = file.display();
        ViewOptions {
            predicate: self.predicate.clone(),
            ranked: self.ranked || display.ranked,
            top: self.top.or(display.top),
        }
    }

    pub fn resolved_format(&self, file: &SmelldashConfig) -> OutputFormat {
        self.format
            .or(file.display().format)
            .unwrap_or_default()
    }

    pub fn formatting(&self, file: &SmelldashConfig) -> FormattingConfig {
        if self.plain {
            return FormattingConfig::plain();
        }
        let mut formatting = FormattingConfig::from_env_with(configured_color_mode(file));
        // Terminal detection looks at stdout, which says nothing about a file.
        if self.output.is_some() && formatting.color == ColorMode::Auto {
            formatting.color = ColorMode::Never;
        }
        formatting
    }
}

/// Buffered file output, or stdout when no path is given. Writers flush when done.
pub fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn handle_report(report: ReportConfig) -> Result<()> {
    let file_config = resolve_config(report.config.as_deref())?;

    let payload = read_payload(&report.payload)
        .with_context(|| format!("Failed to read payload {}", report.payload.display()))?;
    let view = build_dashboard(&payload, &report.view_options(&file_config))
        .context("Failed to build dashboard")?;

    let sink = open_sink(report.output.as_deref())?;

    let mut writer = create_writer(
        report.resolved_format(&file_config),
        sink,
        report.formatting(&file_config),
        max_recommendations(&file_config),
    );
    writer.write_dashboard(&view)?;

    if let Some(path) = &report.output {
        log::info!("Wrote report to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use serde_json::json;
    use tempfile::TempDir;

    fn report(format: Option<OutputFormat>) -> ReportConfig {
        ReportConfig {
            payload: PathBuf::from("payload.json"),
            format,
            output: None,
            predicate: FilterPredicate::all(),
            top: None,
            ranked: false,
            config: None,
            plain: false,
        }
    }

    #[test]
    fn cli_format_beats_config_format() {
        let file = parse_and_validate_config("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(report(None).resolved_format(&file), OutputFormat::Json);
        assert_eq!(
            report(Some(OutputFormat::Markdown)).resolved_format(&file),
            OutputFormat::Markdown
        );
        assert_eq!(
            report(None).resolved_format(&SmelldashConfig::default()),
            OutputFormat::Terminal
        );
    }

    #[test]
    fn config_supplies_top_and_ranked() {
        let file = parse_and_validate_config("[display]\ntop = 4\nranked = true\n").unwrap();
        let options = report(None).view_options(&file);
        assert_eq!(options.top, Some(4));
        assert!(options.ranked);

        let mut explicit = report(None);
        explicit.top = Some(1);
        assert_eq!(explicit.view_options(&file).top, Some(1));
    }

    #[test]
    fn plain_flag_disables_color() {
        let mut plain = report(None);
        plain.plain = true;
        assert_eq!(
            plain.formatting(&SmelldashConfig::default()).color,
            ColorMode::Never
        );
    }

    #[test]
    fn file_sink_holds_full_report_once_written() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/report.md");
        let view = build_dashboard(
            &json!({"smells": [{"smellType": "Eval Call", "severity": "critical", "filePath": "app.py"}]}),
            &ViewOptions::default(),
        )
        .unwrap();

        let sink = open_sink(Some(&path)).unwrap();
        let mut writer = create_writer(OutputFormat::Markdown, sink, FormattingConfig::plain(), 3);
        writer.write_dashboard(&view).unwrap();

        // The writer is still alive, so only an explicit flush puts the text on disk.
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Code Quality Report"));
        assert!(written.contains("### app.py"));
        assert!(written.contains("Eval Call"));
        drop(writer);
    }
}
