//! HTML dashboard generation.
//!
//! Orchestrates placeholder resolution: takes the built-in HTML template,
//! resolves all `{{PLACEHOLDER}}` markers by calling helpers from
//! `chart_svg` and `tables`, and writes the final self-contained page.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use std::fs;
use std::path::Path;

use crate::domain::error::RetscanError;
use crate::domain::outliers::DEFAULT_THRESHOLD;
use crate::domain::scan::TimeframeReport;
use crate::ports::report_port::ReportPort;

/// Context for resolving template placeholders.
pub struct DashboardContext<'a> {
    pub reports: &'a [TimeframeReport],
    pub title: String,
}

/// Resolve all `{{PLACEHOLDER}}`s in the template and return the final HTML.
pub fn resolve(template: &str, ctx: &DashboardContext) -> String {
    let mut output = template.to_string();

    output = output.replace("{{TITLE}}", &ctx.title);

    let threshold = ctx
        .reports
        .first()
        .map(|r| r.threshold)
        .unwrap_or(DEFAULT_THRESHOLD);
    output = output.replace("{{THRESHOLD}}", &format!("{threshold}"));

    let mut outlier_sections = String::new();
    let mut chart_sections = String::new();
    let mut banners = String::new();

    for report in ctx.reports {
        outlier_sections.push_str(&format!("<h3>{}</h3>\n", report.timeframe));
        outlier_sections.push_str(&tables::render_outlier_table(report));

        chart_sections.push_str(&format!("<h3>{}</h3>\n", report.timeframe));
        let svg = chart_svg::render_return_scatter(report);
        if svg.is_empty() {
            chart_sections.push_str("<p class=\"empty\">No data to chart.</p>\n");
        } else {
            chart_sections.push_str(&svg);
        }

        banners.push_str(&tables::render_summary_banner(report));
    }

    output = output.replace("{{OUTLIER_SECTIONS}}", &outlier_sections);
    output = output.replace("{{CHART_SECTIONS}}", &chart_sections);
    output = output.replace("{{SUMMARY_BANNERS}}", &banners);

    output
}

pub struct HtmlReportAdapter {
    title: String,
}

impl HtmlReportAdapter {
    pub fn new(symbol: &str) -> Self {
        Self {
            title: format!("{symbol} Return Outlier Detection"),
        }
    }
}

impl ReportPort for HtmlReportAdapter {
    fn write(
        &self,
        reports: &[TimeframeReport],
        output_path: &str,
    ) -> Result<(), RetscanError> {
        let ctx = DashboardContext {
            reports,
            title: self.title.clone(),
        };
        let html = resolve(default_template::template(), &ctx);

        let path = Path::new(output_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, html)?;
        Ok(())
    }
}
