//! HTML table and banner formatting for the dashboard.

use crate::domain::scan::TimeframeReport;

/// Minimal escaping for text interpolated into HTML.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Table of flagged rows only, or a note when nothing was flagged.
pub fn render_outlier_table(report: &TimeframeReport) -> String {
    let outliers = report.outliers();
    if outliers.is_empty() {
        return format!(
            "<p class=\"empty\">No outliers detected for {}.</p>\n",
            escape(&report.timeframe)
        );
    }

    let mut html = String::from(
        "<table>\n<thead><tr><th>Timestamp</th><th>Close</th><th>Return</th><th>Z-Score</th></tr></thead>\n<tbody>\n",
    );
    for point in outliers {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{:.6}</td><td>{:.2}</td></tr>\n",
            point.timestamp.format("%Y-%m-%d %H:%M:%S"),
            point.close,
            point.ret,
            point.z_score
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Per-timeframe closing banner with the latest timestamp and return.
pub fn render_summary_banner(report: &TimeframeReport) -> String {
    match report.latest() {
        Some(latest) => format!(
            "<div class=\"banner ok\">Latest Data Point ({}): {}, Return: {:.6}</div>\n",
            escape(&report.timeframe),
            latest.timestamp.format("%Y-%m-%d %H:%M:%S"),
            latest.ret
        ),
        None => format!(
            "<div class=\"banner warn\">No data points for {}.</div>\n",
            escape(&report.timeframe)
        ),
    }
}
