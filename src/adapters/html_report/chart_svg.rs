//! SVG scatter chart rendering for the dashboard.
//!
//! One chart per timeframe: return vs. time, inliers blue, outliers red,
//! dashed reference lines at the mean and at mean ± threshold·sigma, and the
//! latest observation re-drawn as a labelled yellow marker. Each point
//! carries a `<title>` tooltip with its timestamp and return.
//!
//! Non-finite returns (a zero previous close produces ±inf) have no chart
//! position and are skipped when plotting; they keep their slot on the x
//! axis so spacing still reflects series order.

use crate::domain::scan::TimeframeReport;

const WIDTH: f64 = 860.0;
const HEIGHT: f64 = 340.0;
const PADDING: f64 = 50.0;

const INLIER_COLOR: &str = "#1f77b4";
const OUTLIER_COLOR: &str = "#d62728";
const MEAN_COLOR: &str = "#00CC96";
const BOUND_COLOR: &str = "#FF5733";

pub fn render_return_scatter(report: &TimeframeReport) -> String {
    if report.points.is_empty() {
        return String::new();
    }

    let (lower, upper) = report.stats.bounds(report.threshold);

    // The y range spans every finite return plus the finite reference
    // levels, so the dashed lines always land inside the plot.
    let mut ys: Vec<f64> = report
        .points
        .iter()
        .map(|p| p.ret)
        .filter(|r| r.is_finite())
        .collect();
    for level in [report.stats.mu, lower, upper] {
        if level.is_finite() {
            ys.push(level);
        }
    }
    if ys.is_empty() {
        return String::new();
    }

    let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;

    let range = max_y - min_y;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = if report.points.len() > 1 {
        plot_width / (report.points.len() - 1) as f64
    } else {
        0.0
    };

    let x_for = |i: usize| PADDING + i as f64 * scale_x;
    let y_for = |v: f64| HEIGHT - PADDING - (v - min_y) * scale_y;

    let mut svg = format!(
        r#"<svg viewBox="0 0 {WIDTH:.0} {HEIGHT:.0}" xmlns="http://www.w3.org/2000/svg" role="img">
<rect width="{WIDTH:.0}" height="{HEIGHT:.0}" fill="white"/>
"#
    );

    // Axes
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#9ca3af\"/>\n",
        PADDING,
        PADDING,
        PADDING,
        HEIGHT - PADDING
    ));
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#9ca3af\"/>\n",
        PADDING,
        HEIGHT - PADDING,
        WIDTH - PADDING,
        HEIGHT - PADDING
    ));

    // Y extent labels
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{:.4}</text>\n",
        PADDING - 6.0,
        PADDING + 4.0,
        max_y
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{:.4}</text>\n",
        PADDING - 6.0,
        HEIGHT - PADDING + 4.0,
        min_y
    ));

    // X extent labels: first and last timestamp of the series
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"start\">{}</text>\n",
        PADDING,
        HEIGHT - PADDING + 18.0,
        report.points[0].timestamp.format("%Y-%m-%d %H:%M")
    ));
    if report.points.len() > 1 {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{}</text>\n",
            WIDTH - PADDING,
            HEIGHT - PADDING + 18.0,
            report
                .points
                .last()
                .unwrap()
                .timestamp
                .format("%Y-%m-%d %H:%M")
        ));
    }

    // Reference lines
    let reference_lines = [
        (report.stats.mu, MEAN_COLOR, "Mean"),
        (upper, BOUND_COLOR, "Upper Bound"),
        (lower, BOUND_COLOR, "Lower Bound"),
    ];
    for (level, color, label) in reference_lines {
        if !level.is_finite() {
            continue;
        }
        let y = y_for(level);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{color}\" stroke-dasharray=\"6 4\"/>\n",
            PADDING,
            WIDTH - PADDING,
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{color}\" text-anchor=\"end\">{label} ({})</text>\n",
            WIDTH - PADDING,
            y - 4.0,
            report.timeframe
        ));
    }

    // Scatter points
    for (i, point) in report.points.iter().enumerate() {
        if !point.ret.is_finite() {
            continue;
        }
        let color = if point.outlier {
            OUTLIER_COLOR
        } else {
            INLIER_COLOR
        };
        svg.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{color}\"><title>{} return {:.6}</title></circle>\n",
            x_for(i),
            y_for(point.ret),
            point.timestamp.format("%Y-%m-%d %H:%M"),
            point.ret
        ));
    }

    // Latest observation: yellow marker with a black ring and a timestamp
    // label, drawn last so it sits on top.
    if let Some(latest) = report.latest() {
        if latest.ret.is_finite() {
            let x = x_for(report.points.len() - 1);
            let y = y_for(latest.ret);
            svg.push_str(&format!(
                "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"6\" fill=\"yellow\" stroke=\"black\" stroke-width=\"2\"/>\n"
            ));
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{}</text>\n",
                y - 12.0,
                latest.timestamp.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}
