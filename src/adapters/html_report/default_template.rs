//! Built-in HTML dashboard template with `{{PLACEHOLDER}}` substitution.

pub fn template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 960px; color: #111827; }
  h1 { font-size: 1.6rem; }
  h2 { font-size: 1.2rem; margin-top: 2rem; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.3rem; }
  h3 { font-size: 1rem; margin-top: 1.2rem; }
  table { border-collapse: collapse; width: 100%; font-size: 0.85rem; }
  th, td { border: 1px solid #e5e7eb; padding: 0.35rem 0.6rem; text-align: right; }
  th { background: #f3f4f6; }
  td:first-child, th:first-child { text-align: left; }
  svg { width: 100%; height: auto; border: 1px solid #e5e7eb; margin-top: 0.5rem; }
  .empty { color: #6b7280; font-style: italic; }
  .banner { padding: 0.6rem 1rem; border-radius: 6px; margin-top: 0.6rem; font-weight: 600; }
  .banner.ok { background: #dcfce7; color: #166534; }
  .banner.warn { background: #fef3c7; color: #92400e; }
  .meta { color: #6b7280; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<p class="meta">Outlier threshold: {{THRESHOLD}} standard deviations. Sample (N&minus;1) standard deviation.</p>

<h2>Outliers Found</h2>
{{OUTLIER_SECTIONS}}

<h2>Return Charts</h2>
{{CHART_SECTIONS}}

<h2>Latest Data</h2>
{{SUMMARY_BANNERS}}
</body>
</html>
"#
}
