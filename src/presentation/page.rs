// Dashboard page served at `/`
use crate::presentation::handlers::MetricInfo;
use std::fmt::Write;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Bangladesh Interactive Map</title>
<style>
  body { font-family: sans-serif; margin: 30px; }
  h1 { color: #346eeb; margin-bottom: 10px; }
  .subtitle { color: #8f939c; }
  .controls { display: flex; gap: 40px; padding: 30px 0; }
  .average-label { font-weight: bold; text-transform: uppercase; }
  #average { font-size: 30px; }
  #unit { font-size: 10px; text-transform: uppercase; }
  #year { width: 60%; margin: 10px 20%; }
</style>
</head>
<body>
<h1>Bangladesh Interactive Map</h1>
<p class="subtitle">Choropleth (heatmap) of weather data from 2011 Census by Bangladesh Bureau of Statistics</p>
<hr>
<div class="controls">
  <div>
    <div>Plot type:</div>
    <select id="metric">
@@OPTIONS@@
    </select>
  </div>
  <div>
    <div class="average-label">Average</div>
    <div id="average"></div>
    <div id="unit"></div>
  </div>
</div>
<div id="map"></div>
@@SLIDER@@
<hr>
<small>Built with axum</small>
<script>
  const metric = document.getElementById("metric");
  const year = document.getElementById("year");
  const yearLabel = document.getElementById("year-label");

  async function refresh() {
    if (!year.value) {
      return;
    }
    yearLabel.textContent = year.value;
    const params = new URLSearchParams({ metric: metric.value, year: year.value });
    const response = await fetch("/api/choropleth?" + params);
    const body = await response.json();
    if (!response.ok) {
      document.getElementById("map").textContent = body.error;
      return;
    }
    document.getElementById("map").innerHTML = body.figure;
    document.getElementById("average").textContent = body.average;
    document.getElementById("unit").textContent = body.unit;
  }

  metric.addEventListener("change", refresh);
  year.addEventListener("input", refresh);
  refresh();
</script>
</body>
</html>
"#;

pub fn render_page(metrics: &[MetricInfo], years: &[i32]) -> String {
    let mut options = String::new();
    for (i, metric) in metrics.iter().enumerate() {
        let selected = if i == 0 { " selected" } else { "" };
        let _ = writeln!(
            options,
            r#"      <option value="{}"{}>{}</option>"#,
            metric.key, selected, metric.option
        );
    }

    TEMPLATE
        .replace("@@OPTIONS@@", options.trim_end())
        .replace("@@SLIDER@@", &slider(years))
}

fn slider(years: &[i32]) -> String {
    let (Some(min), Some(max)) = (years.first(), years.last()) else {
        return r#"<p id="year-label">No observations loaded</p><input id="year" type="hidden" value="">"#.to_string();
    };

    let mut marks = String::new();
    for year in years {
        let _ = write!(marks, r#"<option value="{year}" label="{year}"></option>"#);
    }

    format!(
        r#"<div><input id="year" type="range" min="{min}" max="{max}" step="1" value="{min}" list="years"><span id="year-label">{min}</span></div>
<datalist id="years">{marks}</datalist>"#
    )
}
