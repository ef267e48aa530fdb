// Renders the dashboard view model to a standalone HTML page
use crate::domain::dashboard::{Dashboard, EnergyChart, LightStatus, Metric, Reading};

const ALERT_COLOR: &str = "#dc3545";
const NORMAL_COLOR: &str = "#212529";

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PADDING: f64 = 32.0;
/// Lower bound for the chart's y axis maximum so quiet days don't look spiky
const CHART_MIN_Y_MAX: f64 = 2.5;

const STYLESHEET: &str = r#"
body { margin: 0; background-color: #f8f9fa; color: #212529; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }
.block-container { max-width: 1200px; margin: 0 auto; padding: 1rem; }
.columns { display: grid; grid-template-columns: 3fr 2fr; gap: 1rem; }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.card { background-color: white; border-radius: 10px; padding: 1.2rem; box-shadow: 0 2px 5px rgba(0,0,0,0.05); margin-bottom: 1rem; }
.dashboard-title { font-size: 1.8rem; font-weight: 600; margin-bottom: 1rem; color: #333; }
.last-update { text-align: right; color: #6c757d; font-size: 0.8rem; }
.sensor-label { font-size: 1rem; color: #6c757d; margin-bottom: 0.3rem; }
.sensor-value { font-size: 2rem; font-weight: 600; margin: 0 0 1rem 0; }
.sensor-value.small { font-size: 1.5rem; }
.card-title { font-size: 1.2rem; font-weight: 500; margin: 0 0 1rem 0; color: #444; }
.progress { height: 6px; background-color: #e9ecef; border-radius: 3px; overflow: hidden; margin-bottom: 1rem; }
.progress-fill { height: 100%; background-color: #0d6efd; }
.metric-label { font-size: 0.9rem; color: #6c757d; }
.metric-value { font-size: 1.8rem; font-weight: 500; }
.light-row { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.6rem; }
.status-indicator { display: inline-block; width: 12px; height: 12px; border-radius: 50%; margin-right: 8px; }
.status-on { background-color: #20c997; }
.status-off { background-color: #ced4da; }
.toggle { width: 100%; padding: 0.3rem 1.2rem; border: 1px solid #ced4da; border-radius: 6px; background: white; cursor: pointer; }
.thermostat-slider { width: 100%; }
.chart-line { fill: none; stroke: #0d6efd; stroke-width: 2; }
.chart-axis { stroke: #ced4da; stroke-width: 1; }
.chart-label { font-size: 10px; fill: #6c757d; }
"#;

pub fn dashboard_to_html(dashboard: &Dashboard) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🏡</text></svg>">
<style>{style}</style>
</head>
<body>
<div class="block-container">
<h1 class="dashboard-title">🏡 {title}</h1>
<p class="last-update">Last updated: {last_update}</p>
<div class="columns">
<div>
{environment}
{energy}
</div>
<div>
{lights}
{tips}
</div>
</div>
</div>
</body>
</html>
"#,
        title = escape_html(&dashboard.title),
        style = STYLESHEET,
        last_update = escape_html(&dashboard.last_update),
        environment = environment_card(dashboard),
        energy = energy_card(dashboard),
        lights = lights_card(&dashboard.lights),
        tips = tips_card(&dashboard.tips),
    )
}

fn environment_card(dashboard: &Dashboard) -> String {
    let thermostat = &dashboard.thermostat;
    format!(
        r#"<div class="card">
<h2 class="card-title">Environment</h2>
<div class="grid-2">
<div>{temperature}</div>
<div>{humidity}</div>
</div>
<p class="sensor-label">Thermostat Setting</p>
<p class="sensor-value small">{display}</p>
<form method="post" action="/thermostat">
<input class="thermostat-slider" type="range" name="value" min="{min}" max="{max}" step="1" value="{setpoint}" onchange="this.form.submit()">
<noscript><button class="toggle" type="submit">Set</button></noscript>
</form>
</div>"#,
        temperature = reading(&dashboard.temperature),
        humidity = reading(&dashboard.humidity),
        display = escape_html(&thermostat.display),
        min = thermostat.min,
        max = thermostat.max,
        setpoint = thermostat.setpoint,
    )
}

fn reading(reading: &Reading) -> String {
    let color = if reading.alert { ALERT_COLOR } else { NORMAL_COLOR };
    format!(
        r#"<p class="sensor-label">{label}</p>
<p class="sensor-value" style="color: {color};">{display}</p>
<div class="progress"><div class="progress-fill" style="width: {percent:.0}%;"></div></div>"#,
        label = escape_html(&reading.label),
        display = escape_html(&reading.display),
        percent = reading.gauge * 100.0,
    )
}

fn energy_card(dashboard: &Dashboard) -> String {
    format!(
        r#"<div class="card">
<h2 class="card-title">Energy Overview</h2>
<div class="grid-2">
<div>{daily}</div>
<div>{weekly}</div>
</div>
{chart}
</div>"#,
        daily = metric(&dashboard.daily_energy),
        weekly = metric(&dashboard.weekly_energy),
        chart = chart_svg(&dashboard.chart),
    )
}

fn metric(metric: &Metric) -> String {
    format!(
        r#"<div class="metric-label">{}</div><div class="metric-value">{}</div>"#,
        escape_html(&metric.label),
        escape_html(&metric.display),
    )
}

/// Inline SVG line chart, one point per hour
fn chart_svg(chart: &EnergyChart) -> String {
    let plot_width = CHART_WIDTH - 2.0 * CHART_PADDING;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let baseline = CHART_HEIGHT - CHART_PADDING;
    let y_max = chart
        .points
        .iter()
        .map(|p| p.kwh)
        .fold(CHART_MIN_Y_MAX, f64::max);
    let x_step = plot_width / (chart.points.len().max(2) - 1) as f64;

    let coords: Vec<String> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = CHART_PADDING + i as f64 * x_step;
            let y = baseline - (p.kwh / y_max) * plot_height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    let labels: String = chart
        .points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0)
        .map(|(i, p)| {
            format!(
                r#"<text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                CHART_PADDING + i as f64 * x_step,
                CHART_HEIGHT - CHART_PADDING / 3.0,
                p.label(),
            )
        })
        .collect();

    format!(
        r#"<svg class="energy-chart" viewBox="0 0 {w} {h}" role="img" aria-label="{name}">
<line class="chart-axis" x1="{p}" y1="{base}" x2="{right}" y2="{base}"/>
<text class="chart-label" x="{p}" y="{label_y}">{name}</text>
<polyline class="chart-line" points="{points}"/>
{labels}
</svg>"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        p = CHART_PADDING,
        base = baseline,
        right = CHART_WIDTH - CHART_PADDING,
        label_y = CHART_PADDING / 2.0,
        name = escape_html(&chart.series_name),
        points = coords.join(" "),
        labels = labels,
    )
}

fn lights_card(lights: &[LightStatus]) -> String {
    let rows: String = lights
        .iter()
        .map(|light| {
            let status_class = if light.on { "status-on" } else { "status-off" };
            format!(
                r#"<div class="light-row">
<div><span class="status-indicator {status_class}"></span> {label}: {status}</div>
<form method="post" action="/lights/{key}/toggle"><button class="toggle" type="submit">Toggle</button></form>
</div>"#,
                label = escape_html(&light.label),
                status = light.status_text(),
                key = light.room.key(),
            )
        })
        .collect();

    format!(
        r#"<div class="card">
<h2 class="card-title">Light Controls</h2>
{rows}
</div>"#
    )
}

fn tips_card(tips: &[String]) -> String {
    let items: String = tips
        .iter()
        .map(|tip| format!("<li>{}</li>", escape_html(tip)))
        .collect();

    format!(
        r#"<div class="card">
<h2 class="card-title">Energy Saving Tips</h2>
<ul>{items}</ul>
</div>"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
