// HTTP request handlers
use crate::application::choropleth_service::RenderedDashboard;
use crate::application::error::DashboardError;
use crate::domain::metric::Metric;
use crate::infrastructure::http_response::svg_response;
use crate::infrastructure::svg_renderer::render_svg;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shown in place of the average when the selected year has no values
const NO_AVERAGE: &str = "n/a";

/// Raw selector values; both are validated by the service so that bad input
/// gets the JSON error body
#[derive(Debug, Default, Deserialize)]
pub struct ChoroplethQuery {
    pub metric: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RangeBody {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct ChoroplethResponse {
    pub metric: &'static str,
    pub year: i32,
    pub title: &'static str,
    pub average: String,
    pub unit: &'static str,
    pub range: Option<RangeBody>,
    pub figure: String,
}

#[derive(Debug, Serialize)]
pub struct MetricInfo {
    pub key: &'static str,
    pub option: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub color_scale: &'static str,
}

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&metric_infos(), state.choropleth_service.years()))
}

pub async fn list_metrics() -> Json<Vec<MetricInfo>> {
    Json(metric_infos())
}

pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    let years = state.choropleth_service.years();
    Json(YearsResponse {
        years: years.to_vec(),
        min: years.first().copied(),
        max: years.last().copied(),
    })
}

/// Map, average and unit for one selection
pub async fn choropleth(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChoroplethQuery>,
) -> Result<Json<ChoroplethResponse>, DashboardError> {
    let service = &state.choropleth_service;
    let selection = service.selection(query.metric.as_deref(), query.year.as_deref())?;
    let rendered = service.render(selection);
    let figure = render_svg(&rendered.map, &state.svg_options);

    Ok(Json(to_response(rendered, figure)))
}

/// The map alone, as an SVG document
pub async fn choropleth_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChoroplethQuery>,
) -> Result<impl IntoResponse, DashboardError> {
    let service = &state.choropleth_service;
    let selection = service.selection(query.metric.as_deref(), query.year.as_deref())?;
    let rendered = service.render(selection);

    Ok(svg_response(render_svg(&rendered.map, &state.svg_options)))
}

fn to_response(rendered: RenderedDashboard<'_>, figure: String) -> ChoroplethResponse {
    ChoroplethResponse {
        metric: rendered.selection.metric.key(),
        year: rendered.selection.year,
        title: rendered.map.title,
        average: rendered
            .average
            .map(|avg| avg.to_string())
            .unwrap_or_else(|| NO_AVERAGE.to_string()),
        unit: rendered.unit,
        range: rendered.map.range.map(|r| RangeBody { min: r.min, max: r.max }),
        figure,
    }
}

fn metric_infos() -> Vec<MetricInfo> {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let d = metric.descriptor();
            MetricInfo {
                key: d.key,
                option: d.option,
                title: d.title,
                unit: d.unit,
                color_scale: d.scale.name(),
            }
        })
        .collect()
}
