// Application state for HTTP handlers
use crate::application::choropleth_service::ChoroplethService;
use crate::infrastructure::svg_renderer::SvgOptions;

#[derive(Clone)]
pub struct AppState {
    pub choropleth_service: ChoroplethService,
    pub svg_options: SvgOptions,
}
