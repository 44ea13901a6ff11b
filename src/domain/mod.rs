// Domain layer - Weather data, metrics and map models
pub mod choropleth;
pub mod color_scale;
pub mod geometry;
pub mod metric;
pub mod weather;
