// Infrastructure layer - File loading, configuration and output adapters
pub mod config;
pub mod csv_loader;
pub mod geojson_loader;
pub mod http_response;
pub mod memory_repository;
pub mod svg_renderer;
