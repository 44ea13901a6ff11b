// Application layer - Dashboard use cases
pub mod choropleth_service;
pub mod error;
pub mod weather_repository;
