// Repository trait for weather data access
use crate::domain::geometry::DistrictGeometry;
use crate::domain::weather::Observation;

/// Read-only access to the observation table and district boundaries.
/// Both are loaded once and never change afterwards.
pub trait WeatherRepository: Send + Sync {
    /// Distinct observed years, ascending
    fn years(&self) -> &[i32];

    /// Rows observed in `year`; empty when the year is not present
    fn observations_for_year(&self, year: i32) -> Vec<&Observation>;

    fn geometry(&self) -> &DistrictGeometry;
}
