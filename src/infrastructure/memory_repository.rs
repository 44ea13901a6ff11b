// In-memory repository backed by the startup CSV and GeoJSON files
use crate::application::weather_repository::WeatherRepository;
use crate::domain::geometry::DistrictGeometry;
use crate::domain::weather::{Observation, WeatherTable};
use crate::infrastructure::config::DataSettings;
use crate::infrastructure::csv_loader::load_observations;
use crate::infrastructure::geojson_loader::load_geometry;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct InMemoryWeatherRepository {
    table: WeatherTable,
    geometry: DistrictGeometry,
}

impl InMemoryWeatherRepository {
    pub fn new(table: WeatherTable, geometry: DistrictGeometry) -> Self {
        Self { table, geometry }
    }

    /// Read both data files; either one missing is fatal
    pub fn load(settings: &DataSettings) -> Result<Self> {
        let table = WeatherTable::new(load_observations(&settings.observations)?);
        let geometry = load_geometry(&settings.geometry, &settings.feature_id_key)?;

        match (table.years().first(), table.years().last()) {
            (Some(first), Some(last)) => tracing::info!(
                "Loaded {} observations spanning {}-{} from {:?}",
                table.len(),
                first,
                last,
                settings.observations
            ),
            _ => tracing::warn!("No observations found in {:?}", settings.observations),
        }
        tracing::info!(
            "Loaded {} district boundaries from {:?}",
            geometry.len(),
            settings.geometry
        );

        Ok(Self::new(table, geometry))
    }
}

impl WeatherRepository for InMemoryWeatherRepository {
    fn years(&self) -> &[i32] {
        self.table.years()
    }

    fn observations_for_year(&self, year: i32) -> Vec<&Observation> {
        self.table.rows_for_year(year)
    }

    fn geometry(&self) -> &DistrictGeometry {
        &self.geometry
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::infrastructure::csv_loader::read_observations;
    use crate::infrastructure::geojson_loader::read_geometry;

    pub const OBSERVATIONS: &str = "\
,zila,year,max_temp,min_temp,humidity,rainfall
0,A,2011,30.0,18.0,80.0,150.0
1,B,2011,34.0,21.0,75.0,210.0
2,A,2012,31.0,19.0,81.0,120.0
3,B,2012,33.0,20.0,77.0,260.0
4,C,2012,35.5,22.5,70.0,90.0
5,A,2013,29.5,17.5,83.0,300.0
6,C,2013,36.0,23.0,68.0,80.0
";

    pub const DISTRICTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "ADM2_EN": "A" },
              "geometry": { "type": "Polygon", "coordinates": [[[90.0, 22.0], [91.0, 22.0], [91.0, 23.0], [90.0, 23.0], [90.0, 22.0]]] } },
            { "type": "Feature", "properties": { "ADM2_EN": "B" },
              "geometry": { "type": "Polygon", "coordinates": [[[91.0, 22.0], [92.0, 22.0], [92.0, 23.0], [91.0, 23.0], [91.0, 22.0]]] } },
            { "type": "Feature", "properties": { "ADM2_EN": "C" },
              "geometry": { "type": "Polygon", "coordinates": [[[90.0, 23.0], [91.0, 23.0], [91.0, 24.0], [90.0, 24.0], [90.0, 23.0]]] } }
        ]
    }"#;

    pub fn sample_repository() -> InMemoryWeatherRepository {
        let table = WeatherTable::new(read_observations(OBSERVATIONS.as_bytes()).unwrap());
        let geometry = read_geometry(DISTRICTS.as_bytes(), "ADM2_EN").unwrap();
        InMemoryWeatherRepository::new(table, geometry)
    }
}
