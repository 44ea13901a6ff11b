// Choropleth service - Use case for rendering the map for one selection
use crate::application::error::DashboardError;
use crate::application::weather_repository::WeatherRepository;
use crate::domain::choropleth::{ChoroplethMap, build_map};
use crate::domain::metric::Metric;
use crate::domain::weather::{SelectionState, rounded_mean};
use std::sync::Arc;

/// Everything the dashboard shows for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDashboard<'a> {
    pub selection: SelectionState,
    pub map: ChoroplethMap<'a>,
    /// Rounded mean of the metric; `None` when no row of the year has a value
    pub average: Option<i64>,
    pub unit: &'static str,
}

#[derive(Clone)]
pub struct ChoroplethService {
    repository: Arc<dyn WeatherRepository>,
}

impl ChoroplethService {
    pub fn new(repository: Arc<dyn WeatherRepository>) -> Self {
        Self { repository }
    }

    pub fn years(&self) -> &[i32] {
        self.repository.years()
    }

    /// Resolve raw selector values. A missing or empty metric falls back to
    /// `max_temp` and a missing or empty year to the earliest observed one.
    pub fn selection(
        &self,
        metric: Option<&str>,
        year: Option<&str>,
    ) -> Result<SelectionState, DashboardError> {
        let metric = match metric.map(str::trim) {
            None | Some("") => Metric::default(),
            Some(key) => Metric::from_key(key)
                .ok_or_else(|| DashboardError::UnknownMetric(key.to_string()))?,
        };
        let year = match year.map(str::trim) {
            None | Some("") => *self.years().first().ok_or(DashboardError::NoData)?,
            Some(raw) => raw
                .parse()
                .map_err(|_| DashboardError::InvalidYear(raw.to_string()))?,
        };
        Ok(SelectionState::new(metric, year))
    }

    /// Filter to the selected year, average the metric and build the map.
    ///
    /// A year without observations yields a map with every district blank
    /// and no average.
    pub fn render(&self, selection: SelectionState) -> RenderedDashboard<'_> {
        let rows = self.repository.observations_for_year(selection.year);
        let average = rounded_mean(&rows, selection.metric);
        let map = build_map(&rows, self.repository.geometry(), selection.metric);

        tracing::debug!(
            "Rendered {} for {}: {} rows, {} districts shaded, average {:?}",
            selection.metric.key(),
            selection.year,
            rows.len(),
            map.matched().count(),
            average
        );

        RenderedDashboard {
            selection,
            map,
            average,
            unit: selection.metric.unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color_scale::NO_DATA;
    use crate::domain::weather::WeatherTable;
    use crate::infrastructure::csv_loader::read_observations;
    use crate::infrastructure::geojson_loader::read_geometry;
    use crate::infrastructure::memory_repository::InMemoryWeatherRepository;
    use crate::infrastructure::memory_repository::fixtures::{DISTRICTS, sample_repository};

    fn service() -> ChoroplethService {
        ChoroplethService::new(Arc::new(sample_repository()))
    }

    #[test]
    fn test_two_district_average() {
        let service = service();
        let rendered = service.render(SelectionState::new(Metric::MaxTemp, 2011));

        assert_eq!(rendered.average, Some(32));
        assert_eq!(rendered.unit, "degrees centigrade");
        assert_eq!(rendered.map.matched().count(), 2);
    }

    #[test]
    fn test_average_matches_manual_mean_for_every_metric_and_year() {
        let service = service();
        let repository = sample_repository();

        for &year in service.years() {
            for metric in Metric::ALL {
                let rows = repository.observations_for_year(year);
                let values: Vec<f64> = rows.iter().filter_map(|r| r.value(metric)).collect();
                let manual = values.iter().sum::<f64>() / values.len() as f64;

                let rendered = service.render(SelectionState::new(metric, year));
                assert_eq!(rendered.average, Some(manual.round_ties_even() as i64));
                assert_eq!(rendered.unit, metric.unit());
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let service = service();
        let selection = SelectionState::new(Metric::Humidity, 2012);
        assert_eq!(service.render(selection), service.render(selection));
    }

    #[test]
    fn test_first_and_last_year_have_rows() {
        let service = service();
        let (first, last) = (service.years()[0], *service.years().last().unwrap());

        for year in [first, last] {
            let rendered = service.render(SelectionState::new(Metric::Rainfall, year));
            assert!(rendered.average.is_some());
            assert!(rendered.map.matched().count() > 0);
        }
    }

    #[test]
    fn test_missing_year_renders_blank_map_without_average() {
        let service = service();
        let rendered = service.render(SelectionState::new(Metric::MaxTemp, 1999));

        assert_eq!(rendered.average, None);
        assert_eq!(rendered.unit, "degrees centigrade");
        assert_eq!(rendered.map.range, None);
        assert!(rendered.map.regions.iter().all(|r| r.fill == NO_DATA));
    }

    #[test]
    fn test_selection_defaults() {
        let service = service();

        assert_eq!(
            service.selection(None, None),
            Ok(SelectionState::new(Metric::MaxTemp, 2011))
        );
        assert_eq!(
            service.selection(Some(""), Some("2012")),
            Ok(SelectionState::new(Metric::MaxTemp, 2012))
        );
        assert_eq!(
            service.selection(Some("rainfall"), None),
            Ok(SelectionState::new(Metric::Rainfall, 2011))
        );
        assert_eq!(
            service.selection(Some("humidity"), Some("")),
            Ok(SelectionState::new(Metric::Humidity, 2011))
        );
    }

    #[test]
    fn test_selection_rejects_unknown_metric() {
        let service = service();
        assert_eq!(
            service.selection(Some("pressure"), Some("2011")),
            Err(DashboardError::UnknownMetric("pressure".to_string()))
        );
    }

    #[test]
    fn test_selection_rejects_non_numeric_year() {
        let service = service();
        assert_eq!(
            service.selection(Some("max_temp"), Some("abc")),
            Err(DashboardError::InvalidYear("abc".to_string()))
        );
        assert_eq!(
            service.selection(None, Some("2011.5")),
            Err(DashboardError::InvalidYear("2011.5".to_string()))
        );
    }

    #[test]
    fn test_nan_and_blank_cells_do_not_poison_the_average() {
        let data = "\
,zila,year,max_temp,min_temp,humidity,rainfall
0,A,2011,30.0,18.0,80.0,NaN
1,B,2011,34.0,21.0,75.0,210.0
2,C,2011,32.0,19.0,,
";
        let table = WeatherTable::new(read_observations(data.as_bytes()).unwrap());
        let geometry = read_geometry(DISTRICTS.as_bytes(), "ADM2_EN").unwrap();
        let repository = InMemoryWeatherRepository::new(table, geometry);
        let service = ChoroplethService::new(Arc::new(repository));

        let rendered = service.render(SelectionState::new(Metric::Rainfall, 2011));
        assert_eq!(rendered.average, Some(210));
        assert_eq!(rendered.map.matched().count(), 1);
        let blank: Vec<&str> = rendered
            .map
            .regions
            .iter()
            .filter(|r| r.fill == NO_DATA)
            .map(|r| r.district)
            .collect();
        assert_eq!(blank, vec!["A", "C"]);

        let rendered = service.render(SelectionState::new(Metric::Humidity, 2011));
        assert_eq!(rendered.average, Some(78));
    }
}
