// Weather observation domain models
use super::metric::Metric;
use serde::Deserialize;

/// One district's weather statistics for one year. Blank cells are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "zila", alias = "district")]
    pub district: String,
    pub year: i32,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
}

impl Observation {
    /// The metric's value, or `None` when the cell is blank or not finite
    pub fn value(&self, metric: Metric) -> Option<f64> {
        let cell = match metric {
            Metric::MaxTemp => self.max_temp,
            Metric::MinTemp => self.min_temp,
            Metric::Humidity => self.humidity,
            Metric::Rainfall => self.rainfall,
        };
        cell.filter(|v| v.is_finite())
    }
}

/// Immutable table of observations, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct WeatherTable {
    rows: Vec<Observation>,
    years: Vec<i32>,
}

impl WeatherTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        Self { rows, years }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Distinct years present in the table, ascending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn rows_for_year(&self, year: i32) -> Vec<&Observation> {
        self.rows.iter().filter(|r| r.year == year).collect()
    }
}

/// The two user-controlled inputs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub metric: Metric,
    pub year: i32,
}

impl SelectionState {
    pub fn new(metric: Metric, year: i32) -> Self {
        Self { metric, year }
    }
}

/// Arithmetic mean of `metric` over the rows that have a value; `None` when
/// no row does
pub fn mean(rows: &[&Observation], metric: Metric) -> Option<f64> {
    let (sum, count) = rows
        .iter()
        .filter_map(|r| r.value(metric))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean rounded to the nearest integer, ties to even
pub fn rounded_mean(rows: &[&Observation], metric: Metric) -> Option<i64> {
    mean(rows, metric).map(|m| m.round_ties_even() as i64)
}
