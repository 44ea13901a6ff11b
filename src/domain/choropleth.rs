// Choropleth map domain model
use super::color_scale::{ColorScale, NO_DATA, Rgb};
use super::geometry::{DistrictGeometry, union_bounds};
use super::metric::Metric;
use super::weather::Observation;
use geo::{MultiPolygon, Rect};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Min and max of the finite values; `None` when there are none
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().filter(|v| v.is_finite()).fold(None, |range, v| match range {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Position of `value` within the range; a flat range maps to the midpoint
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { (value - self.min) / span } else { 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region<'a> {
    pub district: &'a str,
    pub value: Option<f64>,
    pub fill: Rgb,
    pub shape: &'a MultiPolygon<f64>,
}

/// A rendered map: one region per known district
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethMap<'a> {
    pub title: &'static str,
    pub label: &'static str,
    pub scale: ColorScale,
    pub range: Option<ValueRange>,
    pub bounds: Option<Rect<f64>>,
    pub regions: Vec<Region<'a>>,
}

impl<'a> ChoroplethMap<'a> {
    /// Regions that received a value
    pub fn matched(&self) -> impl Iterator<Item = &Region<'a>> {
        self.regions.iter().filter(|r| r.value.is_some())
    }
}

/// Shade every district in `geometry` by the `metric` value of its row.
///
/// The value range comes from `rows` alone, so it shifts from year to year.
/// Bounds are fitted to districts that received a value, falling back to the
/// full geometry extent when none did.
pub fn build_map<'a>(
    rows: &[&Observation],
    geometry: &'a DistrictGeometry,
    metric: Metric,
) -> ChoroplethMap<'a> {
    let descriptor = metric.descriptor();
    let range = ValueRange::of(rows.iter().filter_map(|r| r.value(metric)));

    // Rows without a usable value stay out, so their districts render blank
    let values: HashMap<&str, f64> = rows
        .iter()
        .filter_map(|r| Some((r.district.as_str(), r.value(metric)?)))
        .collect();

    for row in rows {
        if geometry.get(&row.district).is_none() {
            tracing::debug!("No boundary for district {}, skipping", row.district);
        }
    }

    let regions: Vec<Region<'a>> = geometry
        .iter()
        .map(|(district, shape)| {
            let value = values.get(district).copied();
            let fill = match (value, range) {
                (Some(v), Some(r)) => descriptor.scale.sample(r.normalize(v)),
                _ => NO_DATA,
            };
            Region {
                district,
                value,
                fill,
                shape,
            }
        })
        .collect();

    let bounds = union_bounds(regions.iter().filter(|r| r.value.is_some()).map(|r| r.shape))
        .or_else(|| geometry.bounds());

    ChoroplethMap {
        title: descriptor.title,
        label: descriptor.label,
        scale: descriptor.scale,
        range,
        bounds,
        regions,
    }
}
