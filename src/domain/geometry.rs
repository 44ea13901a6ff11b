// District boundary geometry
use geo::{BoundingRect, MultiPolygon, Rect, coord};
use std::collections::BTreeMap;

/// District boundaries keyed by district name
#[derive(Debug, Clone, Default)]
pub struct DistrictGeometry {
    shapes: BTreeMap<String, MultiPolygon<f64>>,
}

impl DistrictGeometry {
    pub fn new(shapes: BTreeMap<String, MultiPolygon<f64>>) -> Self {
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn get(&self, district: &str) -> Option<&MultiPolygon<f64>> {
        self.shapes.get(district)
    }

    /// Districts in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MultiPolygon<f64>)> {
        self.shapes.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    /// Extent of every boundary
    pub fn bounds(&self) -> Option<Rect<f64>> {
        union_bounds(self.shapes.values())
    }
}

/// Smallest rectangle covering all given shapes
pub fn union_bounds<'a>(
    shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>,
) -> Option<Rect<f64>> {
    shapes
        .into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| {
            Rect::new(
                coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            )
        })
}

#[cfg(test)]
pub(crate) fn square(x: f64, y: f64, size: f64) -> MultiPolygon<f64> {
    use geo::{LineString, Polygon};

    let ring = LineString::from(vec![
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ]);
    MultiPolygon::new(vec![Polygon::new(ring, vec![])])
}
