// SVG serialization of choropleth maps
use crate::domain::choropleth::{ChoroplethMap, Region, ValueRange};
use crate::domain::color_scale::ColorScale;
use geo::{Coord, LineString, Rect};
use std::f64::consts::FRAC_PI_4;
use std::fmt::{self, Write};

const TITLE_HEIGHT: f64 = 40.0;
const COLORBAR_WIDTH: f64 = 18.0;
const COLORBAR_GUTTER: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 640.0,
            margin: 30.0,
        }
    }
}

/// Web Mercator projection fitted to a pixel area
#[derive(Debug, Clone, Copy)]
struct Projection {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
    min_x: f64,
    max_y: f64,
}

fn mercator(c: Coord<f64>) -> (f64, f64) {
    let y = (FRAC_PI_4 + c.y.to_radians() / 2.0).tan().ln();
    (c.x.to_radians(), y)
}

impl Projection {
    fn fit(bounds: Rect<f64>, x: f64, y: f64, width: f64, height: f64) -> Self {
        let (min_x, min_y) = mercator(bounds.min());
        let (max_x, max_y) = mercator(bounds.max());
        let span_x = (max_x - min_x).max(f64::EPSILON);
        let span_y = (max_y - min_y).max(f64::EPSILON);
        let scale = (width / span_x).min(height / span_y);

        Self {
            scale,
            origin_x: x + (width - span_x * scale) / 2.0,
            origin_y: y + (height - span_y * scale) / 2.0,
            min_x,
            max_y,
        }
    }

    fn apply(&self, c: Coord<f64>) -> (f64, f64) {
        let (mx, my) = mercator(c);
        (
            self.origin_x + (mx - self.min_x) * self.scale,
            self.origin_y + (self.max_y - my) * self.scale,
        )
    }
}

/// Render the map as a standalone SVG document
pub fn render_svg(map: &ChoroplethMap<'_>, options: &SvgOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, map, options);
    out
}

fn write_svg(out: &mut String, map: &ChoroplethMap<'_>, options: &SvgOptions) -> fmt::Result {
    let SvgOptions { width, height, margin } = *options;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif">"#
    )?;
    writeln!(
        out,
        r#"<text class="title" x="{}" y="{}" text-anchor="middle" font-size="18">{}</text>"#,
        width / 2.0,
        margin + 16.0,
        escape(map.title)
    )?;

    let area_x = margin;
    let area_y = margin + TITLE_HEIGHT;
    let area_w = width - 2.0 * margin - COLORBAR_GUTTER;
    let area_h = height - 2.0 * margin - TITLE_HEIGHT;

    match map.bounds {
        Some(bounds) => {
            let projection = Projection::fit(bounds, area_x, area_y, area_w, area_h);
            writeln!(out, r##"<g class="regions" stroke="#ffffff" stroke-width="0.5">"##)?;
            for region in &map.regions {
                write_region(out, region, &projection, map.label)?;
            }
            writeln!(out, "</g>")?;
        }
        None => {
            writeln!(
                out,
                r##"<text x="{}" y="{}" text-anchor="middle" fill="#8f939c">No boundaries loaded</text>"##,
                area_x + area_w / 2.0,
                area_y + area_h / 2.0
            )?;
        }
    }

    if let Some(range) = map.range {
        let x = width - margin - COLORBAR_GUTTER + 20.0;
        write_colorbar(out, map.scale, range, map.label, x, area_y + 20.0, area_h - 40.0)?;
    }

    writeln!(out, "</svg>")
}

fn write_region(
    out: &mut String,
    region: &Region<'_>,
    projection: &Projection,
    label: &str,
) -> fmt::Result {
    let mut d = String::new();
    for polygon in &region.shape.0 {
        write_ring(&mut d, polygon.exterior(), projection)?;
        for interior in polygon.interiors() {
            write_ring(&mut d, interior, projection)?;
        }
    }

    let tooltip = match region.value {
        Some(v) => format!("Zila: {}, {}: {}", region.district, label, format_value(v)),
        None => format!("Zila: {}, no data", region.district),
    };

    writeln!(
        out,
        r#"<path data-zila="{}" d="{}" fill="{}" fill-rule="evenodd"><title>{}</title></path>"#,
        escape(region.district),
        d,
        region.fill,
        escape(&tooltip)
    )
}

fn write_ring(d: &mut String, ring: &LineString<f64>, projection: &Projection) -> fmt::Result {
    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = projection.apply(*coord);
        let command = if i == 0 { 'M' } else { 'L' };
        write!(d, "{command}{x:.2},{y:.2}")?;
    }
    if ring.0.len() > 1 {
        d.push('Z');
    }
    Ok(())
}

fn write_colorbar(
    out: &mut String,
    scale: ColorScale,
    range: ValueRange,
    label: &str,
    x: f64,
    y: f64,
    height: f64,
) -> fmt::Result {
    let stops = scale.stops();
    let last = (stops.len() - 1) as f64;

    writeln!(out, r#"<defs><linearGradient id="colorbar" x1="0" y1="1" x2="0" y2="0">"#)?;
    for (i, stop) in stops.iter().enumerate() {
        writeln!(out, r#"<stop offset="{:.4}" stop-color="{}"/>"#, i as f64 / last, stop)?;
    }
    writeln!(out, "</linearGradient></defs>")?;

    writeln!(
        out,
        r#"<text class="colorbar-label" x="{x}" y="{}" font-size="12">{}</text>"#,
        y - 8.0,
        escape(label)
    )?;
    writeln!(
        out,
        r#"<rect class="colorbar" x="{x}" y="{y}" width="{COLORBAR_WIDTH}" height="{height}" fill="url(#colorbar)"/>"#
    )?;
    writeln!(
        out,
        r#"<text class="colorbar-max" x="{}" y="{}" font-size="11">{}</text>"#,
        x + COLORBAR_WIDTH + 4.0,
        y + 10.0,
        format_value(range.max)
    )?;
    writeln!(
        out,
        r#"<text class="colorbar-min" x="{}" y="{}" font-size="11">{}</text>"#,
        x + COLORBAR_WIDTH + 4.0,
        y + height,
        format_value(range.min)
    )
}

fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
