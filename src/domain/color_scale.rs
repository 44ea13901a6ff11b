// Continuous color scales used to shade districts
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation between two colors, `t` in [0, 1]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill used for districts that have no value for the selected year
pub const NO_DATA: Rgb = Rgb(217, 217, 217);

const HOT: &[Rgb] = &[Rgb(0, 0, 0), Rgb(230, 0, 0), Rgb(255, 210, 0), Rgb(255, 255, 255)];

const BLUES: &[Rgb] = &[
    Rgb(247, 251, 255),
    Rgb(222, 235, 247),
    Rgb(198, 219, 239),
    Rgb(158, 202, 225),
    Rgb(107, 174, 214),
    Rgb(66, 146, 198),
    Rgb(33, 113, 181),
    Rgb(8, 81, 156),
    Rgb(8, 48, 107),
];

const MINT: &[Rgb] = &[
    Rgb(228, 241, 225),
    Rgb(180, 217, 204),
    Rgb(137, 192, 182),
    Rgb(99, 166, 160),
    Rgb(68, 140, 138),
    Rgb(40, 114, 116),
    Rgb(13, 88, 95),
];

const DENSE: &[Rgb] = &[
    Rgb(230, 240, 240),
    Rgb(191, 221, 229),
    Rgb(156, 201, 226),
    Rgb(129, 180, 227),
    Rgb(115, 154, 228),
    Rgb(117, 127, 221),
    Rgb(120, 100, 202),
    Rgb(119, 74, 175),
    Rgb(113, 50, 141),
    Rgb(100, 31, 104),
    Rgb(80, 20, 66),
    Rgb(54, 14, 36),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    HotReversed,
    BluesReversed,
    Mint,
    Dense,
}

impl ColorScale {
    pub fn name(self) -> &'static str {
        match self {
            ColorScale::HotReversed => "Hot_r",
            ColorScale::BluesReversed => "Blues_r",
            ColorScale::Mint => "Mint",
            ColorScale::Dense => "dense",
        }
    }

    /// Color stops from low to high value, evenly spaced
    pub fn stops(self) -> Vec<Rgb> {
        match self {
            ColorScale::HotReversed => HOT.iter().rev().copied().collect(),
            ColorScale::BluesReversed => BLUES.iter().rev().copied().collect(),
            ColorScale::Mint => MINT.to_vec(),
            ColorScale::Dense => DENSE.to_vec(),
        }
    }

    /// Sample the scale at `t`; values outside [0, 1] are clamped
    pub fn sample(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (stops.len() - 1) as f64;
        let position = t * segments;
        let index = (position.floor() as usize).min(stops.len() - 2);
        stops[index].lerp(stops[index + 1], position - index as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(NO_DATA.to_string(), "#d9d9d9");
    }

    #[test]
    fn test_reversed_scales_start_from_the_light_end() {
        assert_eq!(ColorScale::HotReversed.sample(0.0), Rgb(255, 255, 255));
        assert_eq!(ColorScale::HotReversed.sample(1.0), Rgb(0, 0, 0));
        assert_eq!(ColorScale::BluesReversed.sample(0.0), Rgb(8, 48, 107));
        assert_eq!(ColorScale::BluesReversed.sample(1.0), Rgb(247, 251, 255));
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        // Mint has 7 stops, so 1/6 lands exactly on the second one
        assert_eq!(ColorScale::Mint.sample(1.0 / 6.0), Rgb(180, 217, 204));
        assert_eq!(ColorScale::Mint.sample(1.0 / 12.0), Rgb(204, 229, 215));
    }

    #[test]
    fn test_sample_clamps() {
        assert_eq!(ColorScale::Dense.sample(-3.0), Rgb(230, 240, 240));
        assert_eq!(ColorScale::Dense.sample(7.5), Rgb(54, 14, 36));
        assert_eq!(ColorScale::Dense.sample(f64::NAN), Rgb(230, 240, 240));
    }
}
