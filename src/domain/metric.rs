// Weather metric domain model
use super::color_scale::ColorScale;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    MaxTemp,
    MinTemp,
    Humidity,
    Rainfall,
}

/// Static presentation data attached to every metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub option: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    pub scale: ColorScale,
    pub unit: &'static str,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::MaxTemp,
        Metric::MinTemp,
        Metric::Humidity,
        Metric::Rainfall,
    ];

    pub fn descriptor(self) -> MetricDescriptor {
        match self {
            Metric::MaxTemp => MetricDescriptor {
                key: "max_temp",
                option: "Maximum Temperature",
                title: "Maximum temperature (degree celsius)",
                label: "Maximum temperature",
                scale: ColorScale::HotReversed,
                unit: "degrees centigrade",
            },
            Metric::MinTemp => MetricDescriptor {
                key: "min_temp",
                option: "Minimum Temperature",
                title: "Minimum temperature (degree celsius)",
                label: "Minimum temperature",
                scale: ColorScale::BluesReversed,
                unit: "degrees centigrade",
            },
            Metric::Humidity => MetricDescriptor {
                key: "humidity",
                option: "Humidity",
                title: "Humidity (%)",
                label: "Humidity",
                scale: ColorScale::Mint,
                unit: "percent",
            },
            Metric::Rainfall => MetricDescriptor {
                key: "rainfall",
                option: "Rainfall",
                title: "Rainfall (millimeter)",
                label: "Rainfall",
                scale: ColorScale::Dense,
                unit: "cubic centimeters per sq area",
            },
        }
    }

    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    pub fn unit(self) -> &'static str {
        self.descriptor().unit
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}
