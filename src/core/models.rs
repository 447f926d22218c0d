//! Trackers, fuel sensors and the records the dashboard is built from.

use serde::{Deserialize, Serialize};

/// Monitored device or vehicle as returned by `tracker/list`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Tracker {
    #[serde(default)]
    pub id: Option<i64>,

    /// Display label, for example a licence plate.
    #[serde(default)]
    pub label: Option<String>,

    /// GPS source the tracker reports through.
    #[serde(default)]
    pub source: Option<Source>,
}

impl Tracker {
    pub fn device_id(&self) -> Option<&str> {
        self.source.as_ref()?.device_id.as_deref()
    }

    pub fn source_id(&self) -> Option<i64> {
        self.source.as_ref()?.id
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Source {
    #[serde(default)]
    pub id: Option<i64>,

    /// Hardware identifier, usually the IMEI.
    #[serde(default)]
    pub device_id: Option<String>,
}

/// Single labelled input of a tracker reporting its tank capacity and current level.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FuelSensor {
    /// Unlabelled inputs are kept but never match.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub units: Option<String>,

    /// Tank capacity.
    #[serde(default)]
    pub max_value: Option<f64>,

    /// Current fuel level.
    #[serde(default)]
    pub value: Option<f64>,
}

/// Outcome of looking up a tracker's fuel sensor.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", content = "sensor", rename_all = "snake_case")]
pub enum FuelReading {
    /// The configured sensor has been found among the tracker inputs.
    Available(FuelSensor),

    /// The tracker doesn't report the configured sensor.
    Unavailable,

    /// The lookup has failed. The cause is logged, not kept.
    Error,
}

impl FuelReading {
    /// Returns the current level and capacity when both are known.
    pub fn level(&self) -> Option<(f64, f64)> {
        match self {
            FuelReading::Available(FuelSensor {
                value: Some(value),
                max_value: Some(max_value),
                ..
            }) => Some((*value, *max_value)),
            _ => None,
        }
    }
}

/// Tracker merged with its fuel reading. Every enriched tracker has exactly one reading.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EnrichedTracker {
    #[serde(flatten)]
    pub tracker: Tracker,

    pub fuel: FuelReading,
}

/// Account the credential belongs to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub name: String,
    pub id: String,
}

impl UserInfo {
    /// Placeholder for a failed user info request.
    pub fn error() -> Self {
        Self {
            name: "failed to get name".into(),
            id: "failed to get ID".into(),
        }
    }
}

/// Everything a successfully loaded page displays.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub user: UserInfo,
    pub trackers: Vec<EnrichedTracker>,
}

impl Dashboard {
    /// The only tracker which gets a gauge.
    pub fn gauge_level(&self) -> Option<(f64, f64)> {
        self.trackers.first().and_then(|tracker| tracker.fuel.level())
    }
}

/// What a single run renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Loaded(Dashboard),

    /// Top-level failure message shown instead of the data.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(value: Option<f64>, max_value: Option<f64>) -> FuelSensor {
        FuelSensor {
            label: Some("Tank".into()),
            units: Some("litres".into()),
            max_value,
            value,
        }
    }

    #[test]
    fn level_ok() {
        let reading = FuelReading::Available(sensor(Some(10.0), Some(35.0)));
        assert_eq!(reading.level(), Some((10.0, 35.0)));
    }

    #[test]
    fn level_missing_value() {
        assert_eq!(FuelReading::Available(sensor(None, Some(35.0))).level(), None);
        assert_eq!(FuelReading::Unavailable.level(), None);
        assert_eq!(FuelReading::Error.level(), None);
    }

    #[test]
    fn gauge_uses_first_tracker_only() {
        let dashboard = Dashboard {
            user: UserInfo::error(),
            trackers: vec![
                EnrichedTracker {
                    tracker: Tracker::default(),
                    fuel: FuelReading::Unavailable,
                },
                EnrichedTracker {
                    tracker: Tracker::default(),
                    fuel: FuelReading::Available(sensor(Some(1.0), Some(2.0))),
                },
            ],
        };
        assert_eq!(dashboard.gauge_level(), None);
    }

    #[test]
    fn serialize_reading() -> crate::prelude::Result {
        let json = serde_json::to_value(&FuelReading::Unavailable)?;
        assert_eq!(json, serde_json::json!({ "status": "unavailable" }));
        Ok(())
    }
}
