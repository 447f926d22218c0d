//! Dashboard page templates.

use crate::format::NOT_AVAILABLE;
use crate::prelude::*;

pub mod base;
pub mod gauge;
pub mod index;
pub mod table;
pub mod user;

pub const DATE_FORMAT: &str = "%F %T";
pub const VERSION: &str = structopt::clap::crate_version!();

/// Renders the whole page.
pub fn render(page: &Page, generated_at: DateTime<Local>) -> String {
    base::Base {
        body: index::Index { page },
        generated_at: generated_at.format(DATE_FORMAT).to_string(),
    }
    .to_string()
}

/// Renders a missing or empty value as `N/A`.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.into())
}

/// Label, units, capacity and current level cells.
pub fn fuel_cells(reading: &FuelReading) -> [String; 4] {
    match reading {
        FuelReading::Available(sensor) => [
            cell(sensor.label.as_ref()),
            cell(sensor.units.as_ref()),
            cell(sensor.max_value),
            cell(sensor.value),
        ],
        FuelReading::Unavailable => ["unavailable", "unavailable", "unavailable", "unavailable"].map(String::from),
        FuelReading::Error => ["error", "error", "error", "error"].map(String::from),
    }
}
