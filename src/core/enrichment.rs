//! Loads the tracker list and enriches every tracker with its fuel reading.

use futures::future::join_all;

use crate::prelude::*;
use crate::services::Api;

/// Loads the whole dashboard.
///
/// Only a failure to list the trackers is returned, the other requests degrade to placeholders.
pub async fn load<A: Api>(api: &A, fuel_sensor_label: &str) -> Result<Dashboard> {
    info!("Fetching the tracker list…");
    let trackers = api
        .list_trackers()
        .await
        .context("failed to fetch the tracker list")?;
    info!("Got {} trackers.", trackers.len());

    let user = fetch_user_info(api).await;

    info!("Fetching fuel sensors `{}`…", fuel_sensor_label);
    let readings = join_all(
        trackers
            .iter()
            .map(|tracker| fetch_fuel_reading(api, tracker, fuel_sensor_label)),
    )
    .await;

    // `join_all` preserves the input order regardless of the completion order.
    let trackers = trackers
        .into_iter()
        .zip(readings)
        .map(|(tracker, fuel)| EnrichedTracker { tracker, fuel })
        .collect();
    Ok(Dashboard { user, trackers })
}

pub async fn fetch_user_info<A: Api>(api: &A) -> UserInfo {
    api.get_user_info()
        .await
        .log(|| "failed to get the user info")
        .unwrap_or_else(|_| UserInfo::error())
}

/// Looks up the tracker input labelled `label`. Never fails.
pub async fn fetch_fuel_reading<A: Api>(api: &A, tracker: &Tracker, label: &str) -> FuelReading {
    let tracker_id = match tracker.id {
        Some(tracker_id) => tracker_id,
        None => {
            warn!("Tracker {:?} has no ID, its fuel sensor is unavailable.", tracker.label);
            return FuelReading::Unavailable;
        }
    };
    match api
        .get_fuel_inputs(tracker_id)
        .await
        .log(|| format!("failed to get the fuel sensor for tracker_id={}", tracker_id))
    {
        Ok(inputs) => match inputs.into_iter().find(|input| input.label.as_deref() == Some(label)) {
            Some(sensor) => FuelReading::Available(sensor),
            None => {
                debug!("Tracker {} has no `{}` input.", tracker_id, label);
                FuelReading::Unavailable
            }
        },
        Err(_) => FuelReading::Error,
    }
}
