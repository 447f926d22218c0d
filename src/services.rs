//! Remote telemetry APIs.

use crate::prelude::*;

pub mod helpers;
pub mod navixy;

/// Read-only telemetry API the dashboard is loaded from.
#[allow(async_fn_in_trait)]
pub trait Api {
    /// Lists all trackers available to the credential.
    async fn list_trackers(&self) -> Result<Vec<Tracker>>;

    /// Fetches the account the credential belongs to.
    async fn get_user_info(&self) -> Result<UserInfo>;

    /// Fetches all fuel inputs reported by the tracker.
    async fn get_fuel_inputs(&self, tracker_id: i64) -> Result<Vec<FuelSensor>>;
}
