pub use crate::core::models::*;
pub use crate::logging::Log;
pub use anyhow::{anyhow, Context};
pub use chrono::prelude::*;
pub use log::{debug, error, info, warn};
pub use serde::Deserialize;
pub use std::time::Duration;

pub type Result<T = ()> = anyhow::Result<T>;
