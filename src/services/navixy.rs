//! [Navixy](https://www.navixy.com/docs/navixy-api/) tracking API.

use serde::de::DeserializeOwned;
use surf::Url;

use crate::prelude::*;
use crate::services::helpers::CLIENT;
use crate::services::Api;

pub struct Navixy {
    api_url: String,

    /// Session key passed as the `hash` query parameter.
    hash: String,

    timeout: Duration,
}

impl Navixy {
    pub fn new<U: Into<String>>(api_url: U, hash: String, timeout: Duration) -> Self {
        Self {
            api_url: api_url.into(),
            hash,
            timeout,
        }
    }

    fn url(&self, method: &str, params: &[(&str, String)]) -> Result<Url> {
        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), method);
        Ok(Url::parse_with_params(
            &url,
            std::iter::once(("hash", self.hash.as_str())).chain(params.iter().map(|(key, value)| (*key, value.as_str()))),
        )?)
    }

    /// Calls the API method and unwraps the Navixy response envelope.
    async fn call<R: DeserializeOwned>(&self, method: &str, params: &[(&str, String)]) -> Result<R> {
        let url = self.url(method, params)?;
        debug!("Calling `{}`…", method);
        let response = async_std::future::timeout(self.timeout, CLIENT.get(url).recv_json::<Response<R>>())
            .await
            .map_err(|_| anyhow!("`{}` has timed out after {:?}", method, self.timeout))?
            .map_err(|err| anyhow!(err))?;
        debug!("Finished `{}`.", method);
        response.into_result(method)
    }
}

impl Api for Navixy {
    async fn list_trackers(&self) -> Result<Vec<Tracker>> {
        self.call::<TrackerList>("tracker/list", &[])
            .await?
            .list
            .ok_or_else(|| anyhow!("response does not contain the `list` field"))
    }

    async fn get_user_info(&self) -> Result<UserInfo> {
        Ok(self.call::<UserInfoResponse>("user/get_info", &[]).await?.into())
    }

    async fn get_fuel_inputs(&self, tracker_id: i64) -> Result<Vec<FuelSensor>> {
        Ok(self
            .call::<FuelResponse>("tracker/get_fuel", &[("tracker_id", tracker_id.to_string())])
            .await?
            .inputs
            .unwrap_or_default())
    }
}

/// Navixy wraps every payload into an envelope with the `success` flag.
#[derive(Deserialize)]
struct Response<T> {
    #[serde(default = "default_success")]
    success: bool,

    #[serde(default)]
    status: Option<Status>,

    #[serde(flatten)]
    payload: T,
}

const fn default_success() -> bool {
    true
}

impl<T> Response<T> {
    fn into_result(self, method: &str) -> Result<T> {
        if self.success {
            return Ok(self.payload);
        }
        Err(match self.status {
            Some(status) => anyhow!("`{}` has failed: {} (code {})", method, status.description, status.code),
            None => anyhow!("`{}` has failed", method),
        })
    }
}

#[derive(Deserialize)]
struct Status {
    code: i64,
    description: String,
}

#[derive(Deserialize)]
struct TrackerList {
    #[serde(default)]
    list: Option<Vec<Tracker>>,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    user_info: Option<UserInfoEntry>,
}

#[derive(Deserialize, Default)]
struct UserInfoEntry {
    #[serde(default)]
    id: Option<i64>,

    #[serde(default)]
    title: Option<String>,
}

impl From<UserInfoResponse> for UserInfo {
    fn from(response: UserInfoResponse) -> Self {
        let entry = response.user_info.unwrap_or_default();
        Self {
            name: entry.title.unwrap_or_else(|| "name unavailable".into()),
            id: entry
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "ID unavailable".into()),
        }
    }
}

#[derive(Deserialize)]
struct FuelResponse {
    #[serde(default)]
    inputs: Option<Vec<FuelSensor>>,
}
