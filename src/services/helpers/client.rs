use lazy_static::lazy_static;
use surf::middleware::Redirect;
use surf::Client;

use crate::services::helpers::middleware::{error_for_status, inject_default_headers};

lazy_static! {
    /// `Client` instance used to make outgoing requests.
    pub static ref CLIENT: Client = surf::client()
        .with(Redirect::default())
        .with(inject_default_headers)
        .with(error_for_status);
}
