use futures::future::BoxFuture;
use structopt::clap::crate_version;
use surf::{http::headers, middleware::Next, Client, Request, Response};

pub const USER_AGENT: &str = concat!("Fuel Dashboard / ", crate_version!(), " (Rust)");

/// Injects the default HTTP headers to all outgoing requests.
pub fn inject_default_headers(request: Request, client: Client, next: Next) -> BoxFuture<surf::Result<Response>> {
    Box::pin(async move {
        let mut request = request;
        request.insert_header(headers::USER_AGENT, USER_AGENT);
        request.insert_header(headers::ACCEPT, "application/json");
        next.run(request, client).await
    })
}

/// Converts client and server errors into [`surf::Error`].
///
/// Navixy explains a failure in the response body, so the body becomes the message.
pub fn error_for_status(request: Request, client: Client, next: Next) -> BoxFuture<surf::Result<Response>> {
    Box::pin(async move {
        let mut response = next.run(request, client).await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response
                .body_string()
                .await
                .unwrap_or_else(|_| status.canonical_reason().to_string());
            Err(surf::Error::from_str(status, format!("HTTP {}: {}", status, body)))
        } else {
            Ok(response)
        }
    })
}
