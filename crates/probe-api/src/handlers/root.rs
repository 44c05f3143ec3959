//! Greeting handler for every path without a probe

use axum::http::Uri;

/// Echo the requested path
///
/// The path is echoed as received, percent-encoding included.
///
/// ANY /*
pub async fn greet(uri: Uri) -> String {
    format!("Hello! you've requested {}\n", uri.path())
}
