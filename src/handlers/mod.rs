pub mod product;

use http::StatusCode;

pub async fn health_check() -> &'static str {
    "OK"
}

// Browsers ask for this on every page load; answer with an empty 204.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
