/// # Health Status Response
///
/// Operational status of the service together with the state of the
/// disposable domain blocklist.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "blocklist_domains": 3512,
///   "last_refreshed": "2024-03-10T03:00:01.000000000Z"
/// }
/// ```
pub mod health;

/// Request and response bodies for the email parsing endpoints.
pub mod email;

pub use health::HealthResponse;
