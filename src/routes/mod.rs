/// Router Module Index
///
/// Organizes the application's routing into security-segregated modules so
/// that access control is applied explicitly at the module level (via Axum
/// layers) rather than per handler.

/// Routes accessible to any client: health/greeting probes only.
pub mod public;

/// Everything under /admin: the open session routes (login/logout) and the
/// token-protected entity routes.
pub mod admin;
