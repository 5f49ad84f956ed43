use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "clinicd";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address when `CLINICD_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "clinicd=info,tower_http=info".to_string()
}

/// Socket address to bind, from `CLINICD_ADDR` or the default.
///
/// An unparseable value falls back to the default rather than
/// aborting startup; the chosen address is logged either way.
pub fn bind_addr() -> SocketAddr {
    let raw = std::env::var("CLINICD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(addr = %raw, "Invalid CLINICD_ADDR, using default");
        DEFAULT_ADDR.parse().expect("default bind address is valid")
    })
}

/// Whether to start with the demo seed data set.
/// `CLINICD_SEED=0` or `false` starts with an empty store.
pub fn seed_demo_data() -> bool {
    match std::env::var("CLINICD_SEED") {
        Ok(v) => !matches!(v.as_str(), "0" | "false" | "no"),
        Err(_) => true,
    }
}
