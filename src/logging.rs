use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset: path decisions are logged at
/// debug, so only this crate's warnings (swallowed detection failures) show.
pub const DEFAULT_DIRECTIVE: &str = "karma_paths=warn";

/// JSON subscriber for hosts that have none of their own.
pub fn init() -> bool {
    init_with(DEFAULT_DIRECTIVE)
}

/// Installs the JSON subscriber with `directive` as fallback filter. Returns
/// false when a global subscriber was already set; that one stays in place.
pub fn init_with(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_target(true))
        .try_init()
        .is_ok()
}
