/// Frame offset applied to producers that do not request one.
pub const DEFAULT_FRAME_OFFSET: u64 = 0;

/// Default log level when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive for tracing.
pub const LOG_ENV_VAR: &str = "CAPACITOR_LOG";

/// Log levels accepted by `observability.log_level`.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
