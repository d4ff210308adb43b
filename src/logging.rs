use tracing_subscriber::EnvFilter;

/// Targets whose events are shown. Both the library and the
/// `weekday-span` binary log under the `weekday_span` crate name.
const CRATE_TARGETS: &[&str] = &["weekday_span"];

/// Default level for a `-v` count. Silent apart from warnings unless asked;
/// `-v` shows the counted range, `-vv` each parsed date with its ordinal and
/// weekday.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Events go to stderr; stdout carries only
/// the count or the JSON report. A set `RUST_LOG` replaces the `-v` default.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }
}
