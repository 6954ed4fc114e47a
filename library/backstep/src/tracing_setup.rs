//! Log subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Level used when neither the environment nor `--verbose` asks for more.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize tracing for the CLI.
///
/// Call this once at startup. Safe to call multiple times.
/// Filter comes from `BACKSTEP_LOG`, then `RUST_LOG`, then `warn`;
/// `--verbose` forces `debug`. Set `BACKSTEP_LOG_TREE=1` for indented
/// hierarchical output instead of one line per event.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directive = filter_directive(
            verbose,
            std::env::var("BACKSTEP_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if tree_output_requested(std::env::var("BACKSTEP_LOG_TREE").ok()) {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };

        if installed.is_err() {
            eprintln!("warning: a global tracing subscriber was already installed");
        }
    });
}

/// Pick the filter directive. `--verbose` wins, then the first non-empty
/// environment value.
fn filter_directive(
    verbose: bool,
    backstep_log: Option<String>,
    rust_log: Option<String>,
) -> String {
    if verbose {
        return "debug".to_string();
    }
    backstep_log
        .into_iter()
        .chain(rust_log)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

fn tree_output_requested(value: Option<String>) -> bool {
    matches!(value.as_deref().map(str::trim), Some("1" | "true" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins() {
        assert_eq!(
            filter_directive(true, Some("trace".into()), Some("info".into())),
            "debug"
        );
    }

    #[test]
    fn backstep_log_before_rust_log() {
        assert_eq!(
            filter_directive(false, Some("backstep_iter=trace".into()), Some("info".into())),
            "backstep_iter=trace"
        );
        assert_eq!(filter_directive(false, None, Some("info".into())), "info");
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(filter_directive(false, Some("  ".into()), None), "warn");
        assert_eq!(filter_directive(false, None, None), "warn");
    }

    #[test]
    fn tree_toggle() {
        assert!(tree_output_requested(Some("1".into())));
        assert!(tree_output_requested(Some(" true ".into())));
        assert!(!tree_output_requested(Some("0".into())));
        assert!(!tree_output_requested(None));
    }

    #[test]
    fn init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}
