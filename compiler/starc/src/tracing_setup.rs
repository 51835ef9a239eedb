use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=star_patterns=trace starc run demo.star`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
