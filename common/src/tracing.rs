use tracing::Subscriber;
use tracing_subscriber::fmt::{MakeWriter, layer};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn json_subscriber<W>(default_directive: &str, writer: W) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Registry::default()
        .with(env_filter(default_directive))
        .with(layer().json().with_writer(writer))
}

fn pretty_subscriber<W>(default_directive: &str, writer: W) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish()
}

/// Initialize tracing with structured JSON output on stderr
pub fn init_tracing(default_directive: &str) {
    json_subscriber(default_directive, std::io::stderr).init();
}

/// Initialize tracing with pretty output on stderr.
///
/// `RUST_LOG` wins over `default_directive` when set.
pub fn init_tracing_pretty(default_directive: &str) {
    pretty_subscriber(default_directive, std::io::stderr).init();
}
