//! Installs the global `tracing` subscriber.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config::{self, LogFormat};

/// Builds the subscriber described by `config` and installs it globally.
///
/// Without a `filtering_directive`, the configured level applies to `crates` and
/// everything else logs warnings only. Logs go to stderr so command output on stdout
/// stays machine readable.
pub fn setup<Str: AsRef<str>>(
    config: &config::Log,
    crates: impl IntoIterator<Item = Str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let console = &config.console;
    let layer: Option<Box<dyn Layer<Registry> + Send + Sync>> = console.enabled.then(|| {
        let filter = console_filter(console, crates);
        match console.log_format {
            LogFormat::Default => fmt::layer()
                .with_writer(std::io::stderr)
                .pretty()
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_filter(filter)
                .boxed(),
        }
    });

    tracing_subscriber::registry().with(layer).try_init()
}

fn console_filter<Str: AsRef<str>>(
    console: &config::LogConsole,
    crates: impl IntoIterator<Item = Str>,
) -> EnvFilter {
    let directive = console.filtering_directive.clone().unwrap_or_else(|| {
        let level = console.level.into_level().as_str().to_lowercase();
        crates
            .into_iter()
            .fold(String::from("warn"), |directive, name| {
                format!("{directive},{}={level}", name.as_ref())
            })
    });
    EnvFilter::builder()
        .with_default_directive(console.level.into_level().into())
        .parse_lossy(directive)
}
