use std::str::FromStr;

use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::Config;

/// Installs the global subscriber. Nothing is installed without a filter.
///
/// Events go to stderr so stdout stays free for the timeline itself.
pub fn init_tracing(config: &Config) -> Option<()> {
	let filter = EnvFilter::from_str(config.log_filter()?).ok()?;

	let layer: Box<dyn Layer<Registry> + Send + Sync> = if config.log_json {
		tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.fmt_fields(JsonFields::default())
			.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
			.with_filter(filter)
			.boxed()
	} else {
		tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.event_format(tracing_subscriber::fmt::format().pretty())
			.with_filter(filter)
			.boxed()
	};

	tracing_subscriber::registry().with(layer).try_init().ok()
}
