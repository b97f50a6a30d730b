use chrono::Local;
use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Renders `HH:MM:SS level example  fields`, where `example` is the catalog
/// module that emitted the event.
pub struct ExampleFormatter;

/// Short name for an event target: the last path segment of library
/// targets, the crate name for everything else.
fn example_name(target: &str) -> &str {
    match target.strip_prefix("design_patterns::") {
        Some(rest) => rest.rsplit("::").next().unwrap_or(rest),
        None => target.split("::").next().unwrap_or(target),
    }
}

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "trace".dimmed(),
        Level::DEBUG => "debug".cyan(),
        Level::INFO => " info".green(),
        Level::WARN => " warn".yellow().bold(),
        Level::ERROR => "error".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for ExampleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let clock = Local::now().format("%H:%M:%S").to_string();
        write!(
            writer,
            "{} {} {:<24} ",
            clock.dimmed(),
            level_label(*meta.level()),
            example_name(meta.target()).magenta()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ExampleFormatter)
        .init();
}
