use std::io::IsTerminal;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

type FieldMap = serde_json::Map<String, serde_json::Value>;

/// One JSON object per line.
pub(super) struct JsonFormatter {
    pid: u32,
    version: &'static str,
}

impl JsonFormatter {
    pub(super) fn new(version: &'static str) -> Self {
        Self {
            pid: std::process::id(),
            version,
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut fields = collect_fields(event);

        let mut record = serde_json::json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().to_string(),
            "pid": self.pid,
            "tid": format!("{:?}", std::thread::current().id()),
            "target": metadata.target(),
            "version": self.version,
        });

        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            record["file"] = serde_json::json!(file);
            record["line"] = serde_json::json!(line);
        }
        if let Some(message) = fields.remove("message") {
            record["message"] = message;
        }
        if !fields.is_empty() {
            record["fields"] = serde_json::Value::Object(fields);
        }

        writeln!(writer, "{}", serde_json::to_string(&record).unwrap_or_default())
    }
}

/// `2026-02-26 10:32:15.123 [INFO] (coinstreak::streak) key=value | message (file:line)`
pub(super) struct HumanReadableFormatter {
    ansi: bool,
}

impl HumanReadableFormatter {
    pub(super) fn new() -> Self {
        Self {
            ansi: std::io::stderr().is_terminal(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for HumanReadableFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut fields = collect_fields(event);

        let message = match fields.remove("message") {
            Some(serde_json::Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let extras: String = fields
            .iter()
            .map(|(key, value)| format!(" {}={}", key, value))
            .collect();

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        writeln!(
            writer,
            "{} [{}] ({}){} | {}{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level_label(metadata.level(), self.ansi),
            metadata.target(),
            extras,
            message,
            location
        )
    }
}

fn level_label(level: &Level, ansi: bool) -> String {
    let color = match *level {
        Level::ERROR => "31",
        Level::WARN => "33",
        Level::INFO => "32",
        Level::DEBUG => "36",
        Level::TRACE => "35",
    };
    if ansi {
        format!("\x1b[{}m{}\x1b[0m", color, level)
    } else {
        level.to_string()
    }
}

fn collect_fields(event: &Event<'_>) -> FieldMap {
    let mut visitor = FieldVisitor::default();
    event.record(&mut visitor);
    visitor.fields
}

#[derive(Default)]
struct FieldVisitor {
    fields: FieldMap,
}

impl FieldVisitor {
    fn insert(&mut self, field: &tracing::field::Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.insert(field, serde_json::json!(format!("{:?}", value)));
    }
}
