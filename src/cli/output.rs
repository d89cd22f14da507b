/// Output formatting: JSON, table, id/name modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ContactOutput, SearchResultOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
    /// When true, print phase timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        fields: Option<&str>,
        no_header: bool,
        debug: bool,
    ) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether a field should be included in output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

// --- Contact list output ---

/// Write a list of `ContactOutput` to stdout.
pub fn write_contacts(contacts: &[ContactOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(contacts),
        OutputFormat::Compact => print_compact_json(contacts),
        OutputFormat::Ndjson => print_ndjson(contacts),
        OutputFormat::Id => {
            for c in contacts {
                println!("{}", c.id);
            }
        }
        OutputFormat::Name => {
            for c in contacts {
                println!("{}", display_name(c));
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_contacts_table(contacts, ctx),
    }
}

fn write_contacts_table(contacts: &[ContactOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let columns: [(&str, fn(&ContactOutput) -> String); 6] = [
        ("id", |c| c.id.to_string()),
        ("first_name", |c| c.first_name.clone()),
        ("last_name", |c| c.last_name.clone()),
        ("email", |c| c.email.clone()),
        ("phone", |c| c.phone.clone()),
        ("notes", |c| c.notes.clone()),
    ];

    let included: Vec<&(&str, fn(&ContactOutput) -> String)> = columns
        .iter()
        .filter(|(name, _)| ctx.include_field(name))
        .collect();

    if !ctx.no_header {
        table.set_header(
            included
                .iter()
                .map(|(name, _)| Cell::new(name.to_uppercase())),
        );
    }
    for c in contacts {
        table.add_row(included.iter().map(|(_, get)| Cell::new(get(c))));
    }

    println!("{table}");
}

// --- Single contact output ---

/// Write one contact to stdout (used by `show`).
pub fn write_contact(contact: &ContactOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(contact),
        OutputFormat::Compact => print_compact_json(contact),
        OutputFormat::Ndjson => print_ndjson(std::slice::from_ref(contact)),
        OutputFormat::Id => println!("{}", contact.id),
        OutputFormat::Name => println!("{}", display_name(contact)),
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["FIELD", "VALUE"]);
            }
            table.add_row(["id", contact.id.to_string().as_str()]);
            table.add_row(["first_name", contact.first_name.as_str()]);
            table.add_row(["last_name", contact.last_name.as_str()]);
            table.add_row(["email", contact.email.as_str()]);
            table.add_row(["phone", contact.phone.as_str()]);
            table.add_row(["notes", contact.notes.as_str()]);
            if let Some(created) = &contact.created {
                table.add_row(["created", created.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Search results ---

/// Write search results to stdout.
pub fn write_search_results(results: &[SearchResultOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Compact => print_compact_json(results),
        OutputFormat::Ndjson => print_ndjson(results),
        OutputFormat::Id => {
            for r in results {
                println!("{}", r.id);
            }
        }
        OutputFormat::Name => {
            for r in results {
                println!("{}", r.name);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_search_table(results, ctx),
    }
}

fn write_search_table(results: &[SearchResultOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["ID", "NAME", "EMAIL", "FIELD", "SCORE"]);
    }
    for r in results {
        table.add_row([
            r.id.to_string(),
            r.name.clone(),
            r.email.clone(),
            r.field.clone(),
            format!("{:.2}", r.score),
        ]);
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn display_name(c: &ContactOutput) -> String {
    format!("{} {}", c.first_name, c.last_name).trim().to_owned()
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
