//! Terminal output handler for sweep progress
//!
//! Prints one status line per settled request as the sweep runs, so slow
//! sweeps show progress instead of a silent pause before the final table.

use async_trait::async_trait;
use promptgrid_core::{ResultRecord, SweepEvent, SweepOutput};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ANSI color codes
const GRAY: &str = "\x1b[90m"; // Gray text for the preview line
const GREEN: &str = "\x1b[92m"; // Green dot for successful requests
const RED: &str = "\x1b[91m"; // Red dot for failed requests
const RESET: &str = "\x1b[0m";

/// Maximum display width of the one-line output preview
const PREVIEW_WIDTH: usize = 80;

/// Prints live progress lines; the final table is rendered by the caller
pub struct TableOutputHandler;

impl TableOutputHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Format the status line for one settled request
fn format_record_status(index: usize, total: usize, record: &ResultRecord) -> String {
    let dot_color = if record.is_success() { GREEN } else { RED };
    let tuple = &record.tuple;
    format!(
        "{}⏺{} [{}/{}] temperature={} max_tokens={} presence_penalty={} frequency_penalty={} stop={}",
        dot_color,
        RESET,
        index + 1,
        total,
        tuple.temperature,
        tuple.max_tokens,
        tuple.presence_penalty,
        tuple.frequency_penalty,
        record.stop_display(),
    )
}

/// Format the indented one-line preview of a record's output
fn format_record_preview(record: &ResultRecord) -> String {
    let flat = record.output_text().replace('\n', " ");
    format!(
        "  ⎿  {}{}{}",
        GRAY,
        truncate_to_width(&flat, PREVIEW_WIDTH),
        RESET
    )
}

/// Truncate text to the given display width, appending "..." when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut width = 0;
    let limit = max_width.saturating_sub(3);
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > limit {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push_str("...");
    truncated
}

#[async_trait]
impl SweepOutput for TableOutputHandler {
    async fn emit_event(
        &self,
        event: SweepEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match event {
            SweepEvent::SweepStarted { context, total } => {
                println!("Sweeping {} combinations with {}", total, context.model);
                println!();
            }

            SweepEvent::RecordCompleted {
                index,
                total,
                record,
            } => {
                println!("{}", format_record_status(index, total, &record));
                println!("{}", format_record_preview(&record));
            }

            SweepEvent::SweepCompleted {
                total,
                failures,
                elapsed,
            } => {
                println!();
                if failures > 0 {
                    println!("{}{} of {} requests failed{}", RED, failures, total, RESET);
                }
                println!(
                    "{}Completed {} requests in {:.2}s{}",
                    GRAY,
                    total,
                    elapsed.as_secs_f64(),
                    RESET
                );
            }
        }

        Ok(())
    }
}
