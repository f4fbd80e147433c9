//! Plain-text results table
//!
//! Renders settled sweep records as a bordered table with one row per
//! parameter tuple. Uses unicode-aware width calculation so CJK output
//! and box-drawing borders stay aligned.

use promptgrid_core::{ParameterName, ResultRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum display width of the result column before wrapping
const RESULT_COLUMN_WIDTH: usize = 60;

/// Table view over a slice of completed records
pub struct ResultsTable<'a> {
    records: &'a [ResultRecord],
}

impl<'a> ResultsTable<'a> {
    pub fn new(records: &'a [ResultRecord]) -> Self {
        Self { records }
    }

    /// Render the full table, bottom border included, without a trailing newline
    pub fn render(&self) -> String {
        let headers = Self::headers();
        let rows: Vec<(Vec<String>, Vec<String>)> = self
            .records
            .iter()
            .map(|record| {
                (
                    Self::parameter_cells(record),
                    wrap_text(record.output_text(), RESULT_COLUMN_WIDTH),
                )
            })
            .collect();

        // Column widths start at the header widths and grow to fit content
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|header| UnicodeWidthStr::width(*header))
            .collect();
        let result_column = widths.len() - 1;
        for (cells, result_lines) in &rows {
            for (i, cell) in cells.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
            for line in result_lines {
                widths[result_column] =
                    widths[result_column].max(UnicodeWidthStr::width(line.as_str()));
            }
        }

        let mut out = String::new();
        out.push_str(&border_line(&widths, '╭', '┬', '╮'));
        out.push('\n');
        out.push_str(&content_line(&headers, &widths));
        out.push('\n');
        out.push_str(&border_line(&widths, '├', '┼', '┤'));
        out.push('\n');

        for (row_index, (cells, result_lines)) in rows.iter().enumerate() {
            if row_index > 0 {
                out.push_str(&border_line(&widths, '├', '┼', '┤'));
                out.push('\n');
            }
            // Parameter cells appear only on the first line of a wrapped row
            for (line_index, result_line) in result_lines.iter().enumerate() {
                let mut line_cells: Vec<&str> = if line_index == 0 {
                    cells.iter().map(String::as_str).collect()
                } else {
                    vec![""; cells.len()]
                };
                line_cells.push(result_line);
                out.push_str(&content_line(&line_cells, &widths));
                out.push('\n');
            }
        }

        out.push_str(&border_line(&widths, '╰', '┴', '╯'));
        out
    }

    fn headers() -> Vec<&'static str> {
        let mut headers: Vec<&'static str> = ParameterName::ALL
            .iter()
            .map(|name| name.label())
            .collect();
        headers.push("Result");
        headers
    }

    fn parameter_cells(record: &ResultRecord) -> Vec<String> {
        vec![
            record.tuple.temperature.to_string(),
            record.tuple.max_tokens.to_string(),
            record.tuple.presence_penalty.to_string(),
            record.tuple.frequency_penalty.to_string(),
            record.stop_display().to_string(),
        ]
    }
}

fn border_line(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line
}

fn content_line(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    line.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        let padding = width.saturating_sub(UnicodeWidthStr::width(*cell));
        line.push_str(&" ".repeat(padding));
        line.push_str(" │");
    }
    line
}

/// Wrap text to fit within the given display width, breaking at word
/// boundaries and falling back to character breaks for overlong words
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if UnicodeWidthStr::width(line) <= max_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(current_line);
                    current_line = String::new();
                    current_width = 0;
                }

                // Character-based wrapping for words wider than the column
                let mut char_line = String::new();
                let mut char_width = 0;
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if char_width + ch_width > max_width && !char_line.is_empty() {
                        lines.push(char_line);
                        char_line = ch.to_string();
                        char_width = ch_width;
                    } else {
                        char_line.push(ch);
                        char_width += ch_width;
                    }
                }
                if !char_line.is_empty() {
                    current_line = char_line;
                    current_width = char_width;
                }
            } else if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(current_line);
                current_line = word.to_string();
                current_width = word_width;
            } else {
                if current_width > 0 {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgrid_core::ParameterTuple;

    fn tuple(stop: Option<&str>) -> ParameterTuple {
        ParameterTuple {
            temperature: 0.7,
            max_tokens: 150,
            presence_penalty: 0.0,
            frequency_penalty: 1.5,
            stop_sequence: stop.map(str::to_string),
        }
    }

    #[test]
    fn test_wrap_text_simple() {
        assert_eq!(wrap_text("Hello world", 20), vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_long_line() {
        let wrapped = wrap_text("This is a very long line that should be wrapped", 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 20);
        }
    }

    #[test]
    fn test_wrap_text_breaks_overlong_word() {
        let wrapped = wrap_text("aaaaaaaaaaaaaaaaaaaaaaaaa", 10);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 10);
        }
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }

    #[test]
    fn test_render_contains_headers_and_values() {
        let records = vec![ResultRecord::success(
            tuple(None),
            "a short answer".to_string(),
        )];
        let rendered = ResultsTable::new(&records).render();

        for header in [
            "Temperature",
            "Max Tokens",
            "Presence Penalty",
            "Frequency Penalty",
            "Stop Sequence",
            "Result",
        ] {
            assert!(rendered.contains(header), "missing header: {}", header);
        }
        assert!(rendered.contains("0.7"));
        assert!(rendered.contains("150"));
        assert!(rendered.contains("1.5"));
        assert!(rendered.contains("None"));
        assert!(rendered.contains("a short answer"));
    }

    #[test]
    fn test_render_shows_stop_sequence_when_present() {
        let records = vec![ResultRecord::success(tuple(Some("END")), "ok".to_string())];
        let rendered = ResultsTable::new(&records).render();

        assert!(rendered.contains("END"));
        assert!(!rendered.contains("None"));
    }

    #[test]
    fn test_render_is_rectangular() {
        let long = "word ".repeat(40);
        let records = vec![
            ResultRecord::success(tuple(None), long),
            ResultRecord::success(tuple(Some("###")), "short".to_string()),
        ];
        let rendered = ResultsTable::new(&records).render();

        let mut line_widths = rendered
            .lines()
            .map(|line| UnicodeWidthStr::width(line));
        let first = line_widths.next().unwrap();
        assert!(line_widths.all(|width| width == first));
    }

    #[test]
    fn test_render_puts_parameters_on_first_wrapped_line_only() {
        let long = "word ".repeat(40);
        let records = vec![ResultRecord::success(tuple(None), long)];
        let rendered = ResultsTable::new(&records).render();

        assert!(rendered.lines().count() > 5);
        assert_eq!(rendered.matches("0.7").count(), 1);
    }
}
