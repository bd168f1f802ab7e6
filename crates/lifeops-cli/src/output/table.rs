//! Plain-text tables for `--format table`.
//!
//! Widths are counted in `char`s so multi-byte titles line up as well as a
//! monospace terminal allows.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns to fit
/// `max_width` and right-aligning numbers.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain(std::iter::once(display_len(header)))
                .max()
                .unwrap_or(MIN_COLUMN)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&clip(header, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(display_len(&header_line));

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let raw = row.get(index).map_or("-", String::as_str);
                let cell = clip(raw, width);
                let numeric = is_numeric(&cell);
                let padded = pad(&cell, width, numeric);
                if options.color {
                    colorize(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest column one step at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let total = |widths: &[usize]| {
        widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)
    };
    while total(widths) > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// Wrap a padded cell in an ANSI color chosen from its content.
fn colorize(padded: &str, cell: &str) -> String {
    let code = match cell {
        "true" | "completed" | "published" | "great" | "good" => "32",
        "in_progress" | "recording" | "planning" | "medium" | "neutral" => "33",
        "false" | "high" | "bad" | "terrible" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["tsk-1".into(), "high".into(), "2.5".into()],
            vec!["tsk-200".into(), "low".into(), "10".into()],
        ]
    }

    #[test]
    fn header_divider_and_rows() {
        let table = render_entity_table(&["id", "priority", "hours"], &rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("tsk-1 "));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_entity_table(&["id", "priority", "hours"], &rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].ends_with("  2.5"));
        assert!(lines[3].ends_with("   10"));
    }

    #[test]
    fn multibyte_titles_count_chars() {
        let rows = vec![vec!["英語の勉強".to_string()], vec!["gym".to_string()]];
        let table = render_entity_table(&["title"], &rows, PLAIN);
        let divider = table.lines().nth(1).unwrap();
        assert_eq!(divider.chars().count(), 5);
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let rows = vec![vec![
            "jnl-1".to_string(),
            "a rather long journal title that will not fit".to_string(),
        ]];
        let table = render_entity_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_known_states_only() {
        let rows = vec![vec!["completed".to_string(), "notes".to_string()]];
        let table = render_entity_table(
            &["status", "text"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("\u{1b}[32mcompleted"));
        assert!(row.ends_with("notes"));
    }
}
