#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate(value, *width), *width, is_numeric(value));
                if options.color {
                    highlight(value, cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one character at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color the padded cell by the raw value it shows.
fn highlight(raw: &str, cell: String) -> String {
    let code = match raw {
        "true" | "admin" => "32",
        "false" => "31",
        _ => return cell,
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["1".to_string(), "API".to_string()],
            vec!["1736937000000".to_string(), "Blockchain".to_string()],
        ];
        let table = render_entity_table(&["id", "term"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
        assert!(lines[2].starts_with("            1"));
    }

    #[test]
    fn long_cells_are_truncated_to_fit() {
        let rows = vec![vec!["x".repeat(80), "short".to_string()]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["content", "name"], &rows, options);
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_entity_table(&["a", "b"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.trim_end().ends_with('-')));
    }
}
