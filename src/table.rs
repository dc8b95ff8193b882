//! Box-drawing table renderer for task lists.
//!
//! Columns are a declarative list of (label, accessor) pairs; widths come
//! from the widest value in each column, never narrower than the label.
//! Widths are display widths (`unicode-width`), not byte lengths, so CJK
//! text and the like stay aligned.

use crate::model::Task;
use unicode_width::UnicodeWidthStr;

type Accessor = fn(&Task) -> &str;

const COLUMNS: [(&str, Accessor); 4] = [
    ("ID", |t| &t.id),
    ("Task", |t| &t.text),
    ("Tags", |t| &t.tags),
    ("Priority", |t| &t.priority),
];

/// Render `tasks` as a bordered table, with a light divider after every
/// `divide_every` data rows (0 disables dividers; none after the last row).
/// The result is blank-line padded on both sides, ready to print as-is.
pub fn render(tasks: &[Task], divide_every: usize) -> String {
    let widths: Vec<usize> = COLUMNS
        .iter()
        .map(|(label, get)| {
            tasks
                .iter()
                .map(|t| get(t).width())
                .max()
                .unwrap_or(0)
                .max(label.width())
        })
        .collect();

    let mut table = String::from("\n\n");

    table.push_str(&rule(&widths, "╔", "═", "╤", "╗"));

    table.push('║');
    for (i, (label, _)) in COLUMNS.iter().enumerate() {
        table.push_str(&center(label, widths[i]));
        table.push_str(cell_end(i));
    }
    table.push_str(&rule(&widths, "╠", "═", "╪", "╣"));

    for (row, task) in tasks.iter().enumerate() {
        table.push('║');
        for (i, (_, get)) in COLUMNS.iter().enumerate() {
            table.push_str(&left_justify(get(task), widths[i]));
            table.push_str(cell_end(i));
        }
        let rows_done = row + 1;
        if divide_every != 0 && rows_done % divide_every == 0 && rows_done != tasks.len() {
            table.push_str(&rule(&widths, "╟", "─", "┼", "╢"));
        }
    }

    table.push_str(&rule(&widths, "╚", "═", "╧", "╝"));
    table.push('\n');
    table
}

fn cell_end(column: usize) -> &'static str {
    if column + 1 == COLUMNS.len() {
        "║\n"
    } else {
        "│"
    }
}

fn rule(widths: &[usize], start: &str, fill: &str, sep: &str, end: &str) -> String {
    let mut row = String::from(start);
    for (i, width) in widths.iter().enumerate() {
        row.push_str(&fill.repeat(*width));
        row.push_str(if i + 1 == widths.len() { end } else { sep });
    }
    row.push('\n');
    row
}

fn left_justify(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![Task::new("0", "buy milk", "-", "0")]
    }

    #[test]
    fn renders_header_and_data_row() {
        let table = render(&sample(), 3);

        assert!(table.contains("ID"));
        assert!(table.contains("Task"));
        assert!(table.contains("Tags"));
        assert!(table.contains("Priority"));
        assert!(table.contains("buy milk"));
    }

    #[test]
    fn columns_are_at_least_label_width() {
        let table = render(&sample(), 3);

        // Labels win every column except Task, where "buy milk" is wider.
        let separator = table
            .lines()
            .find(|l| l.starts_with('╠'))
            .expect("missing header separator");
        assert_eq!(separator, "╠══╪════════╪════╪════════╣");
    }

    #[test]
    fn header_only_table_for_no_rows() {
        let table = render(&[], 1);

        assert!(table.contains("ID"));
        assert!(table.lines().any(|l| l.starts_with('╚')));
        assert!(!table.contains('╟'));
    }

    #[test]
    fn divider_after_every_n_rows_but_not_the_last() {
        let tasks: Vec<Task> = (0..4)
            .map(|i| Task::new(i.to_string(), format!("task {}", i), "-", "0"))
            .collect();

        let every_one = render(&tasks, 1);
        assert_eq!(every_one.matches('╟').count(), 3);

        let every_three = render(&tasks, 3);
        assert_eq!(every_three.matches('╟').count(), 1);

        // 3 rows with dividers every 3: the only candidate is the last row
        let exact = render(&tasks[..3], 3);
        assert_eq!(exact.matches('╟').count(), 0);
    }

    #[test]
    fn zero_disables_dividers() {
        let tasks: Vec<Task> = (0..4)
            .map(|i| Task::new(i.to_string(), "t".to_string(), "-", "0"))
            .collect();
        assert_eq!(render(&tasks, 0).matches('╟').count(), 0);
    }

    #[test]
    fn starts_and_ends_with_padding() {
        let table = render(&sample(), 3);
        assert!(table.starts_with("\n\n"));
        // Blank line after the bottom border, so the table is padded on
        // both sides even when printed with print!.
        assert!(table.ends_with("╝\n\n"));
    }

    #[test]
    fn data_rows_are_left_justified_to_column_width() {
        let tasks = vec![
            Task::new("0", "short", "-", "0"),
            Task::new("1", "a much longer task", "-", "0"),
        ];
        let table = render(&tasks, 0);
        assert!(table.contains("║0 │short             │"));
        assert!(table.contains("│a much longer task│"));
    }
}
