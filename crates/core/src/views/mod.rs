//! Plain-text renderers over a [`ViewState`](crate::models::view_state::ViewState).
//!
//! Each view builds display rows up front (formatted through
//! [`crate::formatting`]) and implements `Display` as a fixed-width table.
//! Click targets are exposed by index: a row or button index maps back to the
//! investor or asset-class label the controller should be given.

pub mod asset_class_buttons;
pub mod commitments_table;
pub mod investor_table;
pub mod page;

use std::fmt;

/// Write `headers` and `rows` as a left-aligned table.
///
/// Rows flagged `true` are marked with `*` in the gutter.
pub(crate) fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[&str],
    rows: &[(bool, Vec<String>)],
) -> fmt::Result {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_line(f, ' ', &header_cells, &widths)?;

    let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    writeln!(f, "  {}", "-".repeat(rule_len))?;

    for (marked, cells) in rows {
        write_line(f, if *marked { '*' } else { ' ' }, cells, &widths)?;
    }
    Ok(())
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    gutter: char,
    cells: &[String],
    widths: &[usize],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{gutter} {}", padded.join(" | ").trim_end())
}
