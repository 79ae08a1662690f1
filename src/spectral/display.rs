//! # Tabular display for the spectral table
//!
//! [`SpectralTableView`] **borrows** the [`SpectralTable`] and renders it as a table when used
//! with Rust formatting (`{}`), without cloning entries.
//!
//! - Without a filter, all 70 rows are shown, grouped by class (one block per class).
//! - With a class filter, only the ten rows of that class are shown.
//!
//! Rendering uses [`comfy-table`].
//!
//! ```rust
//! use astrocalc::spectral::{interpolator::SpectralInterpolator, SpectralClass};
//!
//! let view = SpectralInterpolator::default().display(Some(SpectralClass::G));
//! assert_eq!(view.rows().count(), 10);
//! println!("{view}");
//! ```
//!
//! [`comfy-table`]: https://crates.io/crates/comfy-table
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::spectral::{SpectralClass, SpectralSubclassEntry, SpectralTable};

/// Display adaptor over the spectral table.
#[derive(Debug, Clone, Copy)]
pub struct SpectralTableView<'a> {
    table: &'a SpectralTable,
    class_filter: Option<SpectralClass>,
}

impl<'a> SpectralTableView<'a> {
    pub fn new(table: &'a SpectralTable, class_filter: Option<SpectralClass>) -> Self {
        Self {
            table,
            class_filter,
        }
    }

    pub fn class_filter(&self) -> Option<SpectralClass> {
        self.class_filter
    }

    /// Rows selected by the filter, hottest first.
    pub fn rows(&self) -> impl Iterator<Item = &'a SpectralSubclassEntry> + 'a {
        let rows = match self.class_filter {
            Some(class) => self.table.class_rows(class),
            None => self.table.entries(),
        };
        rows.iter()
    }

    /// Selected rows grouped by class, in table order.
    pub fn groups(&self) -> Vec<(SpectralClass, Vec<&'a SpectralSubclassEntry>)> {
        let chunks = self.rows().chunk_by(|entry| entry.class);
        let groups = chunks
            .into_iter()
            .map(|(class, group)| (class, group.collect()))
            .collect();
        groups
    }

    fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Class"),
            Cell::new("Subclass"),
            Cell::new("T high [K]"),
            Cell::new("Span [K]"),
        ]);

        for (class, group) in self.groups() {
            for (i, entry) in group.iter().enumerate() {
                // class letter only on the first row of each block
                let class_cell = if i == 0 {
                    class.to_string()
                } else {
                    String::new()
                };
                table.add_row(Row::from(vec![
                    Cell::new(class_cell),
                    Cell::new(format!("{}{}", entry.class, entry.subclass)),
                    Cell::new(format!("{:.0}", entry.high_temp)).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:.0}", entry.span)).set_alignment(CellAlignment::Right),
                ]));
            }
        }

        table.to_string()
    }
}

impl fmt::Display for SpectralTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class_filter {
            Some(class) => writeln!(f, "Spectral class {class} (n={})", self.rows().count())?,
            None => writeln!(f, "Spectral table (n={})", self.rows().count())?,
        }
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod display_test {
    use super::*;

    #[test]
    fn test_unfiltered_groups() {
        let view = SpectralTableView::new(SpectralTable::global(), None);
        let groups = view.groups();
        assert_eq!(view.rows().count(), 70);
        assert_eq!(groups.len(), 7);
        assert_eq!(
            groups.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            SpectralClass::ALL.to_vec()
        );
        assert!(groups.iter().all(|(_, rows)| rows.len() == 10));
    }

    #[test]
    fn test_filtered_view() {
        let view = SpectralTableView::new(SpectralTable::global(), Some(SpectralClass::B));
        assert_eq!(view.rows().count(), 10);
        assert_eq!(view.groups().len(), 1);

        let rendered = view.to_string();
        assert!(rendered.starts_with("Spectral class B (n=10)"));
        assert!(rendered.contains("B0"));
        assert!(rendered.contains("31400"));
        assert!(!rendered.contains("G2"));
    }
}
