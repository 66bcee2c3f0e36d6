//! Property-based tests for table growth and width tracking

use proptest::prelude::*;
use std::collections::HashMap;
use tidycli::Table;

fn write_strategy() -> impl Strategy<Value = Vec<(usize, usize, String)>> {
    prop::collection::vec((0usize..6, 0usize..6, "[a-z ]{0,8}"), 0..40)
}

proptest! {
    /// Widths equal the historical maximum per column, and never shrink.
    #[test]
    fn prop_widths_track_historical_max(writes in write_strategy()) {
        let mut table = Table::new();
        let mut expected: HashMap<usize, usize> = HashMap::new();

        for (row, col, value) in writes {
            let before: Vec<usize> = (0..6).map(|c| table.column_width(c)).collect();
            let result = table.set_data(row, col, value.clone());

            if row == 0 || col == 0 {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
                let entry = expected.entry(col - 1).or_insert(0);
                *entry = (*entry).max(value.chars().count());
            }

            for (c, width) in before.iter().enumerate() {
                prop_assert!(table.column_width(c) >= *width);
            }
        }

        for c in 0..6 {
            prop_assert_eq!(table.column_width(c), expected.get(&c).copied().unwrap_or(0));
        }
    }

    /// Every successful write is readable back at its position.
    #[test]
    fn prop_written_cell_is_readable(
        row in 1usize..8,
        col in 1usize..8,
        value in "[a-zA-Z0-9]{0,10}",
    ) {
        let mut table = Table::new();
        table.set_data(row, col, value.clone()).unwrap();

        prop_assert_eq!(table.row_count(), row);
        prop_assert_eq!(table.data()[row - 1].len(), col);
        prop_assert_eq!(&table.data()[row - 1][col - 1], &value);
        for r in 0..row - 1 {
            prop_assert!(table.data()[r].is_empty());
        }
    }
}

/// Rendered lines match the row count and every cell is padded to its column.
#[test]
fn test_render_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(prop::collection::vec("[a-z]{0,6}", 1..5), 1..6),
            |rows| {
                let mut table = Table::new();
                for (i, cells) in rows.iter().enumerate() {
                    table.add_row(i + 1, cells.clone()).unwrap();
                }

                let rendered = table.render();
                assert_eq!(rendered.matches('\n').count(), rows.len());

                for (line, cells) in rendered.split('\n').zip(rows.iter()) {
                    let rendered_cells: Vec<&str> =
                        line.split('\t').take(cells.len()).collect();
                    assert_eq!(rendered_cells.len(), cells.len());
                    for (i, cell) in rendered_cells.iter().enumerate() {
                        assert_eq!(cell.chars().count(), table.column_width(i));
                        assert_eq!(cell.trim_end(), cells[i].trim_end());
                    }
                }

                Ok(())
            },
        )
        .unwrap();
}
