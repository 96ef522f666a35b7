//! Tests for the header-click ordering behavior over a model table.

#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use tablesort::sorter::{ModelCell, ModelRow, TableSorter};

    // ================================================================
    // Test helpers
    // ================================================================

    /// A listing row: Name | Size (display text + byte count key).
    fn entry(name: &str, size_label: &str, size_bytes: &str) -> ModelRow {
        ModelRow::new(vec![
            ModelCell::text(name),
            ModelCell::keyed(size_label, size_bytes),
        ])
    }

    /// A small mixed listing. Directories have an empty size key.
    fn listing() -> Vec<ModelRow> {
        vec![
            entry("notes.txt", "10 bytes", "10"),
            entry("archive.tar", "2 bytes", "2"),
            entry("build", "", ""),
            entry("Makefile", "9 bytes", "9"),
        ]
    }

    fn names(sorter: &TableSorter) -> Vec<String> {
        sorter.column_values(0)
    }

    // ================================================================
    // Initial sort
    // ================================================================

    #[test]
    fn attach_sorts_first_column_ascending() {
        let sorter = TableSorter::new_test(listing(), false);
        assert_eq!(sorter.order_by_attr(), Some(0));
        assert_eq!(sorter.order_attr(), "asc");
        assert_eq!(
            names(&sorter),
            vec!["archive.tar", "build", "Makefile", "notes.txt"]
        );
    }

    // ================================================================
    // Direction toggling
    // ================================================================

    #[test]
    fn second_click_reverses() {
        let mut sorter = TableSorter::new_test(listing(), false);
        sorter.order_by(0);
        assert_eq!(sorter.order_attr(), "desc");
        assert_eq!(
            names(&sorter),
            vec!["notes.txt", "Makefile", "build", "archive.tar"]
        );
    }

    #[test]
    fn direction_toggle_is_an_involution() {
        let mut sorter = TableSorter::new_test(listing(), false);
        let ascending = names(&sorter);
        sorter.order_by(0);
        sorter.order_by(0);
        assert_eq!(sorter.order_attr(), "asc");
        assert_eq!(names(&sorter), ascending);
    }

    #[test]
    fn other_column_resets_to_ascending() {
        let mut sorter = TableSorter::new_test(listing(), false);
        sorter.order_by(0); // now descending on column 0
        sorter.order_by(1);
        assert_eq!(sorter.order_by_attr(), Some(1));
        assert_eq!(sorter.order_attr(), "asc");
    }

    // ================================================================
    // Key semantics during a sort
    // ================================================================

    #[test]
    fn numeric_keys_sort_numerically() {
        // Sizes 10, 2, 9: lexicographic order would yield 10, 2, 9.
        let mut sorter = TableSorter::new_test(listing(), false);
        sorter.order_by(1);
        let sizes = sorter.column_values(1);
        assert_eq!(sizes, vec!["2 bytes", "9 bytes", "10 bytes", ""]);
    }

    #[test]
    fn numeric_keys_sort_before_text_keys() {
        // The directory's empty size key is text, so it lands last.
        let mut sorter = TableSorter::new_test(listing(), false);
        sorter.order_by(1);
        assert_eq!(names(&sorter).last().map(String::as_str), Some("build"));
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let rows = vec![
            entry("b.txt", "5 bytes", "5"),
            entry("a.txt", "5 bytes", "5"),
            entry("c.txt", "1 byte", "1"),
        ];
        let mut sorter = TableSorter::new_test(rows, false);
        sorter.order_by(1);
        // Ties keep the order produced by the previous (name) sort.
        assert_eq!(names(&sorter), vec!["c.txt", "a.txt", "b.txt"]);
    }

    // ================================================================
    // Cache invariants
    // ================================================================

    #[test]
    fn row_set_is_fixed_across_sorts() {
        let mut sorter = TableSorter::new_test(listing(), false);
        for column in [0, 1, 1, 0, 1] {
            sorter.order_by(column);
            let mut order = sorter.row_order();
            order.sort_unstable();
            assert_eq!(order, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn out_of_range_column_is_harmless() {
        let mut sorter = TableSorter::new_test(listing(), false);
        let before = names(&sorter);
        sorter.order_by(7);
        // Every key is empty text; the stable sort changes nothing.
        assert_eq!(names(&sorter), before);
        assert_eq!(sorter.order_by_attr(), Some(7));
    }

    // ================================================================
    // Snapshot
    // ================================================================

    #[test]
    fn snapshot_mirrors_table_attributes() {
        let mut sorter = TableSorter::new_test(listing(), false);
        sorter.order_by(1);
        sorter.order_by(1);

        let snapshot = sorter.snapshot();
        assert_eq!(snapshot.order_by, Some(1));
        assert_eq!(snapshot.order, "desc");
        assert_eq!(snapshot.row_count, 4);
        assert_eq!(snapshot.show_hidden, None);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["orderBy"], 1);
        assert_eq!(json["order"], "desc");
        assert_eq!(json["rowCount"], 4);
    }
}
