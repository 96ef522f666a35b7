//! Tests for hidden-entry detection and the visibility toggle.

#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use tablesort::sorter::{ModelCell, ModelRow, TableSorter};
    use tablesort::{markup, visibility};

    // ================================================================
    // Test helpers
    // ================================================================

    fn file(name: &str) -> ModelRow {
        ModelRow::new(vec![ModelCell::text(name)])
    }

    fn hidden_file(name: &str) -> ModelRow {
        ModelRow::hidden(vec![ModelCell::text(name)])
    }

    fn listing_with_hidden() -> Vec<ModelRow> {
        vec![file("visible.txt"), hidden_file(".secret"), file("data.bin")]
    }

    // ================================================================
    // Filter-class rules
    // ================================================================

    #[test]
    fn unchecked_box_applies_filter_class() {
        assert_eq!(visibility::filter_class(false), Some(markup::FILTER_CLASS));
        assert_eq!(visibility::filter_class(true), None);
    }

    #[test]
    fn filter_only_suppresses_hidden_rows() {
        assert!(visibility::row_visible(false, false));
        assert!(!visibility::row_visible(false, true));
        assert!(visibility::row_visible(true, true));
    }

    // ================================================================
    // Attach-time detection
    // ================================================================

    #[test]
    fn hidden_entries_reveal_the_toggle_and_filter() {
        let sorter = TableSorter::new_test(listing_with_hidden(), true);
        assert!(sorter.toggle_revealed());
        assert!(sorter.filter_applied());
        // The hidden row is suppressed; the others show, in sorted order.
        assert_eq!(sorter.visible_rows(), vec![2, 0]);
    }

    #[test]
    fn no_hidden_entries_keeps_the_toggle_concealed() {
        let rows = vec![file("a.txt"), file("b.txt")];
        let mut sorter = TableSorter::new_test(rows, true);
        assert!(!sorter.toggle_revealed());
        assert!(!sorter.filter_applied());

        // Checkbox state is irrelevant without hidden entries.
        sorter.set_show_hidden(true);
        assert!(!sorter.filter_applied());
        assert_eq!(sorter.visible_rows().len(), 2);
    }

    #[test]
    fn without_a_toggle_hidden_rows_stay_visible() {
        let sorter = TableSorter::new_test(listing_with_hidden(), false);
        assert!(!sorter.toggle_revealed());
        assert!(!sorter.filter_applied());
        assert_eq!(sorter.visible_rows().len(), 3);
    }

    // ================================================================
    // Toggling
    // ================================================================

    #[test]
    fn checking_the_box_reveals_hidden_rows() {
        let mut sorter = TableSorter::new_test(listing_with_hidden(), true);
        assert_eq!(sorter.visible_rows().len(), 2);

        sorter.set_show_hidden(true);
        assert!(!sorter.filter_applied());
        assert_eq!(sorter.visible_rows().len(), 3);

        sorter.set_show_hidden(false);
        assert_eq!(sorter.visible_rows().len(), 2);
    }

    #[test]
    fn snapshot_reports_hidden_rows_and_checkbox() {
        let mut sorter = TableSorter::new_test(listing_with_hidden(), true);
        let snapshot = sorter.snapshot();
        assert_eq!(snapshot.hidden_rows, 1);
        assert_eq!(snapshot.show_hidden, Some(false));

        sorter.set_show_hidden(true);
        assert_eq!(sorter.snapshot().show_hidden, Some(true));
    }
}
