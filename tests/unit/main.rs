//! Unit tests mirroring the `src/` tree, one file per source file

mod io;

use sprint_insights::table::SprintTable;

/// Two teams over three sprints: A improves steadily, B stays high
fn sample_table() -> SprintTable {
    SprintTable::from_rows(
        &["Sprint 1", "Sprint 2", "Sprint 3"],
        &[("A", vec![0.5, 0.6, 0.8]), ("B", vec![0.9, 0.85, 0.95])],
    )
    .unwrap()
}
