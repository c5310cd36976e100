//! Filter and order a raw listing into a snapshot.

use std::collections::HashSet;

use crate::models::AssetRecord;

/// Keeps the records whose id is tracked and sorts them ascending by rank.
///
/// The sort is stable: equal ranks keep their server order. Records with a
/// rank that does not parse are kept and placed after every ranked record,
/// also in server order.
pub fn select_tracked(records: Vec<AssetRecord>, tracked: &HashSet<String>) -> Vec<AssetRecord> {
    let mut selected: Vec<AssetRecord> = records
        .into_iter()
        .filter(|record| tracked.contains(&record.id))
        .collect();

    // Unranked records sort after every ranked one.
    selected.sort_by_key(|record| match record.rank_value() {
        Some(rank) => (false, rank),
        None => (true, 0),
    });

    selected
}
