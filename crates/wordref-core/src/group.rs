use crate::dom::DocumentNode;

/// Style attribute values the page alternates between on data rows.
pub const ROW_MARKERS: [&str; 2] = ["even", "odd"];

/// Split a table's rows into one run per logical entry.
///
/// Rows carrying neither style marker are decoration and skipped. Within
/// one entry the markers alternate strictly, so two adjacent rows with the
/// same marker mean a new entry begins there. An empty row set is an empty
/// group set; this never fails.
pub fn group_rows<N: DocumentNode>(rows: &[N]) -> Vec<Vec<N>> {
    let mut groups: Vec<Vec<N>> = Vec::new();
    let mut current: Vec<N> = Vec::new();
    let mut last_marker: Option<String> = None;

    for row in rows {
        let Some(class) = row.attr("class") else {
            continue;
        };
        if !ROW_MARKERS.contains(&class.as_str()) {
            continue;
        }
        if let Some(prev) = &last_marker
            && *prev == class
        {
            groups.push(std::mem::take(&mut current));
        }
        current.push(row.clone());
        last_marker = Some(class);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
