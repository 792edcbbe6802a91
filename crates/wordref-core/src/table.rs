use crate::dom::{Document, DocumentNode};
use crate::entry::build_interpretation;
use crate::error::ParseError;
use crate::group::group_rows;
use crate::model::{Languages, Translation};
use crate::section::classify_section;

/// Selector for the translation tables the template uses.
pub const TABLE_SELECTOR: &str = "table.WRD";

/// Parse every recognised table of a page into one `Translation`.
///
/// Interpretations come out in document order across all tables, each
/// tagged with its table's section kind. The first structural error aborts
/// the parse; a page that half-matches the template is worth less than a
/// clear report of where it stopped matching.
pub fn parse_translation<D: Document>(
    doc: &D,
    languages: &Languages,
) -> Result<Translation, ParseError> {
    let mut interpretations = Vec::new();

    for (table_idx, table) in doc.select(TABLE_SELECTOR).into_iter().enumerate() {
        let kind = classify_section(&table, table_idx)?;
        let groups = group_rows(&table.select("tr"));
        tracing::debug!(
            "table {table_idx}: section {kind}, {} entry group(s)",
            groups.len()
        );

        for (group_idx, group) in groups.iter().enumerate() {
            interpretations.push(build_interpretation(
                group, kind, languages, table_idx, group_idx,
            )?);
        }
    }

    Ok(Translation { interpretations })
}
