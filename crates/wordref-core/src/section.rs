use crate::dom::DocumentNode;
use crate::error::ParseError;
use crate::model::Kind;

/// Class on the single header row each table opens with.
pub const HEADER_ROW_SELECTOR: &str = "tr.wrtopsection";
/// Marker element inside the header row carrying the section tag.
pub const SECTION_TAG_SELECTOR: &str = ".ph";
/// Attribute on the marker element naming the section.
pub const SECTION_TAG_ATTR: &str = "data-ph";

/// Read a table's section kind from its header row.
///
/// The header row is detached in the process so the row-grouping and entry
/// stages can never mistake it for a data row.
pub fn classify_section<N: DocumentNode>(table: &N, table_idx: usize) -> Result<Kind, ParseError> {
    let header = table
        .detach_first(HEADER_ROW_SELECTOR)
        .ok_or(ParseError::MissingHeaderRow { table: table_idx })?;

    let tag = header
        .select(SECTION_TAG_SELECTOR)
        .into_iter()
        .next()
        .and_then(|marker| marker.attr(SECTION_TAG_ATTR))
        .ok_or(ParseError::MissingSectionTag { table: table_idx })?;

    Kind::from_section_tag(&tag).ok_or(ParseError::UnrecognizedSectionTag {
        table: table_idx,
        tag,
    })
}
