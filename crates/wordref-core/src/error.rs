use crate::model::Kind;

/// Structural failures while mapping a page onto the model.
///
/// Every table on a page follows one template, so any one of these aborts
/// the whole parse: a partial result would hide that the template is not
/// the one this parser understands.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("table {table}: no section header row")]
    MissingHeaderRow { table: usize },

    #[error("table {table}: header row carries no section tag")]
    MissingSectionTag { table: usize },

    #[error("table {table}: unknown section tag `{tag}`")]
    UnrecognizedSectionTag { table: usize, tag: String },

    #[error("table {table}, group {group} ({kind}): no source word cell")]
    MissingSourceWord {
        table: usize,
        group: usize,
        kind: Kind,
    },

    #[error("table {table}, group {group} ({kind}): more than one source word cell")]
    AmbiguousSourceWord {
        table: usize,
        group: usize,
        kind: Kind,
    },

    #[error("table {table}, group {group} ({kind}): no parenthesised definition")]
    NoDefinitionFound {
        table: usize,
        group: usize,
        kind: Kind,
    },
}
