use crate::definition::extract_glosses;
use crate::dom::DocumentNode;
use crate::error::ParseError;
use crate::model::{Example, Interpretation, Kind, Languages, Word};

/// Class on cells holding source-language word forms.
pub const SOURCE_WORD_CLASS: &str = "FrWrd";
/// Class on cells holding target-language word forms.
pub const TARGET_WORD_CLASS: &str = "ToWrd";
/// Class on cells holding source-language example phrases.
pub const SOURCE_EXAMPLE_CLASS: &str = "FrEx";
/// Class on cells holding target-language example phrases.
pub const TARGET_EXAMPLE_CLASS: &str = "ToEx";
/// Part-of-speech marker embedded in word cells.
pub const POS_MARKER_SELECTOR: &str = "em.POS2";
/// Optional language tag on the part-of-speech marker.
pub const POS_LANG_ATTR: &str = "lang";

enum CellRole {
    SourceWord,
    TargetWord,
    SourceExample,
    TargetExample,
    Gloss,
}

/// A cell's function in the template comes from its class, never from its
/// position; the unclassed middle cell is the gloss cell.
fn cell_role(class: Option<&str>) -> CellRole {
    let Some(class) = class else {
        return CellRole::Gloss;
    };
    for part in class.split_whitespace() {
        match part {
            SOURCE_WORD_CLASS => return CellRole::SourceWord,
            TARGET_WORD_CLASS => return CellRole::TargetWord,
            SOURCE_EXAMPLE_CLASS => return CellRole::SourceExample,
            TARGET_EXAMPLE_CLASS => return CellRole::TargetExample,
            _ => {}
        }
    }
    CellRole::Gloss
}

/// Build one `Interpretation` from a row-group.
///
/// `table_idx` and `group_idx` only feed error context; the rows themselves
/// carry everything else.
pub fn build_interpretation<N: DocumentNode>(
    rows: &[N],
    kind: Kind,
    languages: &Languages,
    table_idx: usize,
    group_idx: usize,
) -> Result<Interpretation, ParseError> {
    let mut source_cells: Vec<N> = Vec::new();
    let mut target_cells: Vec<N> = Vec::new();
    let mut gloss_text = String::new();
    let mut examples: Vec<Example> = Vec::new();

    for row in rows {
        for cell in row.select("td") {
            match cell_role(cell.attr("class").as_deref()) {
                CellRole::SourceWord => source_cells.push(cell),
                CellRole::TargetWord => target_cells.push(cell),
                CellRole::SourceExample => examples.push(Example {
                    language: languages.source.clone(),
                    phrase: normalize_ws(&cell.text()),
                }),
                CellRole::TargetExample => examples.push(Example {
                    language: languages.target.clone(),
                    phrase: normalize_ws(&cell.text()),
                }),
                CellRole::Gloss => {
                    gloss_text.push_str(&cell.text());
                    gloss_text.push(' ');
                }
            }
        }
    }

    // Exactly one source cell per group; two means the template changed
    // under us and guessing which one is canonical would corrupt the entry.
    let source_cell = match source_cells.as_slice() {
        [] => {
            return Err(ParseError::MissingSourceWord {
                table: table_idx,
                group: group_idx,
                kind,
            });
        }
        [cell] => cell,
        _ => {
            return Err(ParseError::AmbiguousSourceWord {
                table: table_idx,
                group: group_idx,
                kind,
            });
        }
    };

    let definition = extract_glosses(&gloss_text).into_iter().next().ok_or(
        ParseError::NoDefinitionFound {
            table: table_idx,
            group: group_idx,
            kind,
        },
    )?;

    let from = words_from_cell(source_cell, &languages.source, &definition);
    if from.is_empty() {
        return Err(ParseError::MissingSourceWord {
            table: table_idx,
            group: group_idx,
            kind,
        });
    }

    let mut to = Vec::new();
    for cell in &target_cells {
        to.extend(words_from_cell(cell, &languages.target, &definition));
    }

    Ok(Interpretation {
        kind,
        from,
        to,
        examples,
    })
}

/// Read every word form out of one word cell.
///
/// The embedded part-of-speech marker is detached first: its text would
/// otherwise bleed into the surface forms. What remains is comma-separated
/// surface text, one `Word` per form, all sharing the same metadata.
fn words_from_cell<N: DocumentNode>(cell: &N, default_lang: &str, definition: &str) -> Vec<Word> {
    let marker = cell.detach_first(POS_MARKER_SELECTOR);
    let (part_of_speech, language) = match &marker {
        Some(marker) => (
            normalize_ws(&marker.text()),
            marker
                .attr(POS_LANG_ATTR)
                .unwrap_or_else(|| default_lang.to_string()),
        ),
        None => (String::new(), default_lang.to_string()),
    };

    let surface = normalize_ws(&cell.text());
    surface
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Word {
            name: name.to_string(),
            language: language.clone(),
            part_of_speech: part_of_speech.clone(),
            definition: definition.to_string(),
        })
        .collect()
}

/// Collapse runs of whitespace to single spaces and trim. Markup text comes
/// through with the source document's indentation attached.
fn normalize_ws(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim_end().to_string()
}
