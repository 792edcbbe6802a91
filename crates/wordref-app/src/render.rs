use std::fmt::Write;

use wordref_core::{Interpretation, Kind, Translation, Word};

/// Human-readable rendering of a parsed lookup, grouped by section kind.
pub fn plain(word: &str, translation: &Translation) -> String {
    let mut out = String::new();
    if translation.interpretations.is_empty() {
        let _ = writeln!(out, "no entries found for `{word}`");
        return out;
    }

    let mut current_kind: Option<Kind> = None;
    for interp in &translation.interpretations {
        if current_kind != Some(interp.kind) {
            let _ = writeln!(out, "== {} ==", section_title(interp.kind));
            current_kind = Some(interp.kind);
        }
        render_interpretation(&mut out, interp);
    }
    out
}

fn section_title(kind: Kind) -> &'static str {
    match kind {
        Kind::Main => "principal translations",
        Kind::Compound => "compound forms",
        Kind::Supplement => "additional translations",
    }
}

fn render_interpretation(out: &mut String, interp: &Interpretation) {
    let _ = writeln!(
        out,
        "{}  ({})",
        word_list(&interp.from),
        interp.from.first().map(|w| w.definition.as_str()).unwrap_or("")
    );
    if !interp.to.is_empty() {
        let _ = writeln!(out, "    -> {}", word_list(&interp.to));
    }
    for example in &interp.examples {
        let _ = writeln!(out, "    [{}] {}", example.language, example.phrase);
    }
}

fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| {
            if w.part_of_speech.is_empty() {
                w.name.clone()
            } else {
                format!("{} ({})", w.name, w.part_of_speech)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
