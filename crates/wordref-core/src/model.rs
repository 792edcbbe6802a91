use std::fmt;

use serde::Serialize;

/// Semantic category of one dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Main,
    Compound,
    Supplement,
}

impl Kind {
    /// Map a section tag from a table header to its kind.
    ///
    /// The tag set is closed; anything else is a template the parser does
    /// not understand and the caller must fail, not guess.
    pub fn from_section_tag(tag: &str) -> Option<Self> {
        match tag {
            "sMainMeanings" => Some(Kind::Main),
            "sCmpdForms" => Some(Kind::Compound),
            "sAddTrans" => Some(Kind::Supplement),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Main => "main",
            Kind::Compound => "compound",
            Kind::Supplement => "supplement",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical form with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Surface text as printed on the page.
    pub name: String,
    /// Language tag, e.g. "fr" or "en".
    pub language: String,
    /// Free-text part of speech, possibly empty.
    pub part_of_speech: String,
    /// Shared gloss for the sense this word belongs to.
    pub definition: String,
}

/// A usage phrase tied to one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub language: String,
    pub phrase: String,
}

/// One sense of the looked-up word: its source forms, translations and
/// example phrases, in page order.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub kind: Kind,
    pub from: Vec<Word>,
    pub to: Vec<Word>,
    pub examples: Vec<Example>,
}

/// Root of a parsed page. The first interpretation is the primary meaning.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub interpretations: Vec<Interpretation>,
}

/// Language tags recorded on words and examples when the page omits them.
///
/// The table template itself is language-agnostic, so the pair is plain
/// configuration rather than a constant of the parser.
#[derive(Debug, Clone, Serialize)]
pub struct Languages {
    pub source: String,
    pub target: String,
}

impl Default for Languages {
    fn default() -> Self {
        Self {
            source: "fr".to_string(),
            target: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tags_map_to_kinds() {
        assert_eq!(Kind::from_section_tag("sMainMeanings"), Some(Kind::Main));
        assert_eq!(Kind::from_section_tag("sCmpdForms"), Some(Kind::Compound));
        assert_eq!(Kind::from_section_tag("sAddTrans"), Some(Kind::Supplement));
    }

    #[test]
    fn unknown_or_misspelled_tags_are_rejected() {
        assert_eq!(Kind::from_section_tag("sMainMeaning"), None);
        assert_eq!(Kind::from_section_tag(""), None);
        assert_eq!(Kind::from_section_tag("smainmeanings"), None);
    }
}
