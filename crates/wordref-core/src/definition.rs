use once_cell::sync::Lazy;
use regex::Regex;

static GLOSS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("gloss pattern"));

/// Every parenthesised substring of `text`, in order, parentheses stripped
/// and inner text kept verbatim.
///
/// Each gloss ends at the first closing parenthesis; nesting is not a thing
/// the page template does. No parentheses means an empty vec, never an
/// error; the caller decides whether that is fatal.
pub fn extract_glosses(text: &str) -> Vec<String> {
    GLOSS
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
