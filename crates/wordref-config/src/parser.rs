use std::env;

use serde::{Deserialize, Serialize};
use wordref_core::Languages;

fn default_from_lang() -> String {
    "fr".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

/// Language pair recorded on parsed words when the page omits its own tags.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ParserConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig {
            from_lang: env::var("WORDREF_FROM_LANG").unwrap_or_else(|_| default_from_lang()),
            to_lang: env::var("WORDREF_TO_LANG").unwrap_or_else(|_| default_to_lang()),
        }
    }

    pub fn languages(&self) -> Languages {
        Languages {
            source: self.from_lang.clone(),
            target: self.to_lang.clone(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
        }
    }
}
