use serde::{Deserialize, Serialize};

use self::fetch::FetchConfig;
use self::parser::ParserConfig;

pub mod fetch;
pub mod parser;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub parser: ParserConfig,
}

impl Config {
    /// Defaults with environment overrides applied.
    pub fn new() -> Self {
        Config {
            fetch: FetchConfig::new(),
            parser: ParserConfig::new(),
        }
    }
}
