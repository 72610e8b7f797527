use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language used for labels, hints and date names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}
