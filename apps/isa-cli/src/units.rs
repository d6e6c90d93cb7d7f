use clap::ValueEnum;
use isa_core::units::{Length, ft, m};
use serde::Deserialize;

/// Length units accepted on the command line and in case files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnits {
    #[default]
    M,
    Ft,
}

impl LengthUnits {
    pub fn length(self, value: f64) -> Length {
        match self {
            Self::M => m(value),
            Self::Ft => ft(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
