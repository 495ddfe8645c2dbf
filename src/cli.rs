use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::api::TitlePreference;

#[derive(Parser, Debug)]
#[command(name = "opedrenamer")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename anime opening/ending videos to canonical titles")]
pub struct Args {
    /// Directory containing the video files to rename
    pub directory: PathBuf,

    /// Show proposed renames without modifying the filesystem
    #[arg(short, long)]
    pub preview: bool,

    /// Preferred title language for resolved names
    #[arg(short, long, value_enum, default_value_t = TitleLanguage::English)]
    pub language: TitleLanguage,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleLanguage {
    English,
    Romaji,
}

impl From<TitleLanguage> for TitlePreference {
    fn from(language: TitleLanguage) -> Self {
        match language {
            TitleLanguage::English => TitlePreference::English,
            TitleLanguage::Romaji => TitlePreference::Romaji,
        }
    }
}
