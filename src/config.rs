//! Command-line configuration

use crate::viewer::Domain;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Terminal viewer for SAT reading/writing lessons and math lectures
#[derive(Parser, Debug)]
#[command(name = "satview")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Content root: a directory or an http(s) base URL
    #[arg(long, env = "SATVIEW_CONTENT", default_value = ".")]
    pub content: String,

    /// Where to keep the last viewed lesson and unit
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tab shown first
    #[arg(long, value_enum, default_value_t = TabArg::Rw)]
    pub tab: TabArg,

    /// Forget the last viewed lesson and unit before starting
    #[arg(long)]
    pub reset: bool,

    /// Print both initial views as plain text and exit
    #[arg(long)]
    pub dump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Rw,
    Math,
}

impl From<TabArg> for Domain {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Rw => Domain::ReadingWriting,
            TabArg::Math => Domain::Math,
        }
    }
}

impl Args {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("satview.log"))
    }
}
