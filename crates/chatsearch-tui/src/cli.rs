use clap::Parser;
use std::path::PathBuf;

use chatsearch_core::storage::config::CONFIG_FILE_NAME;

#[derive(Parser, Debug, Default)]
#[command(name = "chatsearch-tui")]
#[command(about = "Terminal chat sidebar with an autocompleting message search bar")]
#[command(version)]
#[command(after_help = "Search modifiers:
  from:alice            Messages sent by a user
  in:town-square        Messages in a channel
  on:2026-10-16         Messages on a date (also before:, after:)
  -word                 Exclude messages containing a word
  \"exact phrase\"        Match a phrase

Environment Variables:
  CHATSEARCH_CONFIG_DIR   Configuration directory
  CHATSEARCH_LOG          Log level (error, warn, info, debug, trace)")]
pub struct Cli {
    /// Log debug output to the log file
    #[arg(short, long)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, env = "CHATSEARCH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Place the sidebar on the right-hand side
    #[arg(long)]
    pub right_sidebar: bool,

    /// Write logs to this file (overrides the config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// JSON message store to search (overrides the config)
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

impl Cli {
    /// Config file inside `--config-dir`, if one was given.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
