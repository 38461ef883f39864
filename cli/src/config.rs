//! Demo settings, read from the environment.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";
pub const DEFAULT_JOKE_URL: &str = "https://v2.jokeapi.dev/joke/Programming?type=twopart";
pub const DEFAULT_STORY_PATH: &str = "story.txt";
pub const DEFAULT_USER_ID: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub base_url: String,
    pub joke_url: String,
    pub story_path: PathBuf,
    pub user_id: u32,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let user_id = match lookup("FETCH_USER_ID") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("FETCH_USER_ID={raw:?}: {e}"))?,
            None => DEFAULT_USER_ID,
        };
        Ok(Self {
            base_url: lookup("FETCH_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            joke_url: lookup("JOKE_URL").unwrap_or_else(|| DEFAULT_JOKE_URL.to_string()),
            story_path: lookup("STORY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORY_PATH)),
            user_id,
        })
    }
}
