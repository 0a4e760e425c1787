//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Display language for battle text.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

/// Settings for one `skirmish` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Data directory; the bundled content is used when unset.
    pub content_dir: Option<PathBuf>,
    pub enemy: String,
    pub seed: Option<u64>,
    pub lang: Lang,
    /// Let the autopilot pick actions and print the log instead of drawing the TUI.
    pub autoplay: bool,
    /// Tick as fast as possible instead of at 60 Hz.
    pub fast: bool,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            enemy: Self::DEFAULT_ENEMY.to_owned(),
            seed: None,
            lang: Lang::En,
            autoplay: false,
            fast: false,
            session_id: None,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_ENEMY: &'static str = "goblin";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONTENT_DIR` - Content data directory (default: bundled data)
    /// - `SKIRMISH_ENEMY` - Enemy template id to fight (default: goblin)
    /// - `SKIRMISH_SEED` - RNG seed (default: random)
    /// - `SKIRMISH_LANG` - `en` or `zh` (default: en)
    /// - `SKIRMISH_AUTOPLAY` - Headless autopilot run (default: false)
    /// - `SKIRMISH_FAST` - Skip frame pacing (default: false)
    /// - `SKIRMISH_SESSION_ID` - Log session identifier (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.content_dir = lookup("SKIRMISH_CONTENT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(enemy) = lookup("SKIRMISH_ENEMY").filter(|id| !id.is_empty()) {
            config.enemy = enemy;
        }

        config.seed = parse(&lookup, "SKIRMISH_SEED");

        if let Some(lang) = parse::<Lang>(&lookup, "SKIRMISH_LANG") {
            config.lang = lang;
        }

        config.autoplay = flag(&lookup, "SKIRMISH_AUTOPLAY");
        config.fast = flag(&lookup, "SKIRMISH_FAST");
        config.session_id = lookup("SKIRMISH_SESSION_ID");

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

/// `true`/`false` parse as usual; a set variable with any other value counts as `true`.
fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or(true),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), CliConfig::default());
        assert_eq!(CliConfig::default().enemy, "goblin");
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("SKIRMISH_CONTENT_DIR", "/srv/data"),
            ("SKIRMISH_ENEMY", "cave_troll"),
            ("SKIRMISH_SEED", "42"),
            ("SKIRMISH_LANG", "ZH"),
            ("SKIRMISH_AUTOPLAY", "1"),
            ("SKIRMISH_FAST", "true"),
            ("SKIRMISH_SESSION_ID", "run-7"),
        ]);

        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.enemy, "cave_troll");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.lang, Lang::Zh);
        assert!(config.autoplay);
        assert!(config.fast);
        assert_eq!(config.session_id.as_deref(), Some("run-7"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("SKIRMISH_SEED", "soon"),
            ("SKIRMISH_LANG", "klingon"),
            ("SKIRMISH_FAST", "false"),
            ("SKIRMISH_ENEMY", ""),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.lang, Lang::En);
        assert!(!config.fast);
        assert_eq!(config.enemy, "goblin");
    }
}
