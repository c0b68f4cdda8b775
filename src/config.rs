use std::env;
use std::path::PathBuf;

use crate::modules::cataloguing_pro::CleanMode;

pub const DEFAULT_TAXONOMY_PATH: &str = "data/clc.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub taxonomy_path: PathBuf,
    pub clean_mode: CleanMode,
}

impl Config {
    pub fn from_env() -> Self {
        let taxonomy_path = env::var("CLC_TAXONOMY_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TAXONOMY_PATH.to_string());

        let clean_mode = match env::var("CLC_CLEAN_MODE") {
            Ok(mode) => mode.parse::<CleanMode>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to strict", e);
                CleanMode::Strict
            }),
            Err(_) => CleanMode::Strict,
        };

        Self {
            taxonomy_path: PathBuf::from(taxonomy_path),
            clean_mode,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from(DEFAULT_TAXONOMY_PATH),
            clean_mode: CleanMode::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        unsafe {
            env::remove_var("CLC_TAXONOMY_PATH");
            env::remove_var("CLC_CLEAN_MODE");
        }
        let config = Config::from_env();
        assert_eq!(config.taxonomy_path, PathBuf::from(DEFAULT_TAXONOMY_PATH));
        assert_eq!(config.clean_mode, CleanMode::Strict);
    }

    #[test]
    #[serial]
    fn test_reads_env_overrides() {
        unsafe {
            env::set_var("CLC_TAXONOMY_PATH", "/tmp/clc_full.json");
            env::set_var("CLC_CLEAN_MODE", "loose");
        }
        let config = Config::from_env();
        assert_eq!(config.taxonomy_path, PathBuf::from("/tmp/clc_full.json"));
        assert_eq!(config.clean_mode, CleanMode::Loose);

        unsafe {
            env::set_var("CLC_CLEAN_MODE", "bogus");
        }
        assert_eq!(Config::from_env().clean_mode, CleanMode::Strict);

        unsafe {
            env::remove_var("CLC_TAXONOMY_PATH");
            env::remove_var("CLC_CLEAN_MODE");
        }
    }
}
