use crate::config::types::{ConfigError, DashConfig};
use crate::nav::TabId;
use crate::paths::PATH_CONFIG;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{info, warn};

const MIN_NOTIFICATION_SECS: f32 = 0.5;
const MAX_NOTIFICATION_SECS: f32 = 60.0;

pub fn load_cfg() -> DashConfig {
    let path = PATH_CONFIG.join("settings.json");

    match load_cfg_from(&path) {
        Ok(config) => {
            info!("Loaded settings from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            // No settings file is the normal case
            DashConfig::default()
        }
        Err(e) => {
            warn!("{} ({}); using default settings", e, path.display());
            DashConfig::default()
        }
    }
}

pub fn load_cfg_from(path: &Path) -> Result<DashConfig, ConfigError> {
    let file = File::open(path)?;
    let config: DashConfig = serde_json::from_reader(BufReader::new(file))?;
    Ok(normalize(config))
}

/// Clamp values a hand-edited file could get wrong
fn normalize(mut config: DashConfig) -> DashConfig {
    let defaults = DashConfig::default();
    config.volume = if config.volume.is_finite() {
        config.volume.clamp(0.0, 1.0)
    } else {
        defaults.volume
    };
    config.notification_secs = if config.notification_secs.is_finite() {
        config
            .notification_secs
            .clamp(MIN_NOTIFICATION_SECS, MAX_NOTIFICATION_SECS)
    } else {
        defaults.notification_secs
    };
    config
}

/// Arguments after the program name; empty when argv itself is empty
pub fn cli_args(argv: &[String]) -> &[String] {
    argv.get(1..).unwrap_or_default()
}

/// Apply command line overrides on top of the loaded settings
pub fn apply_cli_args(config: &mut DashConfig, args: &[String]) -> Result<(), ConfigError> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fullscreen" => config.fullscreen = true,
            "--mute" => config.sound_enabled = false,
            "--no-gamepad" => config.gamepad_enabled = false,
            "--no-effects" => config.effects_enabled = false,
            "--tab" => {
                let key = iter.next().ok_or(ConfigError::MissingValue("--tab"))?;
                config.start_tab =
                    TabId::from_key(key).ok_or_else(|| ConfigError::UnknownTab(key.clone()))?;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: DashConfig =
            serde_json::from_str(r#"{ "start_tab": "music", "clock_24h": true }"#).unwrap();
        assert_eq!(config.start_tab, TabId::Music);
        assert!(config.clock_24h);
        assert!(config.sound_enabled);
        assert_eq!(config.notification_secs, 3.0);
    }

    #[test]
    fn test_normalize_clamps() {
        let config = normalize(DashConfig {
            volume: 4.0,
            notification_secs: 0.0,
            ..Default::default()
        });
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.notification_secs, MIN_NOTIFICATION_SECS);

        let config = normalize(DashConfig {
            volume: f32::NAN,
            ..Default::default()
        });
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "console-dash-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "volume": 0.25, "effects_enabled": false }"#).unwrap();

        let config = load_cfg_from(&path).unwrap();
        assert_eq!(config.volume, 0.25);
        assert!(!config.effects_enabled);

        std::fs::write(&path, r#"{ "notification_secs": 1e30 }"#).unwrap();
        let config = load_cfg_from(&path).unwrap();
        assert_eq!(config.notification_secs, MAX_NOTIFICATION_SECS);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Json(_))));

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = DashConfig::default();
        apply_cli_args(
            &mut config,
            &args(&["console-dash", "--fullscreen", "--mute", "--tab", "Video"]),
        )
        .unwrap();
        assert!(config.fullscreen);
        assert!(!config.sound_enabled);
        assert_eq!(config.start_tab, TabId::Video);
    }

    #[test]
    fn test_cli_args_skips_program_name() {
        assert!(cli_args(&[]).is_empty());
        assert!(cli_args(&args(&["console-dash"])).is_empty());
        assert_eq!(cli_args(&args(&["console-dash", "--mute"])), args(&["--mute"]));

        let mut config = DashConfig::default();
        apply_cli_args(&mut config, cli_args(&[])).unwrap();
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_cli_rejects_bad_tab() {
        let mut config = DashConfig::default();
        assert!(matches!(
            apply_cli_args(&mut config, &args(&["--tab", "arcade"])),
            Err(ConfigError::UnknownTab(_))
        ));
        assert!(matches!(
            apply_cli_args(&mut config, &args(&["--tab"])),
            Err(ConfigError::MissingValue("--tab"))
        ));
    }
}
