use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

/// Literal stop command meaning "terminate the owning process instead".
pub const KILL_COMMAND: &str = "KILL";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawConfig {
    #[serde(default)]
    pub target: RawTargetSection,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawTargetSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub start_cmd: Option<String>,
    #[serde(default)]
    pub start_params: Option<String>,
    #[serde(default)]
    pub stop_cmd: Option<String>,
    #[serde(default)]
    pub stop_params: Option<String>,
    #[serde(default)]
    pub icon_on: Option<String>,
    #[serde(default)]
    pub icon_off: Option<String>,
    #[serde(default)]
    pub autostart: Option<AutostartValue>,
}

/// `autostart` may be written as a bool or as the words "yes"/"true".
/// Any other value, of any JSON type, means disabled.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AutostartValue {
    Flag(bool),
    Word(String),
    Other(serde_json::Value),
}

impl AutostartValue {
    pub fn enabled(&self) -> bool {
        match self {
            AutostartValue::Flag(flag) => *flag,
            AutostartValue::Word(word) => word == "yes" || word == "true",
            AutostartValue::Other(_) => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MonitoringConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    200
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub params: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopCommand {
    Run(LaunchCommand),
    Kill,
}

/// Validated configuration. Loaded once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetConfig {
    pub name: String,
    pub window_title: String,
    pub start: LaunchCommand,
    pub stop: StopCommand,
    pub icon_on: Option<PathBuf>,
    pub icon_off: Option<PathBuf>,
    pub autostart: bool,
    pub poll_interval: Duration,
}

impl TargetConfig {
    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let target = raw.target;
        let window_title = required("window", target.window)?;
        let start_program = required("start_cmd", target.start_cmd)?;
        let stop_program = required("stop_cmd", target.stop_cmd)?;

        let stop = if stop_program.eq_ignore_ascii_case(KILL_COMMAND) {
            StopCommand::Kill
        } else {
            StopCommand::Run(LaunchCommand {
                program: stop_program,
                params: target.stop_params.unwrap_or_default(),
            })
        };

        Ok(Self {
            name: optional(target.name).unwrap_or_else(|| window_title.clone()),
            start: LaunchCommand {
                program: start_program,
                params: target.start_params.unwrap_or_default(),
            },
            stop,
            icon_on: optional(target.icon_on).map(PathBuf::from),
            icon_off: optional(target.icon_off).map(PathBuf::from),
            autostart: target.autostart.is_some_and(|value| value.enabled()),
            poll_interval: Duration::from_millis(raw.monitoring.poll_interval_ms.max(1)),
            window_title,
        })
    }
}

fn required(key: &str, value: Option<String>) -> Result<String> {
    optional(value).ok_or_else(|| anyhow!("Config parameter 'target.{}' not defined", key))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn get_config_path() -> PathBuf {
    if let Some(arg) = std::env::args_os().nth(1) {
        return PathBuf::from(arg);
    }
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".traywarden.json")
}

pub fn parse_config(content: &str) -> Result<TargetConfig> {
    let raw = serde_json::from_str::<RawConfig>(content).context("failed to parse config file")?;
    TargetConfig::from_raw(raw)
}

pub fn load_config(path: &Path) -> Result<TargetConfig> {
    if !path.exists() {
        write_template(path)?;
        bail!(
            "Config file not found: '{}'. A template was written there; fill in the target section and restart.",
            path.display()
        );
    }
    let content = fs::read_to_string(path).context("failed to read config file")?;
    parse_config(&content)
}

fn write_template(path: &Path) -> Result<()> {
    let template = RawConfig {
        target: RawTargetSection {
            name: Some(String::new()),
            window: Some(String::new()),
            start_cmd: Some(String::new()),
            start_params: Some(String::new()),
            stop_cmd: Some(KILL_COMMAND.to_string()),
            stop_params: Some(String::new()),
            icon_on: Some(String::new()),
            icon_off: Some(String::new()),
            autostart: Some(AutostartValue::Word("no".to_string())),
        },
        monitoring: MonitoringConfig::default(),
    };
    let content =
        serde_json::to_string_pretty(&template).context("failed to serialize config template")?;
    fs::write(path, content).context("failed to write config template")?;
    log::info!("Wrote config template to {}", path.display());
    Ok(())
}
