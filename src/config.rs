use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub chooser: ChooserConfig,
    pub selection: SelectionConfig,
    pub focus: FocusConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChooserConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectionConfig {
    pub on_unmatched: UnmatchedPolicy,
}

/// Что делать, если выбранная строка не соответствует ни одному окну
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    Error,
    Ignore,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FocusConfig {
    /// Source indication для _NET_ACTIVE_WINDOW: 0 - legacy, 1 - приложение, 2 - pager
    pub source: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "compact".to_string(),
            },
            chooser: ChooserConfig::default(),
            selection: SelectionConfig {
                on_unmatched: UnmatchedPolicy::Error,
            },
            focus: FocusConfig { source: 2 },
        }
    }
}

impl Config {
    /// Загрузить конфигурацию: значения по умолчанию, затем TOML файл (если есть),
    /// затем переменные окружения `WSWITCH_*`.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("WSWITCH_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "pretty" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if let Some(command) = &self.chooser.command {
            if command.trim().is_empty() {
                anyhow::bail!("chooser.command не может быть пустым");
            }
        }

        if self.focus.source > 2 {
            anyhow::bail!(
                "focus.source должно быть 0, 1 или 2, получено {}",
                self.focus.source
            );
        }

        Ok(())
    }

    /// Переопределить chooser из аргументов командной строки.
    /// Дополнительные аргументы заменяют `chooser.args` только если они заданы.
    pub fn apply_chooser_override(&mut self, command: Option<String>, args: Vec<String>) {
        if let Some(command) = command {
            self.chooser.command = Some(command);
        }
        if !args.is_empty() {
            self.chooser.args = args;
        }
    }

    /// Команда chooser; без неё запуск невозможен
    pub fn chooser_command(&self) -> Result<&str> {
        self.chooser
            .command
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .context("Chooser не задан: укажите его аргументом или в chooser.command")
    }
}
