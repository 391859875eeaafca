use crate::model::WindowHandle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не удалось подключиться к X серверу: {0}")]
    Connection(String),

    #[error("Не удалось получить список окон: {0}")]
    Enumeration(String),

    #[error("Окно {window}: {reason}")]
    Identity { window: WindowHandle, reason: String },

    #[error("Не удалось запустить chooser '{program}': {source}")]
    ChooserSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Chooser завершился с ошибкой, rc = {}", exit_code_text(.code))]
    ChooserExit { code: Option<i32> },

    #[error("Выбранная строка не соответствует ни одному окну: {0:?}")]
    UnmatchedSelection(String),

    #[error("Не удалось активировать окно {window}: {reason}")]
    Focus { window: WindowHandle, reason: String },
}

impl SwitchError {
    /// Код завершения процесса для каждого вида ошибки
    pub fn exit_code(&self) -> u8 {
        match self {
            SwitchError::Io(_) => 1,
            SwitchError::Config(_) => 2,
            SwitchError::Connection(_) => 3,
            SwitchError::Enumeration(_) => 4,
            SwitchError::Identity { .. } => 5,
            SwitchError::ChooserSpawn { .. } => 6,
            SwitchError::ChooserExit { .. } => 7,
            SwitchError::UnmatchedSelection(_) => 8,
            SwitchError::Focus { .. } => 9,
        }
    }

    pub fn identity<T>(window: WindowHandle, reason: impl Into<String>) -> Result<T> {
        Err(SwitchError::Identity {
            window,
            reason: reason.into(),
        })
    }
}

pub type Result<T> = std::result::Result<T, SwitchError>;

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! switch_error {
    (connection, $($arg:tt)*) => {
        $crate::error::SwitchError::Connection(format!($($arg)*))
    };
    (enumeration, $($arg:tt)*) => {
        $crate::error::SwitchError::Enumeration(format!($($arg)*))
    };
}
