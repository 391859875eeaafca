use crate::error::Result;
use crate::switch_error;
use tracing::debug;

/// Имя дисплея из переменной окружения DISPLAY
pub fn display_name() -> Result<String> {
    resolve_display(std::env::var("DISPLAY").ok())
}

fn resolve_display(value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            debug!("DISPLAY={}", value);
            Ok(value)
        }
        _ => Err(switch_error!(
            connection,
            "переменная DISPLAY не задана, X сервер недоступен (используйте --dry-run для проверки без X)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwitchError;

    #[test]
    fn test_display_present() {
        assert_eq!(resolve_display(Some(":0".to_string())).unwrap(), ":0");
    }

    #[test]
    fn test_display_missing_is_connection_error() {
        assert!(matches!(resolve_display(None), Err(SwitchError::Connection(_))));
        assert!(matches!(
            resolve_display(Some(String::new())),
            Err(SwitchError::Connection(_))
        ));
    }
}
