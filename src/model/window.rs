use super::DISPLAY_SEPARATOR;
use std::fmt;

/// Идентификатор окна, выданный X сервером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WindowHandle(u32);

impl WindowHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for WindowHandle {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Пара instance/class из свойства WM_CLASS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowClass {
    pub instance: String,
    pub class: String,
}

impl WindowClass {
    /// Разобрать сырое значение WM_CLASS (`instance\0class\0`).
    ///
    /// Возвращает `None`, если после разбиения по `\0` получилось меньше
    /// двух компонентов. Пустое значение даёт один пустой компонент.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        let mut parts = raw.split(|&b| b == 0);
        let instance = parts.next()?;
        let class = parts.next()?;

        Some(Self {
            instance: String::from_utf8_lossy(instance).into_owned(),
            class: String::from_utf8_lossy(class).into_owned(),
        })
    }
}

/// Информация об окне
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub class: WindowClass,
    pub name: String,
}

impl WindowInfo {
    pub fn new(handle: WindowHandle, class: WindowClass, name: String) -> Self {
        Self {
            handle,
            class,
            name,
        }
    }

    /// Строка, которую видит пользователь в chooser: `<class> - <name>`
    pub fn display_string(&self) -> String {
        format!("{}{}{}", self.class.class, DISPLAY_SEPARATOR, self.name)
    }
}

impl fmt::Display for WindowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.display_string(), self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wm_class() {
        let class = WindowClass::parse(b"Navigator\0Firefox\0").unwrap();
        assert_eq!(class.instance, "Navigator");
        assert_eq!(class.class, "Firefox");
    }

    #[test]
    fn test_parse_wm_class_without_trailing_nul() {
        let class = WindowClass::parse(b"xterm\0XTerm").unwrap();
        assert_eq!(class.instance, "xterm");
        assert_eq!(class.class, "XTerm");
    }

    #[test]
    fn test_parse_wm_class_with_empty_class() {
        let class = WindowClass::parse(b"lonely\0").unwrap();
        assert_eq!(class.instance, "lonely");
        assert_eq!(class.class, "");
    }

    #[test]
    fn test_parse_wm_class_rejects_single_component() {
        assert!(WindowClass::parse(b"").is_none());
        assert!(WindowClass::parse(b"only-instance").is_none());
    }

    #[test]
    fn test_display_string() {
        let window = WindowInfo::new(
            WindowHandle::new(10),
            WindowClass::parse(b"Navigator\0Firefox\0").unwrap(),
            "Mozilla Firefox".to_string(),
        );

        assert_eq!(window.display_string(), "Firefox - Mozilla Firefox");
        assert_eq!(window.to_string(), "\"Firefox - Mozilla Firefox\" (10)");
    }

    #[test]
    fn test_handle_prints_decimal() {
        assert_eq!(WindowHandle::from(0x1c00007).to_string(), "29360135");
        assert_eq!(WindowHandle::default().value(), 0);
    }
}
