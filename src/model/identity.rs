use super::{WindowHandle, WindowInfo};
use std::collections::HashMap;
use tracing::debug;

/// Соответствие "строка для chooser" -> окно.
///
/// Строки хранятся в порядке перечисления окон, по одной на окно, включая
/// повторы. Если две строки совпадают, в карте остаётся последнее окно.
#[derive(Debug, Default, Clone)]
pub struct IdentityMap {
    lines: Vec<String>,
    by_name: HashMap<String, WindowHandle>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, window: &WindowInfo) {
        let name = window.display_string();
        if let Some(previous) = self.by_name.insert(name.clone(), window.handle) {
            debug!(
                "Строка {:?} уже принадлежала окну {}, теперь окну {}",
                name, previous, window.handle
            );
        }
        self.lines.push(name);
    }

    pub fn get(&self, name: &str) -> Option<WindowHandle> {
        self.by_name.get(name).copied()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Вход для chooser: каждая строка завершается `\n`
    pub fn chooser_input(&self) -> String {
        let mut input = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            input.push_str(line);
            input.push('\n');
        }
        input
    }
}

impl<'a> FromIterator<&'a WindowInfo> for IdentityMap {
    fn from_iter<I: IntoIterator<Item = &'a WindowInfo>>(iter: I) -> Self {
        let mut map = IdentityMap::new();
        for window in iter {
            map.insert(window);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowClass;

    fn window(id: u32, class: &str, name: &str) -> WindowInfo {
        WindowInfo::new(
            WindowHandle::new(id),
            WindowClass {
                instance: class.to_lowercase(),
                class: class.to_string(),
            },
            name.to_string(),
        )
    }

    #[test]
    fn test_chooser_input_keeps_order() {
        let windows = vec![
            window(10, "Firefox", "Mozilla Firefox"),
            window(11, "xterm", "bash"),
        ];
        let map: IdentityMap = windows.iter().collect();

        assert_eq!(map.chooser_input(), "Firefox - Mozilla Firefox\nxterm - bash\n");
        assert_eq!(map.get("xterm - bash"), Some(WindowHandle::new(11)));
        assert_eq!(map.get("nothing"), None);
    }

    #[test]
    fn test_duplicate_names_keep_last_window() {
        let windows = vec![
            window(20, "xterm", "bash"),
            window(21, "xterm", "bash"),
        ];
        let map: IdentityMap = windows.iter().collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("xterm - bash"), Some(WindowHandle::new(21)));
    }

    #[test]
    fn test_empty_map() {
        let map = IdentityMap::new();
        assert!(map.is_empty());
        assert_eq!(map.chooser_input(), "");
    }
}
