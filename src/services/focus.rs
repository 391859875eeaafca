use crate::config::{Config, UnmatchedPolicy};
use crate::error::{Result, SwitchError};
use crate::model::{IdentityMap, WindowHandle};
use crate::services::window_source::WindowSource;
use std::io::Write;
use tracing::{info, warn};

/// Итог обработки выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Запрос фокуса отправлен
    Activated(WindowHandle),
    /// Строка не найдена, политика `ignore`
    Ignored(String),
    /// Оконный менеджер не сообщил ни одного окна, chooser не запускался
    NoWindows,
}

/// Сопоставляет вывод chooser с окном и запрашивает для него фокус
#[derive(Debug, Clone)]
pub struct FocusDispatcher {
    on_unmatched: UnmatchedPolicy,
    source_indication: u32,
    print: bool,
}

impl FocusDispatcher {
    pub fn new(on_unmatched: UnmatchedPolicy, source_indication: u32, print: bool) -> Self {
        Self {
            on_unmatched,
            source_indication,
            print,
        }
    }

    pub fn from_config(config: &Config, print: bool) -> Self {
        Self::new(config.selection.on_unmatched, config.focus.source, print)
    }

    /// Убрать ровно один завершающий `\n`
    pub fn selected_line(output: &str) -> &str {
        output.strip_suffix('\n').unwrap_or(output)
    }

    pub fn dispatch<W: Write>(
        &self,
        output: &str,
        identities: &IdentityMap,
        windows: &dyn WindowSource,
        out: &mut W,
    ) -> Result<FocusOutcome> {
        let line = Self::selected_line(output);

        let Some(window) = identities.get(line) else {
            return match self.on_unmatched {
                UnmatchedPolicy::Error => Err(SwitchError::UnmatchedSelection(line.to_string())),
                UnmatchedPolicy::Ignore => {
                    warn!("Выбор {:?} не соответствует ни одному окну, пропускаем", line);
                    Ok(FocusOutcome::Ignored(line.to_string()))
                }
            };
        };

        info!("Выбрано окно {} ({:?})", window, line);

        if self.print {
            writeln!(out, "{}", window)?;
            out.flush()?;
        }

        windows.activate(window, self.source_indication)?;
        Ok(FocusOutcome::Activated(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::resolver::IdentityResolver;
    use crate::services::window_source::{DryRunWindowSource, FakeWindow};

    fn source() -> DryRunWindowSource {
        DryRunWindowSource::with_windows(vec![
            FakeWindow::new(10, b"Navigator\0Firefox\0", "Mozilla Firefox"),
            FakeWindow::new(11, b"xterm\0xterm\0", "bash"),
        ])
    }

    #[test]
    fn test_selected_line_strips_single_newline() {
        assert_eq!(FocusDispatcher::selected_line("xterm - bash\n"), "xterm - bash");
        assert_eq!(FocusDispatcher::selected_line("xterm - bash"), "xterm - bash");
        assert_eq!(FocusDispatcher::selected_line("xterm - bash\n\n"), "xterm - bash\n");
        assert_eq!(FocusDispatcher::selected_line(""), "");
    }

    #[test]
    fn test_dispatch_activates_matching_window() {
        let source = source();
        let map = IdentityResolver::new(&source).resolve_all().unwrap();
        let dispatcher = FocusDispatcher::new(UnmatchedPolicy::Error, 2, false);
        let mut out: Vec<u8> = Vec::new();

        let outcome = dispatcher
            .dispatch("Firefox - Mozilla Firefox\n", &map, &source, &mut out)
            .unwrap();

        assert_eq!(outcome, FocusOutcome::Activated(WindowHandle::new(10)));
        assert_eq!(source.activated(), vec![(WindowHandle::new(10), 2)]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_dispatch_without_trailing_newline() {
        let source = source();
        let map = IdentityResolver::new(&source).resolve_all().unwrap();
        let dispatcher = FocusDispatcher::new(UnmatchedPolicy::Error, 1, false);

        let outcome = dispatcher
            .dispatch("xterm - bash", &map, &source, &mut std::io::sink())
            .unwrap();

        assert_eq!(outcome, FocusOutcome::Activated(WindowHandle::new(11)));
        assert_eq!(source.activated(), vec![(WindowHandle::new(11), 1)]);
    }

    #[test]
    fn test_print_flag_prints_handle_and_still_activates() {
        let source = source();
        let map = IdentityResolver::new(&source).resolve_all().unwrap();
        let dispatcher = FocusDispatcher::new(UnmatchedPolicy::Error, 2, true);
        let mut out: Vec<u8> = Vec::new();

        dispatcher
            .dispatch("xterm - bash\n", &map, &source, &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "11\n");
        assert_eq!(source.activated().len(), 1);
    }

    #[test]
    fn test_unmatched_selection_fails_by_default() {
        let source = source();
        let map = IdentityResolver::new(&source).resolve_all().unwrap();
        let dispatcher = FocusDispatcher::new(UnmatchedPolicy::Error, 2, true);
        let mut out: Vec<u8> = Vec::new();

        match dispatcher.dispatch("emacs - scratch\n", &map, &source, &mut out) {
            Err(SwitchError::UnmatchedSelection(line)) => assert_eq!(line, "emacs - scratch"),
            other => panic!("ожидалась ошибка UnmatchedSelection, получено {:?}", other),
        }
        assert!(source.activated().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_unmatched_selection_ignored_sends_nothing() {
        let source = source();
        let map = IdentityResolver::new(&source).resolve_all().unwrap();
        let dispatcher = FocusDispatcher::new(UnmatchedPolicy::Ignore, 2, false);

        let outcome = dispatcher
            .dispatch("", &map, &source, &mut std::io::sink())
            .unwrap();

        assert_eq!(outcome, FocusOutcome::Ignored(String::new()));
        assert!(source.activated().is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.selection.on_unmatched = UnmatchedPolicy::Ignore;
        config.focus.source = 1;

        let dispatcher = FocusDispatcher::from_config(&config, true);
        assert_eq!(dispatcher.on_unmatched, UnmatchedPolicy::Ignore);
        assert_eq!(dispatcher.source_indication, 1);
        assert!(dispatcher.print);
    }
}
