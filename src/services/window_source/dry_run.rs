use crate::error::{Result, SwitchError};
use crate::model::WindowHandle;
use parking_lot::Mutex;
use tracing::info;

use super::r#trait::WindowSource;

/// Окно-заглушка: handle, сырое значение WM_CLASS и имя
#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub handle: WindowHandle,
    pub wm_class: Vec<u8>,
    pub name: String,
}

impl FakeWindow {
    pub fn new(id: u32, wm_class: &[u8], name: &str) -> Self {
        Self {
            handle: WindowHandle::new(id),
            wm_class: wm_class.to_vec(),
            name: name.to_string(),
        }
    }
}

/// Источник окон без X сервера: фиксированный список окон,
/// запросы активации только записываются.
pub struct DryRunWindowSource {
    windows: Vec<FakeWindow>,
    activated: Mutex<Vec<(WindowHandle, u32)>>,
}

impl DryRunWindowSource {
    pub fn new() -> Self {
        Self::with_windows(vec![
            FakeWindow::new(0x1a00003, b"Navigator\0firefox\0", "Browser - dry_run"),
            FakeWindow::new(0x1c00007, b"xterm\0XTerm\0", "Terminal - dry_run"),
            FakeWindow::new(0x2000001, b"nvim\0Neovim\0", "Editor - dry_run"),
            FakeWindow::new(0x2200004, b"steam\0Steam\0", "Game - dry_run"),
        ])
    }

    pub fn with_windows(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows,
            activated: Mutex::new(Vec::new()),
        }
    }

    /// Окна, для которых был запрошен фокус, вместе с source indication
    #[allow(dead_code)]
    pub fn activated(&self) -> Vec<(WindowHandle, u32)> {
        self.activated.lock().clone()
    }

    fn find(&self, window: WindowHandle) -> Option<&FakeWindow> {
        self.windows.iter().find(|w| w.handle == window)
    }
}

impl Default for DryRunWindowSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSource for DryRunWindowSource {
    fn client_list(&self) -> Result<Vec<WindowHandle>> {
        info!("Dry-run: эмулируем {} окон", self.windows.len());
        Ok(self.windows.iter().map(|w| w.handle).collect())
    }

    fn wm_class(&self, window: WindowHandle) -> Result<Vec<u8>> {
        Ok(self
            .find(window)
            .map(|w| w.wm_class.clone())
            .unwrap_or_default())
    }

    fn window_name(&self, window: WindowHandle) -> Result<String> {
        Ok(self.find(window).map(|w| w.name.clone()).unwrap_or_default())
    }

    fn activate(&self, window: WindowHandle, source: u32) -> Result<()> {
        if self.find(window).is_none() {
            return Err(SwitchError::Focus {
                window,
                reason: "окно не существует".to_string(),
            });
        }

        info!("Dry-run: запрос фокуса для окна {} (source = {})", window, source);
        self.activated.lock().push((window, source));
        Ok(())
    }
}

/// Пустой источник: оконный менеджер без `_NET_CLIENT_LIST`
#[cfg(test)]
pub struct MissingClientList;

#[cfg(test)]
impl WindowSource for MissingClientList {
    fn client_list(&self) -> Result<Vec<WindowHandle>> {
        Err(crate::switch_error!(enumeration, "свойство _NET_CLIENT_LIST отсутствует"))
    }

    fn wm_class(&self, _window: WindowHandle) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn window_name(&self, _window: WindowHandle) -> Result<String> {
        Ok(String::new())
    }

    fn activate(&self, _window: WindowHandle, _source: u32) -> Result<()> {
        Ok(())
    }
}
