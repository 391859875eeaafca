use crate::debug_if_enabled;
use crate::error::{Result, SwitchError};
use crate::model::{IdentityMap, WindowClass, WindowHandle, WindowInfo};
use crate::services::window_source::WindowSource;
use tracing::info;

/// Превращает handle окна в человекочитаемую строку `<class> - <name>`.
///
/// Ошибка для любого окна прерывает весь запуск: окна не пропускаются.
pub struct IdentityResolver<'a> {
    source: &'a dyn WindowSource,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(source: &'a dyn WindowSource) -> Self {
        Self { source }
    }

    pub fn resolve(&self, window: WindowHandle) -> Result<WindowInfo> {
        let raw_class = self.source.wm_class(window)?;
        let class = match WindowClass::parse(&raw_class) {
            Some(class) => class,
            None => {
                return SwitchError::identity(
                    window,
                    format!(
                        "свойство WM_CLASS не содержит пары instance/class (получено {:?})",
                        String::from_utf8_lossy(&raw_class)
                    ),
                )
            }
        };

        let name = self.source.window_name(window)?;
        let info = WindowInfo::new(window, class, name);
        debug_if_enabled!("Окно {} (instance {:?})", info, info.class.instance);

        Ok(info)
    }

    /// Перечислить окна и построить карту строк в порядке `_NET_CLIENT_LIST`
    pub fn resolve_all(&self) -> Result<IdentityMap> {
        let handles = self.source.client_list()?;
        let windows = handles
            .into_iter()
            .map(|handle| self.resolve(handle))
            .collect::<Result<Vec<_>>>()?;

        let identities: IdentityMap = windows.iter().collect();
        info!("Найдено окон: {}", identities.len());
        Ok(identities)
    }
}
