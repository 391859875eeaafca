use crate::error::Result;
use crate::model::WindowHandle;

/// Trait for window sources: the real X server or the in-memory dry-run double
pub trait WindowSource {
    /// Ordered list of managed top-level windows (`_NET_CLIENT_LIST`)
    fn client_list(&self) -> Result<Vec<WindowHandle>>;

    /// Raw `WM_CLASS` value; empty when the property is absent
    fn wm_class(&self, window: WindowHandle) -> Result<Vec<u8>>;

    /// Window title; empty when the window has no name
    fn window_name(&self, window: WindowHandle) -> Result<String>;

    /// Ask the window manager to activate the window (`_NET_ACTIVE_WINDOW`)
    fn activate(&self, window: WindowHandle, source: u32) -> Result<()>;
}

/// Factory function to create an appropriate window source based on the dry_run flag
pub fn create_window_source(dry_run: bool) -> Result<Box<dyn WindowSource>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunWindowSource::new()))
    } else {
        Ok(Box::new(super::x11::X11WindowSource::connect()?))
    }
}
