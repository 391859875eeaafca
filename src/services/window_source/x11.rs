use crate::error::{Result, SwitchError};
use crate::model::WindowHandle;
use crate::switch_error;
use crate::utils::display;
use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, Window};
use x11rb::rust_connection::RustConnection;

use super::r#trait::WindowSource;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        _NET_CLIENT_LIST,
        _NET_ACTIVE_WINDOW,
        _NET_WM_NAME,
        UTF8_STRING,
    }
}

pub struct X11WindowSource {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
}

impl X11WindowSource {
    /// Подключиться к X серверу из переменной DISPLAY
    pub fn connect() -> Result<Self> {
        let display_name = display::display_name()?;
        info!("Подключение к X серверу {}", display_name);

        let (conn, screen_num) = x11rb::connect(Some(display_name.as_str()))
            .map_err(|e| switch_error!(connection, "{}: {}", display_name, e))?;

        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| switch_error!(connection, "экран {} не найден", screen_num))?;

        let atoms = Atoms::new(&conn)
            .map_err(|e| switch_error!(connection, "intern_atom: {}", e))?
            .reply()
            .map_err(|e| switch_error!(connection, "intern_atom: {}", e))?;

        debug!("Корневое окно: {}, экран: {}", root, screen_num);

        Ok(Self { conn, root, atoms })
    }

    fn read_property(
        &self,
        window: WindowHandle,
        property: impl Into<u32>,
        type_: impl Into<u32>,
    ) -> Result<Option<Vec<u8>>> {
        let type_ = type_.into();
        let reply = self
            .conn
            .get_property(false, window.value(), property, type_, 0, u32::MAX)
            .map_err(|e| SwitchError::Identity {
                window,
                reason: e.to_string(),
            })?
            .reply()
            .map_err(|e| SwitchError::Identity {
                window,
                reason: e.to_string(),
            })?;

        Ok(property_value(type_, reply.type_, reply.value))
    }
}

/// Значение свойства, если оно есть и имеет запрошенный тип.
/// При несовпадении типа X сервер возвращает фактический тип и пустое значение.
fn property_value(requested: u32, actual: u32, value: Vec<u8>) -> Option<Vec<u8>> {
    if actual == x11rb::NONE {
        return None;
    }
    if requested != u32::from(AtomEnum::ANY) && actual != requested {
        debug!("Тип свойства {} вместо запрошенного {}", actual, requested);
        return None;
    }
    Some(value)
}

impl WindowSource for X11WindowSource {
    fn client_list(&self) -> Result<Vec<WindowHandle>> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms._NET_CLIENT_LIST,
                AtomEnum::WINDOW,
                0,
                u32::MAX,
            )
            .map_err(|e| switch_error!(enumeration, "{}", e))?
            .reply()
            .map_err(|e| switch_error!(enumeration, "{}", e))?;

        if reply.type_ == x11rb::NONE {
            return Err(switch_error!(
                enumeration,
                "свойство _NET_CLIENT_LIST отсутствует, оконный менеджер не поддерживает EWMH?"
            ));
        }

        let windows: Vec<WindowHandle> = reply
            .value32()
            .ok_or_else(|| switch_error!(enumeration, "неверный формат _NET_CLIENT_LIST: {}", reply.format))?
            .map(WindowHandle::from)
            .collect();

        debug!("_NET_CLIENT_LIST: {} окон", windows.len());
        Ok(windows)
    }

    fn wm_class(&self, window: WindowHandle) -> Result<Vec<u8>> {
        Ok(self
            .read_property(window, AtomEnum::WM_CLASS, AtomEnum::ANY)?
            .unwrap_or_default())
    }

    fn window_name(&self, window: WindowHandle) -> Result<String> {
        // Сначала _NET_WM_NAME (UTF-8), затем ICCCM WM_NAME
        if let Some(value) =
            self.read_property(window, self.atoms._NET_WM_NAME, self.atoms.UTF8_STRING)?
        {
            return Ok(String::from_utf8_lossy(&value).into_owned());
        }

        if let Some(value) = self.read_property(window, AtomEnum::WM_NAME, AtomEnum::ANY)? {
            return Ok(String::from_utf8_lossy(&value).into_owned());
        }

        debug!("Окно {} без имени", window);
        Ok(String::new())
    }

    fn activate(&self, window: WindowHandle, source: u32) -> Result<()> {
        let focus_error = |e: &dyn std::fmt::Display| SwitchError::Focus {
            window,
            reason: e.to_string(),
        };

        let event = ClientMessageEvent::new(
            32,
            window.value(),
            self.atoms._NET_ACTIVE_WINDOW,
            [source, x11rb::CURRENT_TIME, 0, 0, 0],
        );

        self.conn
            .send_event(
                false,
                self.root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )
            .map_err(|e| focus_error(&e))?;
        self.conn.flush().map_err(|e| focus_error(&e))?;

        info!("Отправлен _NET_ACTIVE_WINDOW для окна {}", window);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTF8_STRING: u32 = 300;
    const COMPOUND_TEXT: u32 = 301;

    #[test]
    fn test_property_value_absent() {
        assert_eq!(property_value(UTF8_STRING, x11rb::NONE, Vec::new()), None);
        assert_eq!(property_value(u32::from(AtomEnum::ANY), x11rb::NONE, Vec::new()), None);
    }

    #[test]
    fn test_property_value_type_mismatch_falls_through() {
        // _NET_WM_NAME записан не как UTF8_STRING: нужно перейти к WM_NAME
        assert_eq!(property_value(UTF8_STRING, COMPOUND_TEXT, Vec::new()), None);
    }

    #[test]
    fn test_property_value_matching_or_any_type() {
        assert_eq!(
            property_value(UTF8_STRING, UTF8_STRING, b"bash".to_vec()),
            Some(b"bash".to_vec())
        );
        assert_eq!(
            property_value(u32::from(AtomEnum::ANY), u32::from(AtomEnum::STRING), b"xterm".to_vec()),
            Some(b"xterm".to_vec())
        );
    }
}
