pub mod identity;
pub mod window;

pub use identity::IdentityMap;
pub use window::{WindowClass, WindowHandle, WindowInfo};

/// Разделитель между классом и именем окна в строке для chooser
pub const DISPLAY_SEPARATOR: &str = " - ";
