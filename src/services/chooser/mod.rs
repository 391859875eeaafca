mod process;
mod r#trait;

pub use self::process::ProcessChooser;
pub use self::r#trait::Chooser;
