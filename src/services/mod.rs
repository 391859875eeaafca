pub mod chooser;
pub mod focus;
pub mod resolver;
pub mod switcher;
pub mod window_source;

pub use chooser::ProcessChooser;
pub use focus::{FocusDispatcher, FocusOutcome};
pub use switcher::Switcher;
pub use window_source::create_window_source;
