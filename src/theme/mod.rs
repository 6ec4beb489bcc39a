pub mod mode;
pub mod palette;
pub mod store;
pub mod system;

pub use mode::{ColorScheme, ThemeMode};
pub use palette::Palette;
pub use store::{ModeSource, PreferenceStore};
pub use system::{EnvColorScheme, FixedColorScheme, SystemColorScheme};
