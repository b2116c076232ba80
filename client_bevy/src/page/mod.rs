mod core;
mod cursor;
mod effects;
mod hud;
mod input;
mod network;
mod scene;

pub use self::core::CorePlugin;
pub(crate) use self::core::{PageSettings, PageState, ShowToast, UpdateSet};
pub use cursor::CursorPlugin;
pub use effects::EffectsPlugin;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub(crate) use input::PointerInput;
pub use network::NetworkPlugin;
pub use scene::ScenePlugin;
