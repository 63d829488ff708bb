pub mod browser;
pub mod resolver;
pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub use theme_ctx::{ThemeCtx, ThemeCtxSub, WithTheme};
pub use themes::Theme;
pub use toggle::ThemeToggle;
