pub mod app;
pub mod cursor;
pub mod draw;
pub mod hitmap;
pub mod navbar;
pub mod page;
pub mod particles;
pub mod sections;
pub mod style_env;
pub mod theme;
pub mod theme_switcher;
