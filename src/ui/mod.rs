pub mod components;
pub mod layout;
pub mod lesson_theme;
pub mod slides;
pub mod theme;
