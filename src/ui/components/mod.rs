pub mod check_view;
pub mod lesson_sidebar;
pub mod phase_header;
pub mod progress_bar;
pub mod quiz_view;
pub mod slide_frame;
