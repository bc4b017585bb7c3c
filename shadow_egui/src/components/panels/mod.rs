mod controls;
mod debug;

pub use controls::show_controls;
pub use debug::show_debug_window;
