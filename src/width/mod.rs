//! Terminal display width helpers.

mod utils;

pub use utils::{display_width, strip_colors};
