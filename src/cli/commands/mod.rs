mod headings;
mod key;
mod normalize;
mod render;

pub use headings::handle_headings_command;
pub use key::handle_key_command;
pub use normalize::handle_normalize_command;
pub use render::handle_render_command;
