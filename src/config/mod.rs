mod loader;

pub use loader::{find_default_options, load_options};
