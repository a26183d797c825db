mod model;
mod persistence;
mod store;

pub(crate) use model::AppConfig;
pub(crate) use persistence::{config_base_dir, load_config, save_config};
pub(crate) use store::{MemoryStore, PreferenceStore, RonFileStore, default_preferences_path};
