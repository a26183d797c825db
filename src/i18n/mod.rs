mod catalog;
mod en;
mod keys;
mod pidgin;
mod service;
mod translations;
mod yoruba;

pub(crate) use catalog::LocaleCatalog;
pub(crate) use keys::StringKey;
pub(crate) use service::{LocaleHandle, LocaleService};

#[cfg(test)]
pub(crate) use catalog::DEFAULT_LOCALE;
#[cfg(test)]
pub(crate) use service::PREFERENCE_KEY;
