use tracing::debug;

use crate::error::LocaleError;
use crate::i18n::{LocaleHandle, StringKey};

/// One entry of the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Locale picker backed by the shared service.
pub(crate) struct LanguageSelector {
    handle: LocaleHandle,
}

impl LanguageSelector {
    pub(crate) fn new(handle: LocaleHandle) -> Self {
        Self { handle }
    }

    /// Localized `"Language:"` caption.
    pub(crate) fn label(&self) -> Result<String, LocaleError> {
        let service = self.handle.service()?;
        Ok(format!("{}:", service.text(StringKey::Language)))
    }

    /// Available locales in catalog order with the active one flagged.
    pub(crate) fn options(&self) -> Result<Vec<LanguageOption>, LocaleError> {
        let service = self.handle.service()?;
        let active = service.get_active().code;
        Ok(service
            .list_available()
            .into_iter()
            .map(|(code, name)| LanguageOption {
                code,
                name,
                selected: code == active,
            })
            .collect())
    }

    /// Applies the user's pick. Unknown codes are returned to the caller unchanged.
    pub(crate) fn select(&self, code: &str) -> Result<(), LocaleError> {
        let service = self.handle.service()?;
        service.set_active(code).inspect_err(|error| {
            debug!(%error, "language selection rejected");
        })
    }

    /// `Language: (English)  Pidgin  Yorùbá`
    pub(crate) fn render(&self) -> Result<String, LocaleError> {
        let options: Vec<String> = self
            .options()?
            .into_iter()
            .map(|o| {
                if o.selected {
                    format!("({})", o.name)
                } else {
                    o.name.to_string()
                }
            })
            .collect();
        Ok(format!("{} {}", self.label()?, options.join("  ")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui_language_selector.rs"]
mod tests;
