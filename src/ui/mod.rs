//! Text renderings of the shared page chrome and the landing page.
//!
//! Every surface reads its strings from the active locale at render time, so
//! re-rendering after a locale change is all a consumer has to do.

mod landing;
mod language_selector;
mod navigation;

pub(crate) use landing::render_landing;
pub(crate) use language_selector::LanguageSelector;
pub(crate) use navigation::render_navigation;

use crate::error::LocaleError;
use crate::i18n::LocaleHandle;

/// Navigation bar, language picker and landing page, one block per line group.
pub(crate) fn render_home(handle: &LocaleHandle, current_path: &str) -> Result<String, LocaleError> {
    let selector = LanguageSelector::new(handle.clone());
    Ok(format!(
        "{}\n{}\n\n{}",
        render_navigation(handle, current_path)?,
        selector.render()?,
        render_landing(handle)?
    ))
}
