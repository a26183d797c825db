use crate::error::LocaleError;
use crate::i18n::{LocaleHandle, StringKey};

/// A top-level route and the key of its label.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NavItem {
    pub href: &'static str,
    pub label: StringKey,
}

pub(crate) const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: StringKey::Home },
    NavItem { href: "/dashboard", label: StringKey::Dashboard },
    NavItem { href: "/marketplace", label: StringKey::Marketplace },
    NavItem { href: "/financial", label: StringKey::Financial },
    NavItem { href: "/training", label: StringKey::Training },
    NavItem { href: "/admin", label: StringKey::Admin },
];

/// Renders the navigation bar; the route matching `current_path` is bracketed.
pub(crate) fn render_navigation(handle: &LocaleHandle, current_path: &str) -> Result<String, LocaleError> {
    let service = handle.service()?;
    let labels: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            let label = service.text(item.label);
            if item.href == current_path {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    Ok(labels.join("  "))
}
