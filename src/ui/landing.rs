use crate::error::LocaleError;
use crate::i18n::{LocaleHandle, StringKey};

const INCOME_SOURCES: &[StringKey] = &[
    StringKey::SmallScaleFarming,
    StringKey::PettyTrading,
    StringKey::PersonalServices,
    StringKey::Transportation,
    StringKey::Retail,
];

const CHALLENGES: &[StringKey] = &[
    StringKey::LossOfCustomers,
    StringKey::MovementRestrictions,
    StringKey::SupplyChainDisruptions,
    StringKey::LackOfCapital,
    StringKey::MarketClosures,
];

const SOLUTIONS: &[StringKey] = &[
    StringKey::DigitalPayments,
    StringKey::Microloans,
    StringKey::OnlineMarketplace,
    StringKey::DeliveryCoordination,
    StringKey::BusinessTraining,
];

/// Hero block, then one list each for income sources, challenges and solutions.
///
/// Each list item carries the call to action its card shows.
pub(crate) fn render_landing(handle: &LocaleHandle) -> Result<String, LocaleError> {
    let service = handle.service()?;
    let t = |key: StringKey| service.text(key);

    let mut lines = vec![
        t(StringKey::HeroTitle).to_string(),
        t(StringKey::HeroSubtitle).to_string(),
        t(StringKey::HeroDescription).to_string(),
        format!("> {}", t(StringKey::GetStarted)),
    ];
    for (items, action) in [
        (INCOME_SOURCES, StringKey::ViewDetails),
        (CHALLENGES, StringKey::LearnMore),
        (SOLUTIONS, StringKey::ApplyNow),
    ] {
        lines.push(String::new());
        lines.extend(items.iter().map(|&item| format!("- {} [{}]", t(item), t(action))));
    }
    lines.push(String::new());
    lines.push(t(StringKey::Connect).to_string());
    Ok(lines.join("\n"))
}
