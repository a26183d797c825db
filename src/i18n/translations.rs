use super::StringKey;

/// All display strings for one locale.
///
/// Fields are grouped by area: navigation, landing page, income sources,
/// challenges, solutions, and common actions. An empty field counts as a
/// missing translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StringTable {
    // --- Navigation ---
    pub home: &'static str,
    pub dashboard: &'static str,
    pub marketplace: &'static str,
    pub financial: &'static str,
    pub training: &'static str,
    pub admin: &'static str,

    // --- Landing page ---
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
    pub get_started: &'static str,

    // --- Income sources ---
    pub small_scale_farming: &'static str,
    pub petty_trading: &'static str,
    pub personal_services: &'static str,
    pub transportation: &'static str,
    pub retail: &'static str,

    // --- Challenges ---
    pub loss_of_customers: &'static str,
    pub movement_restrictions: &'static str,
    pub supply_chain_disruptions: &'static str,
    pub lack_of_capital: &'static str,
    pub market_closures: &'static str,

    // --- Solutions ---
    pub digital_payments: &'static str,
    pub microloans: &'static str,
    pub online_marketplace: &'static str,
    pub delivery_coordination: &'static str,
    pub business_training: &'static str,

    // --- Common ---
    pub learn_more: &'static str,
    pub apply_now: &'static str,
    pub connect: &'static str,
    pub view_details: &'static str,
    pub language: &'static str,
}

impl StringTable {
    /// Raw entry for `key`, or `None` when the table leaves it empty.
    ///
    /// This does not fall back to another locale; use
    /// [`LocaleCatalog::text`](super::LocaleCatalog::text) for rendering.
    pub(crate) fn get(&self, key: StringKey) -> Option<&'static str> {
        let value = match key {
            StringKey::Home => self.home,
            StringKey::Dashboard => self.dashboard,
            StringKey::Marketplace => self.marketplace,
            StringKey::Financial => self.financial,
            StringKey::Training => self.training,
            StringKey::Admin => self.admin,
            StringKey::HeroTitle => self.hero_title,
            StringKey::HeroSubtitle => self.hero_subtitle,
            StringKey::HeroDescription => self.hero_description,
            StringKey::GetStarted => self.get_started,
            StringKey::SmallScaleFarming => self.small_scale_farming,
            StringKey::PettyTrading => self.petty_trading,
            StringKey::PersonalServices => self.personal_services,
            StringKey::Transportation => self.transportation,
            StringKey::Retail => self.retail,
            StringKey::LossOfCustomers => self.loss_of_customers,
            StringKey::MovementRestrictions => self.movement_restrictions,
            StringKey::SupplyChainDisruptions => self.supply_chain_disruptions,
            StringKey::LackOfCapital => self.lack_of_capital,
            StringKey::MarketClosures => self.market_closures,
            StringKey::DigitalPayments => self.digital_payments,
            StringKey::Microloans => self.microloans,
            StringKey::OnlineMarketplace => self.online_marketplace,
            StringKey::DeliveryCoordination => self.delivery_coordination,
            StringKey::BusinessTraining => self.business_training,
            StringKey::LearnMore => self.learn_more,
            StringKey::ApplyNow => self.apply_now,
            StringKey::Connect => self.connect,
            StringKey::ViewDetails => self.view_details,
            StringKey::Language => self.language,
        };
        (!value.trim().is_empty()).then_some(value)
    }

    /// Keys of the canonical set this table leaves empty, in key order.
    pub(crate) fn missing_keys(&self) -> Vec<StringKey> {
        StringKey::ALL
            .iter()
            .copied()
            .filter(|&key| self.get(key).is_none())
            .collect()
    }
}
