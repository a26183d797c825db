/// Every string key a locale table must define.
///
/// The set is closed: rendering code can only ask for one of these, so a
/// lookup never has to deal with an unknown key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum StringKey {
    // --- Navigation ---
    Home,
    Dashboard,
    Marketplace,
    Financial,
    Training,
    Admin,

    // --- Landing page ---
    HeroTitle,
    HeroSubtitle,
    HeroDescription,
    GetStarted,

    // --- Income sources ---
    SmallScaleFarming,
    PettyTrading,
    PersonalServices,
    Transportation,
    Retail,

    // --- Challenges ---
    LossOfCustomers,
    MovementRestrictions,
    SupplyChainDisruptions,
    LackOfCapital,
    MarketClosures,

    // --- Solutions ---
    DigitalPayments,
    Microloans,
    OnlineMarketplace,
    DeliveryCoordination,
    BusinessTraining,

    // --- Common ---
    LearnMore,
    ApplyNow,
    Connect,
    ViewDetails,
    Language,
}

impl StringKey {
    /// The canonical key set, in declaration order.
    pub(crate) const ALL: &'static [StringKey] = &[
        StringKey::Home,
        StringKey::Dashboard,
        StringKey::Marketplace,
        StringKey::Financial,
        StringKey::Training,
        StringKey::Admin,
        StringKey::HeroTitle,
        StringKey::HeroSubtitle,
        StringKey::HeroDescription,
        StringKey::GetStarted,
        StringKey::SmallScaleFarming,
        StringKey::PettyTrading,
        StringKey::PersonalServices,
        StringKey::Transportation,
        StringKey::Retail,
        StringKey::LossOfCustomers,
        StringKey::MovementRestrictions,
        StringKey::SupplyChainDisruptions,
        StringKey::LackOfCapital,
        StringKey::MarketClosures,
        StringKey::DigitalPayments,
        StringKey::Microloans,
        StringKey::OnlineMarketplace,
        StringKey::DeliveryCoordination,
        StringKey::BusinessTraining,
        StringKey::LearnMore,
        StringKey::ApplyNow,
        StringKey::Connect,
        StringKey::ViewDetails,
        StringKey::Language,
    ];

    /// Stable identifier used in log output and catalog reports.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Marketplace => "marketplace",
            Self::Financial => "financial",
            Self::Training => "training",
            Self::Admin => "admin",
            Self::HeroTitle => "heroTitle",
            Self::HeroSubtitle => "heroSubtitle",
            Self::HeroDescription => "heroDescription",
            Self::GetStarted => "getStarted",
            Self::SmallScaleFarming => "smallScaleFarming",
            Self::PettyTrading => "pettyTrading",
            Self::PersonalServices => "personalServices",
            Self::Transportation => "transportation",
            Self::Retail => "retail",
            Self::LossOfCustomers => "lossOfCustomers",
            Self::MovementRestrictions => "movementRestrictions",
            Self::SupplyChainDisruptions => "supplyChainDisruptions",
            Self::LackOfCapital => "lackOfCapital",
            Self::MarketClosures => "marketClosures",
            Self::DigitalPayments => "digitalPayments",
            Self::Microloans => "microloans",
            Self::OnlineMarketplace => "onlineMarketplace",
            Self::DeliveryCoordination => "deliveryCoordination",
            Self::BusinessTraining => "businessTraining",
            Self::LearnMore => "learnMore",
            Self::ApplyNow => "applyNow",
            Self::Connect => "connect",
            Self::ViewDetails => "viewDetails",
            Self::Language => "language",
        }
    }
}
