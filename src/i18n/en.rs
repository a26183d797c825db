use super::translations::StringTable;

static EN: StringTable = StringTable {
    // --- Navigation ---
    home: "Home",
    dashboard: "Dashboard",
    marketplace: "Marketplace",
    financial: "Financial",
    training: "Training",
    admin: "Admin",

    // --- Landing page ---
    hero_title: "Empowering Nigerian Businesses",
    hero_subtitle: "Overcoming COVID-19 Challenges Together",
    hero_description: "Digital solutions for small-scale farming, petty trading, personal services, transportation, and retail businesses affected by COVID-19.",
    get_started: "Get Started",

    // --- Income sources ---
    small_scale_farming: "Small-Scale Farming",
    petty_trading: "Petty Trading",
    personal_services: "Personal Services",
    transportation: "Transportation",
    retail: "Retail",

    // --- Challenges ---
    loss_of_customers: "Loss of Customers",
    movement_restrictions: "Movement Restrictions",
    supply_chain_disruptions: "Supply Chain Disruptions",
    lack_of_capital: "Lack of Capital",
    market_closures: "Market Closures",

    // --- Solutions ---
    digital_payments: "Digital Payments",
    microloans: "Microloans",
    online_marketplace: "Online Marketplace",
    delivery_coordination: "Delivery Coordination",
    business_training: "Business Training",

    // --- Common ---
    learn_more: "Learn More",
    apply_now: "Apply Now",
    connect: "Connect",
    view_details: "View Details",
    language: "Language",
};

pub fn translations() -> &'static StringTable {
    &EN
}
