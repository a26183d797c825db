use super::translations::StringTable;

static PIDGIN: StringTable = StringTable {
    // --- Navigation ---
    home: "Home",
    dashboard: "Dashboard",
    marketplace: "Market",
    financial: "Money Matter",
    training: "Training",
    admin: "Admin",

    // --- Landing page ---
    hero_title: "We Dey Help Naija Business",
    hero_subtitle: "Make We Fight COVID-19 Wahala Together",
    hero_description: "Digital solution for small farming, petty trading, personal service, transport, and retail business wey COVID-19 affect.",
    get_started: "Start Now",

    // --- Income sources ---
    small_scale_farming: "Small Farming",
    petty_trading: "Petty Trading",
    personal_services: "Personal Service",
    transportation: "Transport",
    retail: "Retail",

    // --- Challenges ---
    loss_of_customers: "Customer Loss",
    movement_restrictions: "Movement Restriction",
    supply_chain_disruptions: "Supply Chain Problem",
    lack_of_capital: "No Money",
    market_closures: "Market Close",

    // --- Solutions ---
    digital_payments: "Digital Payment",
    microloans: "Small Loan",
    online_marketplace: "Online Market",
    delivery_coordination: "Delivery Help",
    business_training: "Business Training",

    // --- Common ---
    learn_more: "Learn More",
    apply_now: "Apply Now",
    connect: "Connect",
    view_details: "See Details",
    language: "Language",
};

pub fn translations() -> &'static StringTable {
    &PIDGIN
}
