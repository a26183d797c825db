use super::translations::StringTable;

static YORUBA: StringTable = StringTable {
    // --- Navigation ---
    home: "Ile",
    dashboard: "Dashboard",
    marketplace: "Oja",
    financial: "Owo",
    training: "Eko",
    admin: "Admin",

    // --- Landing page ---
    hero_title: "A n gbe Iṣowo Naijiriya soke",
    hero_subtitle: "A jọ koju COVID-19 wahala",
    hero_description: "Awọn solusan dijitali fun kekere oko, petty trading, awọn iṣẹ ti ara ẹni, gbigbe, ati awọn iṣowo retail ti COVID-19 kan.",
    get_started: "Bẹrẹ",

    // --- Income sources ---
    small_scale_farming: "Oko Kekere",
    petty_trading: "Iṣowo Kekere",
    personal_services: "Awọn Iṣẹ Ti Ara Ẹni",
    transportation: "Gbigbe",
    retail: "Retail",

    // --- Challenges ---
    loss_of_customers: "Padanu Awọn Onibara",
    movement_restrictions: "Awọn Ihamọ Gbigbe",
    supply_chain_disruptions: "Awọn Idalọwọduro Chain Ipese",
    lack_of_capital: "Aini Owo-ori",
    market_closures: "Oja Pipade",

    // --- Solutions ---
    digital_payments: "Awọn Sisanwo Dijitali",
    microloans: "Awọn Awin Kekere",
    online_marketplace: "Oja Ori ayelujara",
    delivery_coordination: "Iṣakoso Ifijiṣẹ",
    business_training: "Ikẹkọ Iṣowo",

    // --- Common ---
    learn_more: "Kọ Diẹ Sii",
    apply_now: "Lo Bayi",
    connect: "Darapọ",
    view_details: "Wo Awọn Alaye",
    language: "Ede",
};

pub fn translations() -> &'static StringTable {
    &YORUBA
}
