pub mod admin_prices;
pub mod admin_site_config;
pub mod auth;
pub mod home;

pub use admin_prices::AdminPricesPage;
pub use admin_site_config::AdminSiteConfigPage;
pub use auth::AuthPage;
pub use home::HomePage;
