pub mod price;
pub mod site_config;
pub mod user;
