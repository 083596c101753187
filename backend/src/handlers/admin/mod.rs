pub mod prices;
pub mod site_config;

pub use prices::{create_price, list_prices};
pub use site_config::{get_site_config, update_site_config};
