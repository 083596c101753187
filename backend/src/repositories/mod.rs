pub mod price;
pub mod site_config;

pub use price::PriceRepository;
pub use site_config::SiteConfigRepository;
