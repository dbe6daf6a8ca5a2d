pub mod app_config;
pub mod output_config;
pub mod page_config;
pub mod provider_config;
