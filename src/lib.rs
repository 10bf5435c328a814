pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::{cli::LocalStorage, profile::Profile, ScrapeOptions};

pub use core::{etl::ScrapeEngine, pipeline::ScrapePipeline};
pub use domain::model::{Frequency, ProductOption, Selectors};
pub use domain::pricing::{find_frequency, find_price, target_frequency_price};
pub use utils::error::{ErrorCategory, Result, ScrapeError};
