pub mod cli;
pub mod profile;

use crate::core::ConfigProvider;
use crate::domain::model::Selectors;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use profile::Profile;

pub const DEFAULT_URL: &str = "https://wltest.dns-systems.net/";

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "price-scrape")]
#[command(version, about = "CLI for scraping product options of a webpage")]
pub struct CliArgs {
    #[arg(short, long, help = "Webpage URL [default: https://wltest.dns-systems.net/]")]
    pub url: Option<String>,

    #[arg(
        long = "productSelector",
        alias = "product-selector",
        help = "Product query CSS selector [default: .widget .pricing-table .package]"
    )]
    pub product_selector: Option<String>,

    #[arg(
        long = "titleSelector",
        alias = "title-selector",
        help = "Title query CSS selector, relative to productSelector [default: .header h3]"
    )]
    pub title_selector: Option<String>,

    #[arg(
        long = "descriptionSelector",
        alias = "description-selector",
        help = "Description query CSS selector, relative to productSelector [default: .package-features .package-name]"
    )]
    pub description_selector: Option<String>,

    #[arg(
        long = "priceSelector",
        alias = "price-selector",
        help = "Price query CSS selector, relative to productSelector [default: .package-price .price-big]"
    )]
    pub price_selector: Option<String>,

    #[arg(
        long = "frequencySelector",
        alias = "frequency-selector",
        help = "Frequency query CSS selector, relative to productSelector [default: .package-price]"
    )]
    pub frequency_selector: Option<String>,

    #[arg(
        long = "discountSelector",
        alias = "discount-selector",
        help = "Discount query CSS selector, relative to productSelector [default: .package-price p]"
    )]
    pub discount_selector: Option<String>,

    #[arg(
        long = "discountFrequencySelector",
        alias = "discount-frequency-selector",
        help = "Discount frequency query CSS selector, relative to productSelector [default: .package-price p]"
    )]
    pub discount_frequency_selector: Option<String>,

    #[arg(
        long = "outDir",
        alias = "out-dir",
        help = "Output directory for the JSON file [default: directory of this executable]"
    )]
    pub out_dir: Option<String>,

    #[arg(short, long, help = "TOML profile with url, out_dir and [selectors]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// Values given on the command line, as the top settings layer.
    pub fn to_profile(&self) -> Profile {
        Profile {
            url: self.url.clone(),
            out_dir: self.out_dir.clone(),
            selectors: profile::SelectorOverrides {
                product: self.product_selector.clone(),
                title: self.title_selector.clone(),
                description: self.description_selector.clone(),
                price: self.price_selector.clone(),
                frequency: self.frequency_selector.clone(),
                discount: self.discount_selector.clone(),
                discount_frequency: self.discount_frequency_selector.clone(),
            },
        }
    }

    /// Loads the profile file, if any, and resolves the final options.
    pub fn into_options(self) -> Result<ScrapeOptions> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading profile from {}", path.display());
                Some(Profile::from_file(path)?)
            }
            None => None,
        };
        ScrapeOptions::resolve(self.to_profile(), file)
    }
}

/// Settings for one run, fixed before the pipeline starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOptions {
    pub url: String,
    pub selectors: Selectors,
    pub out_dir: String,
}

impl ScrapeOptions {
    /// Layers command-line values over the profile file over the built-in
    /// defaults, then validates the result.
    pub fn resolve(cli: Profile, file: Option<Profile>) -> Result<Self> {
        let merged = match file {
            Some(file) => cli.or(file),
            None => cli,
        };
        let defaults = Selectors::default();
        let s = merged.selectors;

        let options = Self {
            url: merged.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            selectors: Selectors {
                product: s.product.unwrap_or(defaults.product),
                title: s.title.unwrap_or(defaults.title),
                description: s.description.unwrap_or(defaults.description),
                price: s.price.unwrap_or(defaults.price),
                frequency: s.frequency.unwrap_or(defaults.frequency),
                discount: s.discount.unwrap_or(defaults.discount),
                discount_frequency: s.discount_frequency.unwrap_or(defaults.discount_frequency),
            },
            out_dir: merged.out_dir.unwrap_or_else(default_out_dir),
        };

        options.validate()?;
        Ok(options)
    }
}

/// Directory holding the running executable, or the working directory when
/// that cannot be determined.
pub fn default_out_dir() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_string_lossy().into_owned()))
        .filter(|dir| !dir.is_empty())
        .unwrap_or_else(|| ".".to_string())
}

impl Validate for ScrapeOptions {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_path("outDir", &self.out_dir)?;

        let s = &self.selectors;
        validate_non_empty_string("productSelector", &s.product)?;
        validate_non_empty_string("titleSelector", &s.title)?;
        validate_non_empty_string("descriptionSelector", &s.description)?;
        validate_non_empty_string("priceSelector", &s.price)?;
        validate_non_empty_string("frequencySelector", &s.frequency)?;
        validate_non_empty_string("discountSelector", &s.discount)?;
        validate_non_empty_string("discountFrequencySelector", &s.discount_frequency)?;
        Ok(())
    }
}

impl ConfigProvider for ScrapeOptions {
    fn url(&self) -> &str {
        &self.url
    }

    fn selectors(&self) -> &Selectors {
        &self.selectors
    }
}
