use crate::adapters::html::{extract_products, CompiledSelectors};
use crate::adapters::http::fetch_page;
use crate::core::record::{build_product_option, rank_by_annual_price};
use crate::core::{ConfigProvider, Pipeline, ProductOption, RawProduct, Storage};
use crate::utils::error::Result;
use reqwest::Client;

/// Name of the JSON artifact for a run started at `epoch_millis`.
pub fn output_file_name(epoch_millis: i64) -> String {
    format!("products-{}.json", epoch_millis)
}

pub struct ScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ScrapePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawProduct>> {
        // Fail on bad selectors before touching the network.
        let selectors = CompiledSelectors::compile(self.config.selectors())?;

        tracing::info!("Fetching webpage...");
        let html = fetch_page(&self.client, self.config.url()).await?;

        tracing::info!("Scraping data...");
        let products = extract_products(&html, &selectors);
        if products.is_empty() {
            tracing::warn!(
                "No product nodes matched '{}'",
                self.config.selectors().product
            );
        }

        Ok(products)
    }

    async fn transform(&self, data: Vec<RawProduct>) -> Result<Vec<ProductOption>> {
        let mut products: Vec<ProductOption> = data.iter().map(build_product_option).collect();

        for product in &products {
            tracing::debug!(
                "Scraped '{}': price {} ({:?}), annual {}",
                product.title,
                product.price,
                product.frequency,
                product.annual_price
            );
        }

        tracing::info!(
            "Re-ordering product options by annual price with most expensive options first..."
        );
        rank_by_annual_price(&mut products);

        Ok(products)
    }

    async fn load(&self, products: Vec<ProductOption>) -> Result<String> {
        let file_name = output_file_name(chrono::Utc::now().timestamp_millis());
        let json = serde_json::to_vec(&products)?;

        tracing::debug!("Writing {} bytes to {}", json.len(), file_name);
        self.storage.write_file(&file_name, &json).await?;

        let output_path = self.storage.locate(&file_name);
        tracing::info!("Saved products in {}", output_path);
        Ok(output_path)
    }
}
