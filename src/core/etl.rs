use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs one scrape from fetch to persisted file.
pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns where the ranked products were written.
    pub async fn run(&self) -> Result<String> {
        let raw_products = self.pipeline.extract().await?;
        tracing::info!("Found {} product nodes", raw_products.len());

        let products = self.pipeline.transform(raw_products).await?;
        tracing::debug!("Built {} product options", products.len());

        self.pipeline.load(products).await
    }
}
