use crate::domain::model::{ProductOption, RawProduct, Selectors};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Location a written `path` ends up at, for reporting.
    fn locate(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn url(&self) -> &str;
    fn selectors(&self) -> &Selectors;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawProduct>>;
    async fn transform(&self, data: Vec<RawProduct>) -> Result<Vec<ProductOption>>;
    async fn load(&self, products: Vec<ProductOption>) -> Result<String>;
}
