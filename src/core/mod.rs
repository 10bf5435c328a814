pub mod etl;
pub mod pipeline;
pub mod record;

pub use crate::domain::model::{ProductOption, RawProduct};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
