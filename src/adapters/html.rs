use crate::domain::model::{RawProduct, Selectors};
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// `Selectors` parsed once, ready to run against a document.
#[derive(Debug)]
pub struct CompiledSelectors {
    product: Selector,
    title: Selector,
    description: Selector,
    price: Selector,
    frequency: Selector,
    discount: Selector,
    discount_frequency: Selector,
}

impl CompiledSelectors {
    pub fn compile(selectors: &Selectors) -> Result<Self> {
        Ok(Self {
            product: parse_selector("productSelector", &selectors.product)?,
            title: parse_selector("titleSelector", &selectors.title)?,
            description: parse_selector("descriptionSelector", &selectors.description)?,
            price: parse_selector("priceSelector", &selectors.price)?,
            frequency: parse_selector("frequencySelector", &selectors.frequency)?,
            discount: parse_selector("discountSelector", &selectors.discount)?,
            discount_frequency: parse_selector(
                "discountFrequencySelector",
                &selectors.discount_frequency,
            )?,
        })
    }
}

fn parse_selector(field: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::SelectorError {
        field: field.to_string(),
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Text of the first descendant of `node` matching `selector`.
fn first_text(node: ElementRef<'_>, selector: &Selector) -> Option<String> {
    node.select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Parses `html` and collects the text fragments of every product node,
/// in document order.
pub fn extract_products(html: &str, selectors: &CompiledSelectors) -> Vec<RawProduct> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.product)
        .map(|node| RawProduct {
            title: first_text(node, &selectors.title),
            description: first_text(node, &selectors.description),
            price_text: first_text(node, &selectors.price),
            frequency_text: first_text(node, &selectors.frequency),
            discount_text: first_text(node, &selectors.discount),
            discount_frequency_text: first_text(node, &selectors.discount_frequency),
        })
        .collect()
}
