use crate::domain::model::{Frequency, ProductOption, RawProduct};
use crate::domain::pricing::{find_frequency, find_price, target_frequency_price};

/// Turns the raw fragments of one product node into a `ProductOption`.
pub fn build_product_option(raw: &RawProduct) -> ProductOption {
    let text = |fragment: &Option<String>| fragment.as_deref().unwrap_or("").to_string();

    let price = find_price(&text(&raw.price_text)).unwrap_or(0.0);
    let frequency = find_frequency(&text(&raw.frequency_text));

    let discount = find_price(&text(&raw.discount_text)).unwrap_or(0.0);
    // A zero discount never carries a frequency.
    let discount_frequency =
        (discount > 0.0).then(|| find_frequency(&text(&raw.discount_frequency_text)));

    ProductOption {
        title: text(&raw.title).trim().to_string(),
        description: text(&raw.description).trim().to_string(),
        price,
        annual_price: target_frequency_price(price, frequency, Frequency::Yearly),
        frequency,
        discount,
        discount_frequency,
    }
}

/// Most expensive annualized option first. The sort is stable, so equal
/// annual prices keep their scraped order.
pub fn rank_by_annual_price(products: &mut [ProductOption]) {
    products.sort_by(|a, b| b.annual_price.total_cmp(&a.annual_price));
}
