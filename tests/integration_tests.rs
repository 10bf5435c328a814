use httpmock::prelude::*;
use price_scrape::{
    ErrorCategory, Frequency, LocalStorage, ProductOption, ScrapeEngine, ScrapeOptions,
    ScrapePipeline, Selectors,
};
use tempfile::TempDir;

const PRICING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <div class="widget">
      <div class="pricing-table">
        <div class="package">
          <div class="header"><h3> Monthly Plan </h3></div>
          <div class="package-features">
            <ul><li class="package-name">Monthly access</li></ul>
          </div>
          <div class="package-price">
            <span class="price-big">$9.99</span> monthly
          </div>
        </div>
        <div class="package">
          <div class="header"><h3>Yearly Plan</h3></div>
          <div class="package-features">
            <ul><li class="package-name">Yearly access</li></ul>
          </div>
          <div class="package-price">
            <span class="price-big">$99.00</span> per year
            <p>Now $79.00 per year</p>
          </div>
        </div>
      </div>
    </div>
  </body>
</html>"#;

fn options_for(url: String, out_dir: &TempDir) -> ScrapeOptions {
    ScrapeOptions {
        url,
        selectors: Selectors::default(),
        out_dir: out_dir.path().to_string_lossy().into_owned(),
    }
}

fn json_files(dir: &TempDir) -> Vec<String> {
    std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("products-") && name.ends_with(".json"))
        .collect()
}

#[tokio::test]
async fn test_monthly_product_outranks_cheaper_yearly_product() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(PRICING_PAGE);
        })
        .await;

    let options = options_for(server.url("/"), &temp_dir);
    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));

    let output_path = engine.run().await.unwrap();
    page_mock.assert_async().await;

    let files = json_files(&temp_dir);
    assert_eq!(files.len(), 1);
    assert!(output_path.ends_with(&files[0]));

    let written = std::fs::read(&output_path).unwrap();
    let products: Vec<ProductOption> = serde_json::from_slice(&written).unwrap();

    assert_eq!(products.len(), 2);

    // 9.99 * 12 = 119.88 beats 99.00 a year
    let monthly = &products[0];
    assert_eq!(monthly.title, "Monthly Plan");
    assert_eq!(monthly.description, "Monthly access");
    assert_eq!(monthly.price, 9.99);
    assert_eq!(monthly.frequency, Frequency::Monthly);
    assert!((monthly.annual_price - 119.88).abs() < 1e-9);
    assert_eq!(monthly.discount, 0.0);
    assert_eq!(monthly.discount_frequency, None);

    let yearly = &products[1];
    assert_eq!(yearly.title, "Yearly Plan");
    assert_eq!(yearly.price, 99.0);
    assert_eq!(yearly.frequency, Frequency::Yearly);
    assert_eq!(yearly.annual_price, 99.0);
    assert_eq!(yearly.discount, 79.0);
    assert_eq!(yearly.discount_frequency, Some(Frequency::Yearly));

    let raw: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert!(raw[0].get("discountFrequency").is_none());
    assert_eq!(raw[1]["discountFrequency"], "Y");
    assert_eq!(raw[1]["frequency"], "Y");
    assert_eq!(raw[0]["frequency"], "M");
}

#[tokio::test]
async fn test_page_without_products_writes_empty_array() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/closed");
            then.status(200).body("<html><body><p>Sold out</p></body></html>");
        })
        .await;

    let options = options_for(server.url("/closed"), &temp_dir);
    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));

    let output_path = engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "[]");
}

#[tokio::test]
async fn test_server_error_is_a_network_failure() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/down");
            then.status(500);
        })
        .await;

    let options = options_for(server.url("/down"), &temp_dir);
    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));

    let err = engine.run().await.unwrap_err();

    page_mock.assert_async().await;
    assert_eq!(err.category(), ErrorCategory::Network);
    assert_eq!(err.exit_code(), 2);
    assert!(json_files(&temp_dir).is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_failure() {
    let temp_dir = TempDir::new().unwrap();

    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let options = options_for("http://127.0.0.1:9/".to_string(), &temp_dir);
    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn test_invalid_selector_is_a_parse_failure() {
    let temp_dir = TempDir::new().unwrap();

    let mut options = options_for("http://127.0.0.1:9/".to_string(), &temp_dir);
    options.selectors.title = "h3[".to_string();
    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));

    let err = engine.run().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Parse);
    assert_eq!(err.exit_code(), 3);
}

#[cfg(feature = "cli")]
#[tokio::test]
async fn test_profile_file_drives_the_run() -> anyhow::Result<()> {
    use clap::Parser;
    use price_scrape::CliArgs;

    let temp_dir = TempDir::new()?;
    let out_dir = temp_dir.path().join("out");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/plans");
            then.status(200).body(
                r#"<section>
                     <article class="tier"><h2>Lite</h2><b>€3.50</b><i>per month</i></article>
                     <article class="tier"><h2>Plus</h2><b>€40.00</b><i>Annual</i></article>
                   </section>"#,
            );
        })
        .await;

    let profile_path = temp_dir.path().join("profile.toml");
    std::fs::write(
        &profile_path,
        format!(
            r#"url = "{}"
out_dir = "{}"

[selectors]
product = "article.tier"
title = "h2"
description = "p"
price = "b"
frequency = "i"
discount = "s"
discount_frequency = "s"
"#,
            server.url("/plans"),
            out_dir.to_string_lossy().replace('\\', "/")
        ),
    )?;

    let args = CliArgs::parse_from([
        "price-scrape",
        "--config",
        profile_path.to_str().unwrap(),
        "--titleSelector",
        "b",
    ]);
    let options = args.into_options()?;
    assert_eq!(options.selectors.title, "b");
    assert_eq!(options.selectors.product, "article.tier");

    let storage = LocalStorage::new(options.out_dir.clone());
    let engine = ScrapeEngine::new(ScrapePipeline::new(storage, options));
    let output_path = engine.run().await?;

    let products: Vec<ProductOption> =
        serde_json::from_slice(&std::fs::read(&output_path)?)?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "€3.50");
    assert_eq!(products[0].annual_price, 42.0);
    assert_eq!(products[1].title, "€40.00");
    assert_eq!(products[1].annual_price, 40.0);
    assert_eq!(products[1].frequency, Frequency::Yearly);
    assert_eq!(products[1].description, "");
    Ok(())
}
