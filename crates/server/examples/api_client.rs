//! Examples for using the newsprep server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Registered sources
    println!("2. Registered Sources:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/sources"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Preprocess a single article
    println!("3. Preprocess Single Article:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/preprocess"))
        .json(&json!({
            "title": "Sensex closes higher",
            "content": "Mumbai (Maharashtra):\nThe Sensex closed higher on Friday.\nView Full Image\nBanks led the gains.(PTI)",
            "url": "https://www.livemint.com/market/sensex",
            "source": "mint"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Batch preprocess, including an unknown source
    println!("4. Batch Preprocess:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/preprocess/batch"))
        .json(&json!({
            "articles": [
                {
                    "title": "Monsoon arrives",
                    "content": "The monsoon reached Kerala on Thursday. Also Read: Heatwave eases",
                    "url": "https://www.hindustantimes.com/india-news/monsoon",
                    "source": "Hindustan Times"
                },
                {
                    "title": "Unknown outlet",
                    "content": "Some text.",
                    "url": "https://example.com/story",
                    "source": "Daily Planet"
                },
                {
                    "title": "Blank",
                    "content": "   ",
                    "url": "https://www.ndtv.com/story",
                    "source": "ndtv.com"
                }
            ]
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Prometheus metrics
    println!("5. Metrics:");
    let resp = client.get(format!("{SERVER_URL}/metrics")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
