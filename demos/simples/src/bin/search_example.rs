use yelp_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Credentials come from YELP_CLIENT_ID / YELP_CLIENT_SECRET or a .env file
    let config = Config::new();
    info!("Starting search example against {}", config.rest_api.base_url);

    let client = Client::from_config(config)?;

    let options = SearchOptions::with_location("San Francisco, CA")
        .term("coffee")
        .sort_by(SortBy::Rating)
        .price(PriceTier::Inexpensive)
        .price(PriceTier::Moderate)
        .limit(5);
    let results = client.search(&options).await?;
    info!(
        "Found {} businesses, showing {}",
        results.total,
        results.businesses.len()
    );

    for business in &results.businesses {
        info!(
            "{} | rating {} | {} reviews | {}",
            business.name,
            business.rating,
            business.review_count,
            business.location.display_address.join(", ")
        );
    }

    if let Some(first) = results.businesses.first() {
        let details = client.business_by_id(&first.id).await?;
        info!("Details: {}", details);
    }

    Ok(())
}
