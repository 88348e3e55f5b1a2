use mtgox_client::{client::MtGoxClient, config::CommissionRate};

/*----- */
// Main
/*----- */
#[tokio::main]
async fn main() {
    init_logging();

    let client = MtGoxClient::public().with_commission(CommissionRate(0.006));

    match client.ticker("USD").await {
        Ok(ticker) => println!("last: {} {}", ticker.price, ticker.currency),
        Err(error) => eprintln!("ticker request failed: {error}"),
    }

    match client.min_ask("USD").await {
        Ok(min_ask) => println!(
            "best ask: {} ({} available)",
            min_ask.price, min_ask.amount
        ),
        Err(error) => eprintln!("depth request failed: {error}"),
    }
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
