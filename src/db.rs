use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

/// Logical database holding the `markets` and `orders` collections.
pub const DB_NAME: &str = "trade";

const SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Establishes a connection to MongoDB and verifies it with a ping.
///
/// The returned client is internally pooled and safe to share across all
/// in-flight requests. A store that is unreachable within the selection
/// timeout surfaces as an error here, which the caller treats as fatal.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("trade-service".to_string());
    options.server_selection_timeout = Some(SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;

    tracing::info!("Connected to MongoDB");
    Ok(client)
}
