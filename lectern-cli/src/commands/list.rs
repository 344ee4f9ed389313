//! List command implementation

use anyhow::{Context, Result};
use lectern_client::ContentClient;

/// List the identifiers of every book on the service
pub async fn list(client: &ContentClient, json: bool) -> Result<()> {
    let books = client
        .list_books()
        .await
        .context("Failed to fetch the book catalogue")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else if books.is_empty() {
        println!("No books on the service.");
    } else {
        for id in &books {
            println!("{}", id);
        }
    }

    Ok(())
}
