//! Batched Version Search Example
//!
//! Looks up the newest versions of several artifacts at once and matches
//! each result back to its request through the query key.
//!
//! Run with: cargo run -p mvnsearch-rs --example batch_versions

use mvnsearch_rs::{dependency_query, Client, ClientConfig, Query, SearchRequest, Version};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("mvnsearch_rs=info")
        .init();

    let client = Client::from_config(&ClientConfig::default())?;

    let coordinates = [
        ("junit", "junit"),
        ("com.google.guava", "guava"),
        ("org.slf4j", "slf4j-api"),
    ];

    let mut requests: Vec<SearchRequest> = coordinates
        .iter()
        .map(|(group, artifact)| {
            SearchRequest::new()
                .core("gav")
                .query(Query::coordinate(*group, *artifact))
                .sort_by("timestamp", false)
                .limit(3)
                .query_key(format!("{}:{}", group, artifact))
        })
        .collect();

    // Versions that depend on slf4j-api, regardless of group
    requests.push(
        SearchRequest::new()
            .core("gav")
            .query(Query::advanced(dependency_query("", "slf4j-api")))
            .limit(5)
            .query_key("slf4j-dependents"),
    );

    for batch in client.search_batch::<Version>(&requests).await {
        let key = batch.query_key.unwrap_or_default();
        match batch.result {
            Ok(response) => {
                println!("📦 {} ({} total)", key, response.num_found());
                for version in response.docs() {
                    println!("   {}", version.coordinate());
                }
            }
            Err(e) => println!("❌ {}: {}", key, e),
        }
    }

    Ok(())
}
