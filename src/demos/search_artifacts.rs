//! Artifact Search Example
//!
//! Searches the artifact core with faceting and highlighting enabled and
//! prints hits, facet counts and highlighted fragments.
//!
//! Run with: cargo run -p mvnsearch-rs --example search_artifacts -- guice

use mvnsearch_rs::highlight::strip_emphasis;
use mvnsearch_rs::{Client, ClientConfig, Query};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mvnsearch_core=info,mvnsearch_rs=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    let config = ClientConfig::load("mvnsearch.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load mvnsearch.json, using defaults");
        ClientConfig::default()
    });
    let client = Client::from_config(&config)?;

    let term = std::env::args().nth(1).unwrap_or_else(|| "guice".to_string());

    let request = config
        .new_request()
        .limit(10)
        .query(Query::new().with_artifact_id(term.clone()))
        .facet(true)
        .facet_fields(["p", "g"])
        .highlight(["a", "g"]);

    println!("🔍 Searching artifacts for '{}'\n", term);
    let response = client.search_artifacts(&request).await?;
    println!(
        "Found {} artifacts (showing {}, {} ms)\n",
        response.num_found(),
        response.docs().len(),
        response.header.query_time
    );

    for (i, artifact) in response.docs().iter().enumerate() {
        println!(
            "   {}. {} ({} versions)",
            i + 1,
            artifact.coordinate(),
            artifact.version_count
        );
        if let Some(updated) = artifact.updated_at() {
            println!("      Updated: {}", updated.format("%Y-%m-%d"));
        }
        if let Some(fragments) = response.fragments(artifact, "a") {
            let plain: Vec<String> = fragments.iter().map(|f| strip_emphasis(f)).collect();
            println!("      Matched: {}", plain.join(", "));
        }
    }

    if let Some(facets) = &response.facet_counts {
        println!("\n📊 Packaging:");
        for (packaging, count) in facets.field_counts("p").unwrap_or_default() {
            println!("   {:<12} {}", packaging, count);
        }
    }

    Ok(())
}
