//! Posts list demo
//!
//! This demo is the display collaborator for the fetch-state utility:
//! - renders a loading indicator while a request is in flight
//! - renders the failure message if the request failed
//! - otherwise renders the fetched posts as a list
//! - re-fetches on demand, the way a reload button would

use refetch::{Fetcher, RequestConfig, RequestState};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
struct Post {
    id: u64,
    title: String,
}

/// Conditional rendering of the three states. The display trusts the
/// utility's invariants and performs no validation of its own.
fn render(state: &RequestState<Vec<Post>>) {
    if state.is_loading() {
        println!("Loading posts...");
        return;
    }
    if let Some(error) = state.error() {
        println!("Error: {}", error);
        return;
    }
    match state.data() {
        Some(posts) => {
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  #{:<3} {}", post.id, post.title);
            }
        }
        None => println!("No data yet."),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    // Construction kicks off the first request in the background.
    let fetcher: Fetcher<Vec<Post>> = Fetcher::new(
        "https://jsonplaceholder.typicode.com/posts",
        RequestConfig::default(),
    );
    render(&fetcher.state());

    // Wait for a full attempt, then render the outcome.
    fetcher.run().await.ok();
    render(&fetcher.state());

    // User-initiated re-fetch, as a reload button would trigger it.
    println!();
    println!("Reloading...");
    fetcher.run().await.ok();
    render(&fetcher.state());
}
