#[tokio::main]
async fn main() {
    if let Err(e) = ratings_api::start_server().await {
        tracing::error!("Failed to run ratings api: {}", e);
        std::process::exit(1);
    }
}
