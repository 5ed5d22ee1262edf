#[tokio::main]
async fn main() {
    if let Err(e) = plex_tools::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
