use route_finder::config::ServerConfig;
use route_finder::web::start_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Environment first, then an optional port argument
    let config = ServerConfig::from_env()?;

    println!("🔧 Starting Route Finder...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}", config.socket_addr());
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    match &config.graph_path {
        Some(path) => println!("   🗺️  Graph file: {}", path.display()),
        None => println!("   🗺️  Graph: built-in delivery map"),
    }
    println!();

    start_server(config).await?;

    Ok(())
}
