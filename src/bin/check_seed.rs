use dotenvy::dotenv;

use mergington::{logger, ServerConfig};

fn main() {
    dotenv().ok();
    logger::init_logger();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            std::process::exit(1);
        }
    };

    let seed = match config.load_seed() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("seed check failed: {}", e);
            std::process::exit(1);
        }
    };

    let source = config
        .seed_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    println!("seed: {} ({} activities)", source, seed.len());
    for (name, record) in &seed {
        println!(
            "  {:<20} participants={:<3} max={:<3} spots_left={}",
            name,
            record.participants.len(),
            record.max_participants,
            record.spots_left()
        );
    }
}
