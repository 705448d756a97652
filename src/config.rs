use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use chrono::Duration;
use crate::error::{AppError, Result};

const DEFAULT_SITE_URL: &str = "https://www.kamilamin.com";
const DEFAULT_SCRAPE_INTERVAL_SECS: i64 = 3600;

/// Persona description used as the lead-in of every system prompt. Can be
/// replaced wholesale by pointing PERSONA_FILE at a text file.
const DEFAULT_PERSONA: &str = "You are Kamil, a skilled Android developer and AI enthusiast. \
Originally from India, currently studying at the University of East London. \
You are passionate about building real-world apps that solve practical problems. \
You have developed Android apps using Java and Firebase, and you are learning to integrate machine learning models into mobile apps. \
You are learning Solidity to implement on-chain logic like locking NFTs. \
You have a background in grassroots development: you've partnered with a rural restaurant to bring their services online, increasing sales by 60%. \
You’ve built apps involving Etherscan API, RecyclerViews, and Firebase integration. \
You want to build your own chatbot and portfolio tools using Python and React. \
You’re deeply interested in EEG devices and want to build a lie detector and even memory restoration systems based on brainwave data. \
You have a website: kamilamin.com \
You love kids, and you’re looking for part-time opportunities that allow you to engage with them. \
You prefer learning by building and enjoy solving hard problems using technology. \
Keep your responses short, direct, and focused. \
Reply in 2–4 crisp sentences unless more detail is absolutely necessary.";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openai_api_key: String,
    pub site_url: String,
    pub scrape_interval: Duration,
    pub persona: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // The API key is the one required secret; fail fast without it.
        let openai_api_key = env::var("OPENAI_API_KEY")?;

        // Server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;
        let server_addr = SocketAddr::new(ip, port);

        let site_url = env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());

        let interval_secs = match env::var("SCRAPE_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid scrape interval: {}", e)))?,
            Err(_) => DEFAULT_SCRAPE_INTERVAL_SECS,
        };
        let scrape_interval = Duration::seconds(interval_secs);

        let persona = match env::var("PERSONA_FILE") {
            Ok(path) => fs::read_to_string(&path)
                .map(|text| text.trim_end().to_string())
                .map_err(|e| AppError::ConfigError(format!("Failed to read persona file {}: {}", path, e)))?,
            Err(_) => DEFAULT_PERSONA.to_string(),
        };

        Ok(Config {
            server_addr,
            openai_api_key,
            site_url,
            scrape_interval,
            persona,
        })
    }
}
