use anyhow::Result;
use env_logger::Builder;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};

/// Caption languages tried in order when a request names none.
pub const DEFAULT_LANGUAGES: &str = "zh-Hans,zh-Hant,zh,en";

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting transcript backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn default_languages() -> Vec<String> {
    parse_languages(DEFAULT_LANGUAGES)
}

/// Split a comma-delimited language string into an ordered preference list.
pub fn parse_languages(csv: &str) -> Vec<String> {
    csv.split(',').map(|tag| tag.trim().to_string()).collect()
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_languages_splits_and_trims() {
        assert_eq!(
            parse_languages("zh-Hans, zh-Hant ,en"),
            vec!["zh-Hans", "zh-Hant", "en"]
        );
    }

    #[test]
    fn default_languages_follow_preference_order() {
        assert_eq!(
            default_languages(),
            vec!["zh-Hans", "zh-Hant", "zh", "en"]
        );
    }
}
