use crate::error::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Runtime settings for the seed binary, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
    pub seed_worker: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::config("DATABASE_URL must be set"))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if (4..=31).contains(&n) => n,
                _ => {
                    return Err(AppError::config(format!(
                        "BCRYPT_COST must be between 4 and 31, got {raw:?}"
                    )));
                }
            },
            None => bcrypt::DEFAULT_COST,
        };

        let seed_worker = match lookup("SEED_WORKER") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!("SEED_WORKER must be true or false, got {raw:?}"))
            })?,
            None => false,
        };

        Ok(Config {
            database_url,
            max_connections,
            bcrypt_cost,
            seed_worker,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
