use std::fmt;
use tracing::{info, warn};

use crate::auth::password::hash_password;
use crate::config::Config;
use crate::error::AppError;
use crate::models::user::{NewUser, Role};
use crate::store::UserStore;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "adminpass";
pub const ADMIN_FULL_NAME: &str = "Administrator";

pub const WORKER_USERNAME: &str = "worker";
pub const WORKER_PASSWORD: &str = "worker123";
pub const WORKER_FULL_NAME: &str = "Railway Worker";

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub bcrypt_cost: u32,
    pub seed_worker: bool,
}

impl From<&Config> for SeedOptions {
    fn from(config: &Config) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            seed_worker: config.seed_worker,
        }
    }
}

/// What a bootstrap run did. `Display` renders the status line for stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created { worker: bool },
    AlreadyExists,
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Created { worker } => {
                write!(f, "Created admin user: {ADMIN_USERNAME} / {ADMIN_PASSWORD}")?;
                if *worker {
                    write!(
                        f,
                        "\nCreated worker user: {WORKER_USERNAME} / {WORKER_PASSWORD}"
                    )?;
                }
                Ok(())
            }
            SeedOutcome::AlreadyExists => f.write_str("Admin exists"),
        }
    }
}

/// Ensures the schema exists and the default admin account is present.
///
/// Safe to run repeatedly: an existing admin is left untouched. Two runs racing
/// each other can both miss the admin; the loser fails with `AppError::Conflict`.
pub async fn ensure_admin_seeded<S>(
    store: &S,
    options: &SeedOptions,
) -> Result<SeedOutcome, AppError>
where
    S: UserStore + ?Sized,
{
    store.ensure_schema().await?;

    if let Some(existing) = store.find_by_username(ADMIN_USERNAME).await? {
        if !existing.is_admin() {
            warn!(
                user_id = existing.id,
                role = %existing.role,
                "user 'admin' exists without the admin role"
            );
        }
        info!(user_id = existing.id, "admin user already exists");
        return Ok(SeedOutcome::AlreadyExists);
    }

    let mut accounts = vec![NewUser {
        username: ADMIN_USERNAME.to_string(),
        full_name: Some(ADMIN_FULL_NAME.to_string()),
        password_hash: hash_password(ADMIN_PASSWORD, options.bcrypt_cost)?,
        role: Role::Admin,
    }];

    let mut worker = false;
    if options.seed_worker {
        if let Some(existing) = store.find_by_username(WORKER_USERNAME).await? {
            info!(user_id = existing.id, "worker user already exists");
        } else {
            accounts.push(NewUser {
                username: WORKER_USERNAME.to_string(),
                full_name: Some(WORKER_FULL_NAME.to_string()),
                password_hash: hash_password(WORKER_PASSWORD, options.bcrypt_cost)?,
                role: Role::Worker,
            });
            worker = true;
        }
    }

    store.insert_users(&accounts).await?;

    for account in &accounts {
        info!(username = %account.username, role = %account.role, "created default user");
    }
    warn!("default credentials were written; change these passwords before exposing the service");

    Ok(SeedOutcome::Created { worker })
}
