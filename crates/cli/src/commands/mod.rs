//! CLI subcommands.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Load the database URL from the environment.
///
/// Tries `VOLTHAUS_DATABASE_URL` first, then the generic `DATABASE_URL`.
pub fn database_url() -> Option<SecretString> {
    std::env::var("VOLTHAUS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
