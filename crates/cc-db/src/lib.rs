//! # cc-db
//!
//! Database layer implementing the cc-core repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use cc_db::{create_pool, run_migrations, PgCommunityRepository};
//!
//! let pool = create_pool(&config.database).await?;
//! run_migrations(&pool).await?;
//! let communities = PgCommunityRepository::new(pool.clone());
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgStorageHealth, PgPool};
pub use repositories::{
    PgAdminRepository, PgCommunityRepository, PgEventRepository, PgMembershipRepository,
    PgSessionRepository, PgSubmissionRepository, PgUserRepository,
};
