//! Module construction and lifecycle

use crate::api::native::NativeClient;
use crate::config::{Config, StorageKind};
use crate::contract::CouponsApi;
use crate::domain::{CouponStore, Service};
use crate::infra::{InMemoryCouponStore, SeaOrmCouponStore};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Coupons module: owns the domain service and exposes its entry points
pub struct CouponsModule {
    service: Arc<Service>,
}

impl CouponsModule {
    /// Build the module from configuration, connecting and migrating storage
    pub async fn init(cfg: &Config) -> Result<Self> {
        let store: Arc<dyn CouponStore> = match cfg.storage {
            StorageKind::Memory => {
                tracing::warn!("Coupons use in-memory storage; data is lost on restart");
                Arc::new(InMemoryCouponStore::new())
            }
            StorageKind::Database => {
                let db = connect(cfg).await?;
                if cfg.run_migrations {
                    migrate(&db).await?;
                }
                Arc::new(SeaOrmCouponStore::new(Arc::new(db)))
            }
        };

        tracing::info!(storage = ?cfg.storage, "Coupons module initialized");
        Ok(Self::with_store(store))
    }

    /// Build the module on top of an existing store
    pub fn with_store(store: Arc<dyn CouponStore>) -> Self {
        Self {
            service: Arc::new(Service::new(store)),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other components
    pub fn client(&self) -> Arc<dyn CouponsApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering coupons REST routes");
        crate::api::rest::register_routes(router, self.service.clone())
    }
}

/// Open the SeaORM connection pool described by `cfg`
pub async fn connect(cfg: &Config) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.dsn.clone());
    options.max_connections(cfg.max_connections).sqlx_logging(false);

    // Every pooled connection to `:memory:` would see its own empty database.
    if cfg.dsn.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options)
        .await
        .context("failed to connect to the coupons database")
}

/// Apply pending coupons migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    use crate::infra::storage::migrations::Migrator;

    Migrator::up(db, None)
        .await
        .context("failed to run coupons migrations")?;
    tracing::info!("Coupons migrations completed");
    Ok(())
}
