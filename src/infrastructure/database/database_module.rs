// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;
use tracing::{info, warn};

use crate::infrastructure::database::connection::{self, ConnectionConfig};
use crate::infrastructure::database::schema_sync;
use crate::module::{Container, DynamicModule};
use crate::utils::errors::BootstrapError;

/// 数据库子模块
///
/// 初始化时建立连接池，按需同步表结构，并把 `DatabaseConnection` 注册进容器
#[derive(Debug, Clone)]
pub struct DatabaseModule {
    config: ConnectionConfig,
}

impl DatabaseModule {
    /// 以根配置创建数据库模块
    pub fn for_root(config: ConnectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

#[async_trait]
impl DynamicModule for DatabaseModule {
    fn name(&self) -> &'static str {
        "DatabaseModule"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn init(&self, container: &mut Container) -> Result<(), BootstrapError> {
        info!(
            driver = %self.config.driver(),
            host = self.config.host(),
            port = self.config.port(),
            database = self.config.database(),
            "Connecting to database"
        );
        let db = connection::create_pool(&self.config).await?;
        info!("Database connection established");

        if self.config.synchronize() {
            warn!(
                database = self.config.database(),
                "Schema auto-sync is enabled and may alter the target schema"
            );
            schema_sync::synchronize(&db, self.config.entities()).await?;
        }

        container.insert(Arc::new(db));
        Ok(())
    }
}
