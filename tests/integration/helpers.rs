// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use app_root::config::settings::{DatabaseDriver, DatabaseSettings};
use app_root::module::{Container, DynamicModule};
use app_root::utils::errors::BootstrapError;
use async_trait::async_trait;
use sea_orm::{Database, DbBackend, MockDatabase};
use std::any::Any;
use std::sync::Arc;

/// 向容器注册 MockDatabase 连接的测试模块
pub struct MockDatabaseModule;

#[async_trait]
impl DynamicModule for MockDatabaseModule {
    fn name(&self) -> &'static str {
        "MockDatabaseModule"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn init(&self, container: &mut Container) -> Result<(), BootstrapError> {
        let db = MockDatabase::new(DbBackend::MySql).into_connection();
        container.insert(Arc::new(db));
        Ok(())
    }
}

/// 注册一个连接池已关闭的数据库连接，用于模拟数据库失联
pub struct ClosedDatabaseModule;

#[async_trait]
impl DynamicModule for ClosedDatabaseModule {
    fn name(&self) -> &'static str {
        "ClosedDatabaseModule"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn init(&self, container: &mut Container) -> Result<(), BootstrapError> {
        let db = Database::connect("sqlite::memory:").await?;
        db.close_by_ref().await?;
        container.insert(Arc::new(db));
        Ok(())
    }
}

/// 单连接的 SQLite 内存库配置
pub fn sqlite_memory_settings() -> DatabaseSettings {
    DatabaseSettings {
        driver: DatabaseDriver::Sqlite,
        database: ":memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        ..DatabaseSettings::default()
    }
}

pub mod widget {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "widgets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
