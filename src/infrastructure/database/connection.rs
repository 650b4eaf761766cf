// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::{DatabaseDriver, DatabaseSettings};
use crate::infrastructure::database::entity_registry::EntityRegistry;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::fmt;
use std::time::Duration;

/// 连接池参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout: Option<u64>,
    pub idle_timeout: Option<u64>,
}

/// 数据库连接配置
///
/// 声明后不可修改，由数据库模块在启动时读取一次
#[derive(Clone)]
pub struct ConnectionConfig {
    driver: DatabaseDriver,
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
    entities: EntityRegistry,
    synchronize: bool,
    logging: bool,
    pool: PoolOptions,
}

impl ConnectionConfig {
    /// 由配置项与实体注册表构造连接配置
    pub fn from_settings(settings: &DatabaseSettings, entities: EntityRegistry) -> Self {
        Self {
            driver: settings.driver,
            host: settings.host.clone(),
            port: settings.port,
            username: settings.username.clone(),
            password: settings.password.clone(),
            database: settings.database.clone(),
            entities,
            synchronize: settings.synchronize,
            logging: settings.logging,
            pool: PoolOptions {
                max_connections: settings.max_connections,
                min_connections: settings.min_connections,
                connect_timeout: settings.connect_timeout,
                idle_timeout: settings.idle_timeout,
            },
        }
    }

    pub fn driver(&self) -> DatabaseDriver {
        self.driver
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    pub fn synchronize(&self) -> bool {
        self.synchronize
    }

    pub fn logging(&self) -> bool {
        self.logging
    }

    pub fn pool(&self) -> PoolOptions {
        self.pool
    }

    /// 连接 URL
    ///
    /// 用户名与密码按百分号编码写入；SQLite 只使用数据库名，`:memory:` 表示内存库
    pub fn url(&self) -> String {
        match self.driver {
            DatabaseDriver::Sqlite if self.database == ":memory:" => "sqlite::memory:".to_string(),
            DatabaseDriver::Sqlite => format!("sqlite://{}?mode=rwc", self.database),
            DatabaseDriver::Mysql | DatabaseDriver::Postgres => format!(
                "{}://{}:{}@{}:{}/{}",
                self.driver.scheme(),
                urlencoding::encode(&self.username),
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                self.database
            ),
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("entities", &self.entities)
            .field("synchronize", &self.synchronize)
            .field("logging", &self.logging)
            .field("pool", &self.pool)
            .finish()
    }
}

/// 创建数据库连接池
///
/// # 参数
///
/// * `config` - 连接配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误（主机不可达、认证失败、库不存在等）
pub async fn create_pool(config: &ConnectionConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url());
    let pool = config.pool();

    if let Some(max) = pool.max_connections {
        opt.max_connections(max);
    }

    if let Some(min) = pool.min_connections {
        opt.min_connections(min);
    }

    if let Some(timeout) = pool.connect_timeout {
        opt.connect_timeout(Duration::from_secs(timeout));
        opt.acquire_timeout(Duration::from_secs(timeout));
    }

    if let Some(idle) = pool.idle_timeout {
        opt.idle_timeout(Duration::from_secs(idle));
    }

    opt.max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(config.logging());

    Database::connect(opt).await
}
