// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供连接配置、连接池、实体注册与表结构同步
pub mod connection;
pub mod database_module;
pub mod entity_registry;
pub mod schema_sync;

pub use connection::ConnectionConfig;
pub use database_module::DatabaseModule;
pub use entity_registry::EntityRegistry;
