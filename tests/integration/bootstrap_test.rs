// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use app_root::app::{bootstrap, AppModule};
use app_root::config::settings::{DatabaseDriver, DatabaseSettings};
use app_root::domain::services::app_service::AppService;
use app_root::infrastructure::database::{connection, schema_sync};
use app_root::infrastructure::database::{ConnectionConfig, DatabaseModule, EntityRegistry};
use app_root::module::ModuleDeclaration;
use app_root::presentation::handlers::app_controller::AppController;
use app_root::utils::errors::{BootstrapError, ModuleError};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, MockDatabase,
    Set,
};

use super::helpers::{sqlite_memory_settings, widget};

/// 数据库不可达时启动失败，不做重试
#[tokio::test]
async fn bootstrap_fails_when_database_is_unreachable() {
    let settings = DatabaseSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        connect_timeout: Some(2),
        ..DatabaseSettings::default()
    };

    let result = bootstrap(AppModule::declare(&settings)).await;

    assert!(matches!(result, Err(BootstrapError::Database(_))));
}

/// 重复注册的提供者在连接数据库之前就被拒绝
#[tokio::test]
async fn bootstrap_rejects_duplicate_provider() {
    let declaration = ModuleDeclaration::new("AppModule")
        .controller::<AppController>()
        .provider::<AppService>()
        .provider::<AppService>();

    let result = bootstrap(declaration).await;

    match result {
        Err(BootstrapError::Module(ModuleError::DuplicateProvider(name))) => {
            assert!(name.ends_with("AppService"))
        }
        _ => panic!("expected duplicate provider error"),
    }
}

/// 控制器依赖的提供者缺失时启动失败
#[tokio::test]
async fn bootstrap_fails_when_controller_dependency_is_missing() {
    let declaration = ModuleDeclaration::new("AppModule").controller::<AppController>();

    let result = bootstrap(declaration).await;

    assert!(matches!(
        result,
        Err(BootstrapError::Module(ModuleError::MissingProvider(_)))
    ));
}

/// 自动同步会为已注册实体建表，且可重复执行
#[tokio::test]
async fn auto_sync_creates_registered_tables() {
    let config = ConnectionConfig::from_settings(
        &sqlite_memory_settings(),
        EntityRegistry::new().register::<widget::Entity>(),
    );
    let declaration = ModuleDeclaration::new("AppModule").import(DatabaseModule::for_root(config.clone()));

    let app = bootstrap(declaration).await.unwrap();
    let db = app.container().resolve::<DatabaseConnection>().unwrap();

    let rows = widget::Entity::find().all(db.as_ref()).await.unwrap();
    assert!(rows.is_empty());

    let executed = schema_sync::synchronize(db.as_ref(), config.entities())
        .await
        .unwrap();
    assert_eq!(executed, 0);
}

/// 表已存在但缺列时，自动同步会补齐实体声明的列
#[tokio::test]
async fn auto_sync_adds_missing_columns_to_existing_table() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DatabaseSettings {
        driver: DatabaseDriver::Sqlite,
        database: dir.path().join("widgets.db").to_string_lossy().into_owned(),
        max_connections: Some(1),
        ..DatabaseSettings::default()
    };

    let legacy = ConnectionConfig::from_settings(&settings, EntityRegistry::new());
    let db = connection::create_pool(&legacy).await.unwrap();
    db.execute_unprepared("CREATE TABLE widgets (id INTEGER PRIMARY KEY)")
        .await
        .unwrap();
    db.close().await.unwrap();

    let config = ConnectionConfig::from_settings(
        &settings,
        EntityRegistry::new().register::<widget::Entity>(),
    );
    let declaration =
        ModuleDeclaration::new("AppModule").import(DatabaseModule::for_root(config.clone()));
    let app = bootstrap(declaration).await.unwrap();
    let db = app.container().resolve::<DatabaseConnection>().unwrap();

    widget::ActiveModel {
        name: Set("gear".to_string()),
        ..Default::default()
    }
    .insert(db.as_ref())
    .await
    .unwrap();

    let rows = widget::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "gear");

    let executed = schema_sync::synchronize(db.as_ref(), config.entities())
        .await
        .unwrap();
    assert_eq!(executed, 0);
}

/// 关闭自动同步时不会建表
#[tokio::test]
async fn disabled_auto_sync_leaves_schema_untouched() {
    let settings = DatabaseSettings {
        synchronize: false,
        ..sqlite_memory_settings()
    };
    let config = ConnectionConfig::from_settings(
        &settings,
        EntityRegistry::new().register::<widget::Entity>(),
    );
    let declaration = ModuleDeclaration::new("AppModule").import(DatabaseModule::for_root(config));

    let app = bootstrap(declaration).await.unwrap();
    let db = app.container().resolve::<DatabaseConnection>().unwrap();

    assert!(widget::Entity::find().all(db.as_ref()).await.is_err());
}

/// 空实体注册表不会发出任何语句
#[tokio::test]
async fn auto_sync_with_empty_registry_issues_no_statements() {
    let db = MockDatabase::new(DbBackend::MySql).into_connection();

    let executed = schema_sync::synchronize(&db, &EntityRegistry::new())
        .await
        .unwrap();

    assert_eq!(executed, 0);
    assert!(db.into_transaction_log().is_empty());
}
