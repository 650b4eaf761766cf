// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::domain::services::app_service::AppService;
use crate::infrastructure::database::{ConnectionConfig, DatabaseModule, EntityRegistry};
use crate::module::ModuleDeclaration;
use crate::presentation::handlers::app_controller::AppController;

/// 应用根模块
///
/// 导入数据库模块，注册 [`AppController`] 与 [`AppService`]
pub struct AppModule;

impl AppModule {
    pub const NAME: &'static str = "AppModule";

    /// 根模块声明
    pub fn declare(database: &DatabaseSettings) -> ModuleDeclaration {
        ModuleDeclaration::new(Self::NAME)
            .import(DatabaseModule::for_root(ConnectionConfig::from_settings(
                database,
                EntityRegistry::new(),
            )))
            .controller::<AppController>()
            .provider::<AppService>()
    }
}
