// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 根模块声明测试
///
/// 校验声明中的连接参数、实体注册表与组件列表

#[cfg(test)]
mod tests {
    use app_root::app::AppModule;
    use app_root::config::settings::{DatabaseDriver, DatabaseSettings};
    use app_root::domain::services::app_service::AppService;
    use app_root::infrastructure::database::DatabaseModule;
    use app_root::module::{Component, ModuleDeclaration};
    use app_root::presentation::handlers::app_controller::AppController;
    use std::any::Any;

    fn root_declaration() -> ModuleDeclaration {
        AppModule::declare(&DatabaseSettings::default())
    }

    fn database_module(declaration: &ModuleDeclaration) -> &DatabaseModule {
        assert_eq!(declaration.imports().len(), 1);
        let import: &dyn Any = declaration.imports()[0].as_any();
        import
            .downcast_ref::<DatabaseModule>()
            .expect("root module must import the database module")
    }

    #[test]
    fn connection_config_matches_literal() {
        let declaration = root_declaration();
        let config = database_module(&declaration).config();

        assert_eq!(config.driver(), DatabaseDriver::Mysql);
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 3306);
        assert_eq!(config.username(), "admin");
        assert_eq!(config.password(), "root");
        assert_eq!(config.database(), "test");
    }

    #[test]
    fn entity_registry_is_empty() {
        let declaration = root_declaration();
        assert!(database_module(&declaration).config().entities().is_empty());
    }

    #[test]
    fn auto_sync_and_logging_are_enabled() {
        let declaration = root_declaration();
        let config = database_module(&declaration).config();

        assert!(config.synchronize());
        assert!(config.logging());
    }

    #[test]
    fn declares_one_controller_and_one_provider() {
        let declaration = root_declaration();

        assert_eq!(declaration.name(), "AppModule");
        assert_eq!(declaration.controllers().len(), 1);
        assert_eq!(declaration.providers().len(), 1);
        assert_eq!(
            declaration.controllers()[0].component,
            Component::of::<AppController>()
        );
        assert_eq!(
            declaration.providers()[0].component,
            Component::of::<AppService>()
        );
        assert!(declaration.validate().is_ok());
    }
}
