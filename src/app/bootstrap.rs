// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::module::{Container, ModuleDeclaration};
use crate::presentation::routes;
use crate::utils::errors::BootstrapError;

/// 已完成装配的应用
pub struct Application {
    name: &'static str,
    router: Router,
    container: Container,
}

impl Application {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// 在给定监听器上提供 HTTP 服务，直到服务结束
    pub async fn serve(self, listener: TcpListener) -> Result<(), BootstrapError> {
        if let Ok(addr) = listener.local_addr() {
            info!(module = self.name, %addr, "Server listening");
        }
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// 读取模块声明并完成装配
///
/// 顺序：校验声明 → 初始化导入的子模块 → 构造提供者 → 构造控制器并合并路由。
/// 任一步骤失败立即返回，不做重试。
pub async fn bootstrap(declaration: ModuleDeclaration) -> Result<Application, BootstrapError> {
    declaration.validate()?;

    let name = declaration.name();
    let (imports, controllers, providers) = declaration.into_parts();
    let mut container = Container::new();

    for module in &imports {
        info!(module = module.name(), "Initializing module");
        module.init(&mut container).await?;
    }

    for provider in &providers {
        let instance = provider.build(&container)?;
        container.insert_erased(provider.component.type_id, instance);
        debug!(provider = provider.component.short_name(), "Provider registered");
    }

    let mut router = Router::new();
    for controller in &controllers {
        router = router.merge(controller.build(&container)?);
        debug!(
            controller = controller.component.short_name(),
            "Controller mapped"
        );
    }

    let router = router
        .merge(routes::routes(container.get::<DatabaseConnection>()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!(
                    "http",
                    method = %req.method(),
                    uri = %req.uri(),
                    matched_path = %matched
                )
            }),
        );

    info!(
        module = name,
        imports = imports.len(),
        providers = providers.len(),
        controllers = controllers.len(),
        "Application bootstrapped"
    );

    Ok(Application {
        name,
        router,
        container,
    })
}
