// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;

use crate::domain::services::app_service::AppService;
use crate::module::{Container, Controller};
use crate::utils::errors::ModuleError;

/// 应用控制器
///
/// 依赖注入的 [`AppService`]，暴露根路径端点
pub struct AppController {
    app_service: Arc<AppService>,
}

impl AppController {
    pub fn new(app_service: Arc<AppService>) -> Self {
        Self { app_service }
    }
}

impl Controller for AppController {
    fn construct(container: &Container) -> Result<Self, ModuleError> {
        Ok(Self::new(container.resolve::<AppService>()?))
    }

    fn routes(self: Arc<Self>) -> Router {
        Router::new().route("/", get(get_hello)).with_state(self)
    }
}

/// 根路径端点
///
/// # 返回值
///
/// 返回应用服务的问候语
pub async fn get_hello(State(controller): State<Arc<AppController>>) -> &'static str {
    controller.app_service.get_hello()
}
