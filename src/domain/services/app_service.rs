// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::module::{Container, Provider};
use crate::utils::errors::ModuleError;

/// 应用服务
///
/// 根模块注册的唯一提供者，被注入到 [`AppController`](crate::presentation::handlers::app_controller::AppController)
#[derive(Debug, Default, Clone)]
pub struct AppService;

impl AppService {
    pub fn new() -> Self {
        Self
    }

    /// 问候语
    pub fn get_hello(&self) -> &'static str {
        "Hello World!"
    }
}

impl Provider for AppService {
    fn provide(_container: &Container) -> Result<Self, ModuleError> {
        Ok(Self::new())
    }
}
