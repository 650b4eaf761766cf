// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 模块系统
//!
//! 模块声明由导入的子模块、控制器与提供者组成。启动时先初始化子模块，
//! 再按声明顺序构造提供者，最后构造控制器并收集其路由。

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use crate::utils::errors::{BootstrapError, ModuleError};

pub mod container;
pub mod declaration;

pub use container::Container;
pub use declaration::{Component, ControllerDef, ModuleDeclaration, ProviderDef};

/// 可注入的提供者
pub trait Provider: Send + Sync + Sized + 'static {
    /// 从容器解析依赖并构造实例
    fn provide(container: &Container) -> Result<Self, ModuleError>;
}

/// 对外暴露 HTTP 端点的控制器
pub trait Controller: Send + Sync + Sized + 'static {
    /// 从容器解析依赖并构造实例
    fn construct(container: &Container) -> Result<Self, ModuleError>;

    /// 控制器的路由
    fn routes(self: Arc<Self>) -> Router;
}

/// 带运行时配置的子模块
///
/// 在提供者构造之前初始化，可向容器注册共享资源（如数据库连接）
#[async_trait]
pub trait DynamicModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// 供检查声明内容时向下转型
    fn as_any(&self) -> &dyn Any;

    async fn init(&self, container: &mut Container) -> Result<(), BootstrapError>;
}
