// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::any::{type_name, Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use axum::Router;

use super::container::Container;
use super::{Controller, DynamicModule, Provider};
use crate::utils::errors::ModuleError;

/// 组件标识
///
/// 由类型名与 `TypeId` 组成，用于去重与日志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub name: &'static str,
    pub type_id: TypeId,
}

impl Component {
    pub fn of<T: 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// 去掉模块路径后的类型名
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

type ProviderFactory = fn(&Container) -> Result<Arc<dyn Any + Send + Sync>, ModuleError>;
type ControllerFactory = fn(&Container) -> Result<Router, ModuleError>;

fn build_provider<P: Provider>(
    container: &Container,
) -> Result<Arc<dyn Any + Send + Sync>, ModuleError> {
    Ok(Arc::new(P::provide(container)?))
}

fn build_controller<C: Controller>(container: &Container) -> Result<Router, ModuleError> {
    Ok(Arc::new(C::construct(container)?).routes())
}

/// 提供者注册项
#[derive(Clone, Copy)]
pub struct ProviderDef {
    pub component: Component,
    factory: ProviderFactory,
}

impl ProviderDef {
    pub fn of<P: Provider>() -> Self {
        Self {
            component: Component::of::<P>(),
            factory: build_provider::<P>,
        }
    }

    /// 从容器中构造提供者实例
    pub fn build(&self, container: &Container) -> Result<Arc<dyn Any + Send + Sync>, ModuleError> {
        (self.factory)(container)
    }
}

impl fmt::Debug for ProviderDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderDef").field(&self.component.name).finish()
    }
}

/// 控制器注册项
#[derive(Clone, Copy)]
pub struct ControllerDef {
    pub component: Component,
    factory: ControllerFactory,
}

impl ControllerDef {
    pub fn of<C: Controller>() -> Self {
        Self {
            component: Component::of::<C>(),
            factory: build_controller::<C>,
        }
    }

    /// 构造控制器并返回其路由
    pub fn build(&self, container: &Container) -> Result<Router, ModuleError> {
        (self.factory)(container)
    }
}

impl fmt::Debug for ControllerDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ControllerDef").field(&self.component.name).finish()
    }
}

/// 模块声明
///
/// 列出导入的子模块、控制器与提供者。声明本身不做任何 I/O，
/// 由 [`crate::app::bootstrap`] 在启动时读取一次。
pub struct ModuleDeclaration {
    name: &'static str,
    imports: Vec<Box<dyn DynamicModule>>,
    controllers: Vec<ControllerDef>,
    providers: Vec<ProviderDef>,
}

impl ModuleDeclaration {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            imports: Vec::new(),
            controllers: Vec::new(),
            providers: Vec::new(),
        }
    }

    pub fn import<M: DynamicModule + 'static>(mut self, module: M) -> Self {
        self.imports.push(Box::new(module));
        self
    }

    pub fn controller<C: Controller>(mut self) -> Self {
        self.controllers.push(ControllerDef::of::<C>());
        self
    }

    pub fn provider<P: Provider>(mut self) -> Self {
        self.providers.push(ProviderDef::of::<P>());
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn imports(&self) -> &[Box<dyn DynamicModule>] {
        &self.imports
    }

    pub fn controllers(&self) -> &[ControllerDef] {
        &self.controllers
    }

    pub fn providers(&self) -> &[ProviderDef] {
        &self.providers
    }

    /// 校验声明：同一提供者或控制器不得重复注册
    pub fn validate(&self) -> Result<(), ModuleError> {
        let mut seen = HashSet::new();
        for provider in &self.providers {
            if !seen.insert(provider.component.type_id) {
                return Err(ModuleError::DuplicateProvider(provider.component.name));
            }
        }

        let mut seen = HashSet::new();
        for controller in &self.controllers {
            if !seen.insert(controller.component.type_id) {
                return Err(ModuleError::DuplicateController(controller.component.name));
            }
        }

        Ok(())
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<Box<dyn DynamicModule>>,
        Vec<ControllerDef>,
        Vec<ProviderDef>,
    ) {
        (self.imports, self.controllers, self.providers)
    }
}

impl fmt::Debug for ModuleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDeclaration")
            .field("name", &self.name)
            .field(
                "imports",
                &self.imports.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field("controllers", &self.controllers)
            .field("providers", &self.providers)
            .finish()
    }
}
