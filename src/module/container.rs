// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::utils::errors::ModuleError;

/// 提供者容器
///
/// 按类型保存共享实例，启动阶段写入，之后只读
#[derive(Default)]
pub struct Container {
    instances: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册实例，同类型的旧实例会被替换
    pub fn insert<T: Send + Sync + 'static>(&mut self, instance: Arc<T>) {
        self.instances.insert(TypeId::of::<T>(), instance);
    }

    /// 注册已擦除类型的实例
    pub(crate) fn insert_erased(&mut self, type_id: TypeId, instance: Arc<dyn Any + Send + Sync>) {
        self.instances.insert(type_id, instance);
    }

    /// 按类型解析实例
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, ModuleError> {
        self.get::<T>()
            .ok_or(ModuleError::MissingProvider(type_name::<T>()))
    }

    /// 按类型查找实例，不存在时返回 `None`
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
