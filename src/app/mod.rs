// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用装配
///
/// 根模块声明与启动流程
pub mod app_module;
pub mod bootstrap;

pub use app_module::AppModule;
pub use bootstrap::{bootstrap, Application};
