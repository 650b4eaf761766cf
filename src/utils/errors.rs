// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::ConfigError;
use sea_orm::DbErr;
use thiserror::Error;

/// 模块声明错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModuleError {
    #[error("provider registered more than once: {0}")]
    DuplicateProvider(&'static str),

    #[error("controller registered more than once: {0}")]
    DuplicateController(&'static str),

    #[error("no provider registered for {0}")]
    MissingProvider(&'static str),
}

/// 启动过程错误类型
///
/// 覆盖配置加载、模块装配、数据库连接与监听端口绑定
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("module error: {0}")]
    Module(#[from] ModuleError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
