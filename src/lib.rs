// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用装配模块
///
/// 根模块声明与启动流程
pub mod app;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含业务服务
pub mod domain;

/// 基础设施模块
///
/// 数据库连接、实体注册与表结构同步
pub mod infrastructure;

/// 模块系统
///
/// 模块声明、提供者容器与依赖注入
pub mod module;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由与控制器
pub mod presentation;

/// 工具模块
///
/// 错误类型与日志初始化
pub mod utils;
