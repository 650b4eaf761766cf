// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::errors::AppError;
use axum::{extract::State, routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 数据库连接（未导入数据库模块时为空）
pub type HealthState = Option<Arc<DatabaseConnection>>;

/// 创建公共路由
///
/// # 返回值
///
/// 返回包含健康检查与版本端点的路由
pub fn routes(db: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .with_state(db)
}

/// 健康检查端点
///
/// 已注册数据库连接时会先执行一次 ping
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check(State(db): State<HealthState>) -> Result<&'static str, AppError> {
    if let Some(db) = db {
        db.ping().await?;
    }
    Ok("OK")
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
