// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,app_root=debug,sqlx=info,tower_http=info";

/// 初始化日志订阅器
///
/// 优先读取 `RUST_LOG`，否则使用默认过滤规则。重复调用时保持首次初始化的结果。
pub fn init_telemetry() {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }
}
