// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use app_root::app::{bootstrap, AppModule};
use app_root::config::settings::Settings;
use app_root::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，加载配置、装配根模块并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting app-root...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(database = ?settings.database, "Configuration loaded");

    // 3. Declare and bootstrap the root module
    let app = bootstrap(AppModule::declare(&settings.database)).await?;
    info!(module = app.name(), "Root module bootstrapped");

    // 4. Start HTTP server
    let listener = TcpListener::bind(settings.listen_addr()).await?;
    app.serve(listener).await?;

    Ok(())
}
