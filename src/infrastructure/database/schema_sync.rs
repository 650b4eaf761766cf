// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::sea_query::{Alias, ColumnDef, Table};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, Schema, Statement};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::infrastructure::database::entity_registry::{EntityRegistry, TableDefinition};

/// 按实体定义同步表结构
///
/// 表不存在时按实体建表；表已存在时补齐实体中声明但库中缺失的列。
/// 不会删除或修改已有的列。
///
/// # 返回值
///
/// * `Ok(usize)` - 执行的 DDL 语句数量，表结构已一致时为 0
/// * `Err(DbErr)` - 查询或语句执行失败
pub async fn synchronize<C>(db: &C, entities: &EntityRegistry) -> Result<usize, DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut executed = 0;

    for definition in entities.definitions(&schema) {
        let TableDefinition {
            table,
            mut create,
            columns,
        } = definition;
        let existing = existing_columns(db, table).await?;

        if existing.is_empty() {
            create.if_not_exists();
            let statement = backend.build(&create);
            debug!(table, sql = %statement, "Creating table");
            db.execute(statement).await?;
            executed += 1;
            continue;
        }

        for (name, def) in &columns {
            if existing.contains(name) {
                continue;
            }
            let mut added = nullable_column(name, def);
            let alter = Table::alter()
                .table(Alias::new(table))
                .add_column(&mut added)
                .to_owned();
            let statement = backend.build(&alter);
            debug!(table, column = %name, sql = %statement, "Adding missing column");
            db.execute(statement).await?;
            executed += 1;
        }
    }

    info!(statements = executed, "Schema synchronization finished");
    Ok(executed)
}

/// 查询表中已有的列名，表不存在时返回空集合
async fn existing_columns<C>(db: &C, table: &str) -> Result<HashSet<String>, DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let sql = match backend {
        DbBackend::MySql => {
            "SELECT column_name AS name FROM information_schema.columns \
             WHERE table_schema = DATABASE() AND table_name = ?"
        }
        DbBackend::Postgres => {
            "SELECT column_name::text AS name FROM information_schema.columns \
             WHERE table_schema = current_schema() AND table_name = $1"
        }
        DbBackend::Sqlite => "SELECT name FROM pragma_table_info(?)",
    };

    let rows = db
        .query_all(Statement::from_sql_and_values(backend, sql, [table.into()]))
        .await?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name"))
        .collect()
}

/// 补列时使用的列定义
///
/// 已有行没有该列的值，因此补上的列一律允许为空
fn nullable_column(name: &str, def: &ColumnDef) -> ColumnDef {
    match def.get_column_type() {
        Some(column_type) => {
            let mut added = ColumnDef::new_with_type(Alias::new(name), column_type.clone());
            added.null();
            added
        }
        None => def.clone(),
    }
}
