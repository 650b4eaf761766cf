// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::sea_query::{ColumnDef, TableCreateStatement};
use sea_orm::{EntityTrait, IdenStatic, Iterable, Schema};
use std::fmt;

type TableBuilder = fn(&Schema) -> TableCreateStatement;
type ColumnsBuilder = fn(&Schema) -> Vec<(String, ColumnDef)>;

fn build_table<E: EntityTrait + Default>(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(E::default())
}

fn build_columns<E: EntityTrait + Default>(schema: &Schema) -> Vec<(String, ColumnDef)> {
    <E::Column as Iterable>::iter()
        .map(|column| {
            (
                IdenStatic::as_str(&column).to_string(),
                schema.get_column_def::<E>(column),
            )
        })
        .collect()
}

#[derive(Clone)]
struct RegisteredEntity {
    table: String,
    build: TableBuilder,
    columns: ColumnsBuilder,
}

/// 单个实体在指定后端下的表定义
pub struct TableDefinition<'a> {
    /// 表名
    pub table: &'a str,
    /// 建表语句
    pub create: TableCreateStatement,
    /// 按声明顺序排列的列名与列定义
    pub columns: Vec<(String, ColumnDef)>,
}

/// 实体注册表
///
/// 记录交给 ORM 管理的实体类型，按注册顺序生成建表语句。
/// 同名表只保留第一次注册。
#[derive(Clone, Default)]
pub struct EntityRegistry {
    entries: Vec<RegisteredEntity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<E: EntityTrait + Default>(mut self) -> Self {
        let table = E::default().table_name().to_string();
        if !self.entries.iter().any(|entry| entry.table == table) {
            self.entries.push(RegisteredEntity {
                table,
                build: build_table::<E>,
                columns: build_columns::<E>,
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.table.as_str())
    }

    /// 为指定后端生成全部表定义
    pub fn definitions(&self, schema: &Schema) -> Vec<TableDefinition<'_>> {
        self.entries
            .iter()
            .map(|entry| TableDefinition {
                table: entry.table.as_str(),
                create: (entry.build)(schema),
                columns: (entry.columns)(schema),
            })
            .collect()
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tables()).finish()
    }
}
