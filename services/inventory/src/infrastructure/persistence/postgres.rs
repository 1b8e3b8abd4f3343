//! PostgreSQL repository implementation

use adapter_postgres::TransactionManager;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{MaterialId, PagedResult, Pagination, TransactionId};
use errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{Material, NewMaterial, NewStockTransaction, TransactionRecord};
use crate::domain::repositories::{MaterialRepository, TransactionRepository};
use crate::domain::services::quantity_adjustment;

use super::rows::{MaterialRow, TransactionRow};

const MATERIAL_COLUMNS: &str = "id, material_id, name, model_number, category, equipment, \
     warehouse, shelf, quantity, threshold, created_at, updated_at";

const MATERIAL_SEARCH_CLAUSE: &str = "WHERE (material_id ILIKE $1 OR name ILIKE $1 \
     OR model_number ILIKE $1 OR category ILIKE $1 OR equipment ILIKE $1 \
     OR warehouse ILIKE $1 OR shelf ILIKE $1)";

/// sqlx 错误映射：唯一约束冲突按规范返回 Validation（对外 400）
fn map_material_write_err(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::validation("material with this material_id already exists")
        }
        _ => AppError::database(format!("Failed to write material: {}", e)),
    }
}

// ============================================================================
// MaterialRepository 实现
// ============================================================================

pub struct PostgresMaterialRepository {
    pool: PgPool,
}

impl PostgresMaterialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    async fn find_by_id(&self, id: MaterialId) -> AppResult<Option<Material>> {
        let row = sqlx::query_as::<_, MaterialRow>(&format!(
            "SELECT {} FROM materials WHERE id = $1",
            MATERIAL_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find material: {}", e)))?;

        Ok(row.map(MaterialRow::into_material))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Material>> {
        let row = sqlx::query_as::<_, MaterialRow>(&format!(
            "SELECT {} FROM materials WHERE material_id = $1",
            MATERIAL_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find material: {}", e)))?;

        Ok(row.map(MaterialRow::into_material))
    }

    async fn save(&self, material: &NewMaterial) -> AppResult<Material> {
        let row = sqlx::query_as::<_, MaterialRow>(&format!(
            r#"
            INSERT INTO materials (material_id, name, model_number, category,
                                   equipment, warehouse, shelf, quantity, threshold)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            MATERIAL_COLUMNS
        ))
        .bind(&material.material_id)
        .bind(&material.name)
        .bind(&material.model_number)
        .bind(&material.category)
        .bind(&material.equipment)
        .bind(&material.warehouse)
        .bind(&material.shelf)
        .bind(material.quantity)
        .bind(material.threshold)
        .fetch_one(&self.pool)
        .await
        .map_err(map_material_write_err)?;

        Ok(row.into_material())
    }

    async fn update(&self, material: &Material) -> AppResult<Material> {
        let row = sqlx::query_as::<_, MaterialRow>(&format!(
            r#"
            UPDATE materials SET
                material_id = $1, name = $2, model_number = $3, category = $4,
                equipment = $5, warehouse = $6, shelf = $7, quantity = $8,
                threshold = $9, updated_at = now()
            WHERE id = $10
            RETURNING {}
            "#,
            MATERIAL_COLUMNS
        ))
        .bind(&material.material_id)
        .bind(&material.name)
        .bind(&material.model_number)
        .bind(&material.category)
        .bind(&material.equipment)
        .bind(&material.warehouse)
        .bind(&material.shelf)
        .bind(material.quantity)
        .bind(material.threshold)
        .bind(material.id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_material_write_err)?;

        row.map(MaterialRow::into_material)
            .ok_or_else(|| AppError::not_found(format!("material {} not found", material.id)))
    }

    async fn delete(&self, id: MaterialId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete material: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("material {} not found", id)));
        }
        Ok(())
    }

    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<Material>> {
        let pattern = search.map(|s| format!("%{}%", s));

        let (where_clause, limit_idx, offset_idx) = if pattern.is_some() {
            (MATERIAL_SEARCH_CLAUSE, 2, 3)
        } else {
            ("", 1, 2)
        };

        let count_query = format!("SELECT COUNT(*) FROM materials {}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(p) = &pattern {
            count = count.bind(p);
        }
        let total = count
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count materials: {}", e)))?;

        let data_query = format!(
            "SELECT {} FROM materials {} ORDER BY id LIMIT ${} OFFSET ${}",
            MATERIAL_COLUMNS, where_clause, limit_idx, offset_idx
        );
        let mut data = sqlx::query_as::<_, MaterialRow>(&data_query);
        if let Some(p) = &pattern {
            data = data.bind(p);
        }
        let rows = data
            .bind(pagination.page_size as i64)
            .bind(pagination.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list materials: {}", e)))?;

        Ok(PagedResult::new(
            rows.into_iter().map(MaterialRow::into_material).collect(),
            total as u64,
            &pagination,
        ))
    }

    async fn delete_zero_stock(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM materials WHERE quantity <= 0")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to delete zero-stock materials: {}", e))
            })?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// TransactionRepository 实现
// ============================================================================

const TRANSACTION_SELECT: &str = "SELECT t.id, t.material_id AS material_ref, \
     t.transaction_type, t.quantity, t.date, \
     m.name AS material_name, m.material_id AS material_code \
     FROM stock_transactions t JOIN materials m ON m.id = t.material_id";

const TRANSACTION_SEARCH_CLAUSE: &str = "WHERE (t.transaction_type ILIKE $1 \
     OR m.name ILIKE $1 OR m.material_id ILIKE $1)";

fn map_transaction_write_err(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::validation("material does not exist")
        }
        _ => AppError::database(format!("Failed to write transaction: {}", e)),
    }
}

pub struct PostgresTransactionRepository {
    tx: TransactionManager,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tx: TransactionManager::new(pool),
        }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn find_by_id(&self, id: TransactionId) -> AppResult<Option<TransactionRecord>> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "{} WHERE t.id = $1",
            TRANSACTION_SELECT
        ))
        .bind(id.0)
        .fetch_optional(self.tx.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to find transaction: {}", e)))?;

        Ok(row.map(TransactionRow::into_record))
    }

    async fn record(&self, transaction: &NewStockTransaction) -> AppResult<TransactionRecord> {
        let mut tx = self.tx.begin().await?;

        // 先锁物料行：不存在的物料在这里以 NotFound 返回，
        // 而不是插入后撞外键；读-改-写在同一事务内，并发调整串行化
        let locked: Option<(i32, String, String)> = sqlx::query_as(
            "SELECT quantity, name, material_id FROM materials WHERE id = $1 FOR UPDATE",
        )
        .bind(transaction.material.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to lock material: {}", e)))?;

        let Some((current, material_name, material_code)) = locked else {
            TransactionManager::rollback(tx).await?;
            return Err(AppError::not_found(format!(
                "material {} not found",
                transaction.material
            )));
        };

        let (id, date): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO stock_transactions (material_id, transaction_type, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, date
            "#,
        )
        .bind(transaction.material.0)
        .bind(transaction.transaction_type.as_str())
        .bind(transaction.quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_transaction_write_err)?;

        let adjusted =
            quantity_adjustment::apply(current, transaction.transaction_type, transaction.quantity);

        sqlx::query("UPDATE materials SET quantity = $1, updated_at = now() WHERE id = $2")
            .bind(adjusted)
            .bind(transaction.material.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to adjust quantity: {}", e)))?;

        TransactionManager::commit(tx).await?;

        Ok(TransactionRecord {
            id: TransactionId(id),
            material: transaction.material,
            transaction_type: transaction.transaction_type,
            quantity: transaction.quantity,
            date,
            material_name,
            material_code,
        })
    }

    async fn update(
        &self,
        id: TransactionId,
        fields: &NewStockTransaction,
    ) -> AppResult<TransactionRecord> {
        let result = sqlx::query(
            r#"
            UPDATE stock_transactions
            SET material_id = $1, transaction_type = $2, quantity = $3
            WHERE id = $4
            "#,
        )
        .bind(fields.material.0)
        .bind(fields.transaction_type.as_str())
        .bind(fields.quantity)
        .bind(id.0)
        .execute(self.tx.pool())
        .await
        .map_err(map_transaction_write_err)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("transaction {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("transaction {} not found", id)))
    }

    async fn delete(&self, id: TransactionId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stock_transactions WHERE id = $1")
            .bind(id.0)
            .execute(self.tx.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete transaction: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("transaction {} not found", id)));
        }
        Ok(())
    }

    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<TransactionRecord>> {
        let pattern = search.map(|s| format!("%{}%", s));

        let (where_clause, limit_idx, offset_idx) = if pattern.is_some() {
            (TRANSACTION_SEARCH_CLAUSE, 2, 3)
        } else {
            ("", 1, 2)
        };

        let count_query = format!(
            "SELECT COUNT(*) FROM stock_transactions t JOIN materials m ON m.id = t.material_id {}",
            where_clause
        );
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(p) = &pattern {
            count = count.bind(p);
        }
        let total = count
            .fetch_one(self.tx.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count transactions: {}", e)))?;

        // 最新的记录排在最前
        let data_query = format!(
            "{} {} ORDER BY t.date DESC, t.id DESC LIMIT ${} OFFSET ${}",
            TRANSACTION_SELECT, where_clause, limit_idx, offset_idx
        );
        let mut data = sqlx::query_as::<_, TransactionRow>(&data_query);
        if let Some(p) = &pattern {
            data = data.bind(p);
        }
        let rows = data
            .bind(pagination.page_size as i64)
            .bind(pagination.offset() as i64)
            .fetch_all(self.tx.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to list transactions: {}", e)))?;

        Ok(PagedResult::new(
            rows.into_iter().map(TransactionRow::into_record).collect(),
            total as u64,
            &pagination,
        ))
    }
}
