use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::batch::Batch;
use crate::domain::errors::DomainError;
use crate::domain::order_line::OrderLine;
use crate::domain::ports::BatchRepository;
use crate::schema::{allocations, batches};

use super::models::{AllocationRow, BatchRow, NewAllocationRow, NewBatchRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Row mapping ───────────────────────────────────────────────────────────────

fn to_domain(row: BatchRow, lines: Vec<AllocationRow>) -> Result<Batch, DomainError> {
    let order_lines = lines
        .into_iter()
        .map(|l| OrderLine::new(l.sku, l.quantity, l.orderid))
        .collect::<Result<HashSet<_>, _>>()
        .map_err(|e| DomainError::Internal(format!("corrupt allocation for {}: {}", row.reference, e)))?;
    Batch::from_parts(row.reference, row.sku, row.quantity, row.eta, order_lines)
}

fn allocation_rows(batch: &Batch) -> Vec<NewAllocationRow<'_>> {
    batch
        .order_lines()
        .iter()
        .map(|l| NewAllocationRow {
            id: Uuid::new_v4(),
            batch_reference: batch.reference(),
            sku: l.sku(),
            quantity: l.quantity(),
            orderid: l.orderid(),
        })
        .collect()
}

fn insert_allocations(conn: &mut PgConnection, batch: &Batch) -> Result<(), DomainError> {
    let rows = allocation_rows(batch);
    if !rows.is_empty() {
        diesel::insert_into(allocations::table)
            .values(&rows)
            .execute(conn)?;
    }
    Ok(())
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselBatchRepository {
    pool: DbPool,
}

impl DieselBatchRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BatchRepository for DieselBatchRepository {
    fn add(&self, batch: &Batch) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            diesel::insert_into(batches::table)
                .values(&NewBatchRow {
                    reference: batch.reference(),
                    sku: batch.sku(),
                    quantity: batch.quantity(),
                    eta: batch.eta(),
                })
                .execute(conn)?;
            insert_allocations(conn, batch)
        })
    }

    fn get(&self, reference: &str) -> Result<Batch, DomainError> {
        let mut conn = self.pool.get()?;

        let (row, lines) = conn.transaction::<_, DomainError, _>(|conn| {
            let row: Option<BatchRow> = batches::table
                .filter(batches::reference.eq(reference))
                .select(BatchRow::as_select())
                .first(conn)
                .optional()?;

            let Some(row) = row else {
                return Err(DomainError::NotFound(reference.to_string()));
            };

            let lines: Vec<AllocationRow> = allocations::table
                .filter(allocations::batch_reference.eq(reference))
                .select(AllocationRow::as_select())
                .load(conn)?;
            Ok((row, lines))
        })?;

        to_domain(row, lines)
    }

    fn list(&self) -> Result<Vec<Batch>, DomainError> {
        let mut conn = self.pool.get()?;

        let (rows, lines) = conn.transaction::<_, DomainError, _>(|conn| {
            let rows: Vec<BatchRow> = batches::table
                .select(BatchRow::as_select())
                .order(batches::reference.asc())
                .load(conn)?;
            let lines: Vec<AllocationRow> = allocations::table
                .select(AllocationRow::as_select())
                .load(conn)?;
            Ok((rows, lines))
        })?;

        let mut by_batch: HashMap<String, Vec<AllocationRow>> = HashMap::new();
        for line in lines {
            by_batch
                .entry(line.batch_reference.clone())
                .or_default()
                .push(line);
        }

        rows.into_iter()
            .map(|row| {
                let lines = by_batch.remove(&row.reference).unwrap_or_default();
                to_domain(row, lines)
            })
            .collect()
    }

    fn save(&self, batch: &Batch) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let updated = diesel::update(batches::table.filter(batches::reference.eq(batch.reference())))
                .set((
                    batches::quantity.eq(batch.quantity()),
                    batches::updated_at.eq(chrono::Utc::now()),
                ))
                .execute(conn)?;
            if updated == 0 {
                return Err(DomainError::NotFound(batch.reference().to_string()));
            }

            diesel::delete(allocations::table.filter(allocations::batch_reference.eq(batch.reference())))
                .execute(conn)?;
            insert_allocations(conn, batch)
        })
    }
}
