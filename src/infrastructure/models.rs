use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{allocations, batches};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = batches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BatchRow {
    pub reference: String,
    pub sku: String,
    pub quantity: i32,
    pub eta: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = batches)]
pub struct NewBatchRow<'a> {
    pub reference: &'a str,
    pub sku: &'a str,
    pub quantity: i32,
    pub eta: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = allocations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AllocationRow {
    pub id: Uuid,
    pub batch_reference: String,
    pub sku: String,
    pub quantity: i32,
    pub orderid: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = allocations)]
pub struct NewAllocationRow<'a> {
    pub id: Uuid,
    pub batch_reference: &'a str,
    pub sku: &'a str,
    pub quantity: i32,
    pub orderid: i64,
}
