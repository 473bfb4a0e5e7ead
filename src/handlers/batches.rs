use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::DynAllocationService;
use crate::domain::batch::Batch;
use crate::errors::AppError;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AllocationResponse {
    pub sku: String,
    pub quantity: i32,
    pub orderid: i64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BatchResponse {
    pub reference: String,
    pub sku: String,
    /// Quantity still available for allocation.
    pub quantity: i32,
    /// Sum of the allocated lines' quantities.
    pub allocated: i32,
    pub eta: Option<NaiveDate>,
    pub allocations: Vec<AllocationResponse>,
}

impl From<Batch> for BatchResponse {
    fn from(batch: Batch) -> Self {
        let mut allocations: Vec<AllocationResponse> = batch
            .order_lines()
            .iter()
            .map(|l| AllocationResponse {
                sku: l.sku().to_string(),
                quantity: l.quantity(),
                orderid: l.orderid(),
            })
            .collect();
        allocations.sort_by(|a, b| {
            (a.orderid, &a.sku, a.quantity).cmp(&(b.orderid, &b.sku, b.quantity))
        });

        Self {
            reference: batch.reference().to_string(),
            sku: batch.sku().to_string(),
            quantity: batch.quantity(),
            allocated: batch.allocated_quantity(),
            eta: batch.eta(),
            allocations,
        }
    }
}

/// GET /batches/{reference}
///
/// Returns the stored state of one batch, including its allocated lines.
#[utoipa::path(
    get,
    path = "/batches/{reference}",
    params(
        ("reference" = String, Path, description = "Batch reference"),
    ),
    responses(
        (status = 200, description = "Batch found", body = BatchResponse),
        (status = 404, description = "Batch not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "batches"
)]
pub async fn get_batch(
    service: web::Data<DynAllocationService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reference = path.into_inner();

    let batch = web::block(move || service.get_batch(&reference))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(BatchResponse::from(batch)))
}
