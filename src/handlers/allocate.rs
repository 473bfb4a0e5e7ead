use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::DynAllocationService;
use crate::domain::order_line::OrderLine;
use crate::errors::AppError;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AllocateRequest {
    pub sku: String,
    pub quantity: i32,
    pub orderid: i64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AllocateResponse {
    pub batchref: String,
}

/// POST /allocate
///
/// Allocates one order line to the preferred batch of its sku and returns
/// the batch reference.
#[utoipa::path(
    post,
    path = "/allocate",
    request_body = AllocateRequest,
    responses(
        (status = 201, description = "Order line allocated", body = AllocateResponse),
        (status = 400, description = "Invalid line, unknown sku or out of stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "allocation"
)]
pub async fn allocate(
    service: web::Data<DynAllocationService>,
    body: web::Json<AllocateRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let line = OrderLine::new(body.sku, body.quantity, body.orderid)?;

    let batchref = web::block(move || service.allocate(&line))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(AllocateResponse { batchref }))
}
