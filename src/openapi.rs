use utoipa::OpenApi;

use crate::handlers::allocate::{AllocateRequest, AllocateResponse};
use crate::handlers::batches::{AllocationResponse, BatchResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::allocate::allocate,
        crate::handlers::batches::get_batch,
    ),
    components(schemas(AllocateRequest, AllocateResponse, AllocationResponse, BatchResponse)),
    tags(
        (name = "allocation", description = "Allocate order lines to stock batches"),
        (name = "batches", description = "Inspect batch state"),
    )
)]
pub struct ApiDoc;
