pub mod allocate;
pub mod batches;

use actix_web::web;

use crate::errors::AppError;

/// Reject unparsable JSON bodies with the same `{"message"}` shape as every
/// other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/allocate", web::post().to(allocate::allocate))
        .route("/batches/{reference}", web::get().to(batches::get_batch));
}
