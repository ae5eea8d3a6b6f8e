use actix_web::web;

use crate::handlers::json_error::not_found;

/// JSON body for unknown routes.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(not_found));
}
