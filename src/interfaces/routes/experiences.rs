use actix_web::web;

use crate::handlers::experiences;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experiences")
            .service(
                web::resource("")
                    .route(web::get().to(experiences::get_experiences))
            )
            .service(
                web::resource("/{experience_id}")
                    .route(web::get().to(experiences::get_experience_by_id))
            )
    );
}
