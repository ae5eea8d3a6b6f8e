use actix_web::web;

use crate::handlers::education;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/education")
            .service(
                web::resource("")
                    .route(web::get().to(education::get_education))
            )
            .service(
                web::resource("/{education_id}")
                    .route(web::get().to(education::get_education_by_id))
            )
    );
}
