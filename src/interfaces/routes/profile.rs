use actix_web::web;

use crate::handlers::profile;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .service(
                web::resource("")
                    .route(web::get().to(profile::get_profile))
            )
            .service(
                web::resource("/{profile_id}")
                    .route(web::get().to(profile::get_profile_by_id))
            )
    );
}
