use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::get_skills))
            )
            .service(
                web::resource("/{skill_id}")
                    .route(web::get().to(skills::get_skill_by_id))
            )
    );
}
