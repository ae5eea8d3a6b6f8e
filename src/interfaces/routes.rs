use actix_web::web;

use crate::{constants::API_PREFIX, handlers::home::home};

mod education;
mod experiences;
mod json_error;
mod profile;
mod projects;
mod skills;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(profile::config_routes)
            .configure(skills::config_routes)
            .configure(projects::config_routes)
            .configure(experiences::config_routes)
            .configure(education::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
