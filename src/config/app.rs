use actix_web::web;

use crate::api::{customer_controller, health_controller};

pub fn config_services(cfg: &mut web::ServiceConfig) {
    log::debug!("Configuring routes");
    cfg.service(
        web::scope("/api")
            .service(web::resource("/health").route(web::get().to(health_controller::health)))
            .service(
                web::resource("/customers")
                    .route(web::post().to(customer_controller::register))
                    .route(web::get().to(customer_controller::list)),
            ),
    );
}
