//! Registration endpoint.
//!
//! A non-empty violation set maps to a 400 response enumerating every
//! violation; a duplicate policy reference maps to 409.

use actix_web::{web, HttpResponse};
use log::info;
use serde::Serialize;

use crate::{
    config::db::Pool,
    constants,
    error::{LogErrorExt, ServiceError},
    models::{
        customer::{validators::CustomerValidator, CustomerDTO},
        response::ResponseBody,
    },
    services::customer_service,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCustomer {
    pub customer_id: i32,
}

// POST api/customers
pub async fn register(
    dto: web::Json<CustomerDTO>,
    validator: web::Data<CustomerValidator>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServiceError> {
    info!("Processing customer registration request");

    let customer_id =
        customer_service::register(dto.into_inner(), validator.get_ref(), pool.get_ref())
            .log_error("customer_controller::register")?;

    Ok(HttpResponse::Created().json(ResponseBody::new(
        constants::MESSAGE_CUSTOMER_REGISTERED,
        RegisteredCustomer { customer_id },
    )))
}

// GET api/customers
pub async fn list(pool: web::Data<Pool>) -> Result<HttpResponse, ServiceError> {
    let found = customer_service::list(pool.get_ref()).log_error("customer_controller::list")?;
    Ok(HttpResponse::Ok().json(ResponseBody::new(constants::MESSAGE_OK, found)))
}
