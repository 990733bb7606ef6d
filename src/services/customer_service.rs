//! Registration flow: validate first, then a single persistence attempt.

use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::{
    config::db::{Connection, Pool},
    error::{ServiceError, ServiceResult},
    models::customer::{
        operations, validators::CustomerValidator, Customer, CustomerDTO, NewCustomer,
    },
};

fn connection(pool: &Pool) -> ServiceResult<PooledConnection<ConnectionManager<Connection>>> {
    pool.get().map_err(|err| {
        ServiceError::internal_server_error("Failed to get database connection")
            .with_context(|ctx| ctx.with_tag("db").with_detail(err.to_string()))
    })
}

/// Validates the submission and persists it, returning the generated id.
///
/// A non-empty violation set never reaches the database.
pub fn register(
    dto: CustomerDTO,
    validator: &CustomerValidator,
    pool: &Pool,
) -> ServiceResult<i32> {
    let outcome = validator.validate(&dto);
    if !outcome.is_valid() {
        log::debug!(
            "Customer submission rejected with {} violation(s)",
            outcome.errors().len()
        );
        return Err(ServiceError::validation_failed(outcome));
    }

    let mut conn = connection(pool)?;
    operations::insert_customer(NewCustomer::from(dto), &mut conn).map(|customer| customer.id)
}

pub fn list(pool: &Pool) -> ServiceResult<Vec<Customer>> {
    let mut conn = connection(pool)?;
    operations::list_customers(&mut conn)
}
