//! Database operations for the customer model.

use diesel::{prelude::*, result::DatabaseErrorKind};

use crate::{
    config::db::Connection,
    constants,
    error::ServiceError,
    models::customer::{Customer, NewCustomer},
    schema::customers::dsl::*,
};

/// Inserts a customer and returns the stored row with its generated id.
///
/// A duplicate policy reference number surfaces as a conflict.
pub fn insert_customer(
    new_customer: NewCustomer,
    conn: &mut Connection,
) -> Result<Customer, ServiceError> {
    diesel::insert_into(customers)
        .values(new_customer)
        .get_result::<Customer>(conn)
        .map_err(|err| {
            log::error!("Failed to insert customer: {}", err);
            if let diesel::result::Error::DatabaseError(kind, info) = &err {
                let base_message = info.message().to_string();

                let service_error = match kind {
                    DatabaseErrorKind::UniqueViolation => {
                        ServiceError::conflict(constants::MESSAGE_DUPLICATE_POLICY_REFERENCE)
                    }
                    DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::NotNullViolation => {
                        ServiceError::bad_request(constants::MESSAGE_REGISTRATION_FAILED)
                    }
                    _ => ServiceError::internal_server_error(
                        constants::MESSAGE_REGISTRATION_FAILED,
                    ),
                };

                return service_error
                    .with_context(|ctx| ctx.with_tag("customer").with_detail(base_message));
            }

            ServiceError::internal_server_error(constants::MESSAGE_REGISTRATION_FAILED)
                .with_context(|ctx| ctx.with_tag("customer").with_detail(err.to_string()))
        })
}

pub fn list_customers(conn: &mut Connection) -> Result<Vec<Customer>, ServiceError> {
    customers
        .order(id.asc())
        .load::<Customer>(conn)
        .map_err(|err| {
            log::error!("Failed to list customers: {}", err);
            ServiceError::internal_server_error("Failed to list customers")
                .with_context(|ctx| ctx.with_tag("customer").with_detail(err.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config;
    use crate::error::ErrorKind;

    fn migrated_pool(dir: &TempDir) -> config::db::Pool {
        let db_path = dir.path().join("customer.db");
        let pool = config::db::init_db_pool(db_path.to_str().unwrap());
        let mut conn = pool.get().unwrap();
        config::db::run_migration(&mut conn).unwrap();
        pool
    }

    fn sample_customer(policy_reference: &str) -> NewCustomer {
        NewCustomer {
            first_name: "John".to_string(),
            last_name: "Test".to_string(),
            policy_reference_number: policy_reference.to_string(),
            date_of_birth: None,
            email: Some("abcd@a1.co.uk".to_string()),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let pool = migrated_pool(&dir);
        let mut conn = pool.get().unwrap();

        let first = insert_customer(sample_customer("AA-000001"), &mut conn).unwrap();
        let second = insert_customer(sample_customer("AA-000002"), &mut conn).unwrap();
        assert!(second.id > first.id);

        let all = list_customers(&mut conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].policy_reference_number, "AA-000001");
    }

    #[test]
    fn test_duplicate_policy_reference_is_a_conflict() {
        let dir = TempDir::new().unwrap();
        let pool = migrated_pool(&dir);
        let mut conn = pool.get().unwrap();

        insert_customer(sample_customer("AA-000001"), &mut conn).unwrap();
        let err = insert_customer(sample_customer("AA-000001"), &mut conn).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }
}
