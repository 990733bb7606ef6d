//! Customer model
//!
//! The DTO is the client-facing shape; the id is always generated by the
//! database, never supplied by the caller.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::customers;

#[derive(Queryable, Identifiable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = customers)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub policy_reference_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub policy_reference_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

/// Registration submission.
///
/// Missing text fields deserialise to empty strings; a missing date of birth
/// stays `None`, the "unset" sentinel the conditional rules key on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDTO {
    pub first_name: String,
    pub last_name: String,
    pub policy_reference_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
}

impl From<CustomerDTO> for NewCustomer {
    fn from(dto: CustomerDTO) -> Self {
        let email = dto.email.trim();
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            policy_reference_number: dto.policy_reference_number,
            date_of_birth: dto.date_of_birth,
            email: if email.is_empty() {
                None
            } else {
                Some(email.to_string())
            },
        }
    }
}

pub mod operations;
pub mod validators;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_deserialises_camel_case_with_defaults() {
        let dto: CustomerDTO =
            serde_json::from_str(r#"{"firstName":"John","policyReferenceNumber":"AA-000001"}"#)
                .unwrap();
        assert_eq!(dto.first_name, "John");
        assert_eq!(dto.last_name, "");
        assert_eq!(dto.policy_reference_number, "AA-000001");
        assert_eq!(dto.date_of_birth, None);
        assert_eq!(dto.email, "");
    }

    #[test]
    fn test_blank_email_is_stored_as_null() {
        let dto = CustomerDTO {
            email: "   ".to_string(),
            ..CustomerDTO::default()
        };
        let record = NewCustomer::from(dto);
        assert_eq!(record.email, None);

        let dto = CustomerDTO {
            email: "abcd@a1.co.uk".to_string(),
            ..CustomerDTO::default()
        };
        let record = NewCustomer::from(dto);
        assert_eq!(record.email.as_deref(), Some("abcd@a1.co.uk"));
    }
}
