//! Registration rule set for `CustomerDTO`.
//!
//! All applicable rules are evaluated on every call; violations accumulate
//! so the caller sees the complete picture at once. The date-of-birth and
//! email rules are conditional on each other through two independent trigger
//! predicates: the date-of-birth requiredness check fires when email is
//! blank, while the email requiredness check fires when date of birth is the
//! unset sentinel. These triggers are not complements of one another and
//! must stay separate.

use chrono::{Local, Months, NaiveDate};
use regex::Regex;

use crate::{
    config::validation::ValidatorConfig,
    constants,
    error::{ServiceError, ServiceResult},
    models::customer::CustomerDTO,
    validation::{rules, ValidationError, ValidationOutcome},
};

/// Immutable, shareable validator built once at startup from
/// [`ValidatorConfig`]. Construction compiles the configured patterns and is
/// the only place validation can fail abnormally.
pub struct CustomerValidator {
    config: ValidatorConfig,
    policy_reference_pattern: Regex,
    email_pattern: Regex,
}

impl CustomerValidator {
    pub fn new(config: ValidatorConfig) -> ServiceResult<Self> {
        if config.minimum_name_length > config.maximum_name_length {
            return Err(configuration_error(format!(
                "minimum name length {} exceeds maximum name length {}",
                config.minimum_name_length, config.maximum_name_length
            )));
        }

        let policy_reference_pattern = compile_anchored(&config.policy_reference_pattern)?;
        let email_pattern = compile_anchored(&config.email_pattern)?;

        Ok(Self {
            config,
            policy_reference_pattern,
            email_pattern,
        })
    }

    /// Validates against the current local date.
    pub fn validate(&self, dto: &CustomerDTO) -> ValidationOutcome {
        self.validate_at(dto, Local::now().date_naive())
    }

    /// Validates with an explicit `today`; identical inputs always yield
    /// identical outcomes.
    pub fn validate_at(&self, dto: &CustomerDTO, today: NaiveDate) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        self.check_name("firstName", &dto.first_name, &mut outcome);
        self.check_name("lastName", &dto.last_name, &mut outcome);
        self.check_policy_reference(&dto.policy_reference_number, &mut outcome);
        self.check_date_of_birth(dto, today, &mut outcome);
        self.check_email(dto, &mut outcome);

        outcome
    }

    /// A blank name reports only the requiredness violation; the length
    /// bounds apply to supplied values.
    fn check_name(&self, field: &'static str, value: &str, outcome: &mut ValidationOutcome) {
        match rules::required(field, value) {
            Err(error) => outcome.push(error),
            Ok(()) => outcome.record(rules::length(
                field,
                value,
                self.config.minimum_name_length,
                self.config.maximum_name_length,
            )),
        }
    }

    fn check_policy_reference(&self, value: &str, outcome: &mut ValidationOutcome) {
        match rules::required("policyReferenceNumber", value) {
            Err(error) => outcome.push(error),
            Ok(()) => outcome.record(rules::full_match(
                "policyReferenceNumber",
                value,
                &self.policy_reference_pattern,
            )),
        }
    }

    /// Requiredness fires only when the sibling email is blank. The age
    /// bound applies to any supplied date, whatever the email holds.
    fn check_date_of_birth(
        &self,
        dto: &CustomerDTO,
        today: NaiveDate,
        outcome: &mut ValidationOutcome,
    ) {
        if dto.email.trim().is_empty() && dto.date_of_birth.is_none() {
            outcome.push(ValidationError::new(
                "dateOfBirth",
                "REQUIRED",
                constants::MESSAGE_EITHER_DOB_OR_EMAIL,
            ));
        }

        if let Some(date_of_birth) = dto.date_of_birth {
            let cutoff = minimum_age_cutoff(today, self.config.minimum_customer_age);
            outcome.record(rules::on_or_before(
                "dateOfBirth",
                date_of_birth,
                cutoff,
                "UNDER_MINIMUM_AGE",
                &format!(
                    "Age of customer must be greater than or equal to: {}",
                    self.config.minimum_customer_age
                ),
            ));
        }
    }

    /// Requiredness fires only when date of birth is the unset sentinel; the
    /// pattern applies to any non-blank email.
    fn check_email(&self, dto: &CustomerDTO, outcome: &mut ValidationOutcome) {
        if dto.date_of_birth.is_none() && dto.email.trim().is_empty() {
            outcome.push(ValidationError::new(
                "email",
                "REQUIRED",
                constants::MESSAGE_EITHER_DOB_OR_EMAIL,
            ));
        }

        if !dto.email.trim().is_empty() {
            outcome.record(rules::full_match("email", &dto.email, &self.email_pattern));
        }
    }
}

/// Latest date of birth that still satisfies the minimum age, at day
/// precision. Month arithmetic clamps the 29th of February the same way the
/// calendar does.
fn minimum_age_cutoff(today: NaiveDate, minimum_age: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(minimum_age.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

fn compile_anchored(pattern: &str) -> ServiceResult<Regex> {
    Regex::new(&rules::anchored(pattern))
        .map_err(|err| configuration_error(format!("invalid pattern {:?}: {}", pattern, err)))
}

fn configuration_error(detail: String) -> ServiceError {
    ServiceError::internal_server_error("Invalid validation configuration")
        .with_context(|ctx| ctx.with_tag("validation").with_detail(detail))
}
