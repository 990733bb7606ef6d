// Messages
pub const MESSAGE_OK: &str = "ok";
pub const MESSAGE_CUSTOMER_REGISTERED: &str = "Customer registered successfully";
pub const MESSAGE_VALIDATION_FAILED: &str = "Validation failed";
pub const MESSAGE_DUPLICATE_POLICY_REFERENCE: &str =
    "A customer with this policy reference number is already registered";
pub const MESSAGE_REGISTRATION_FAILED: &str = "Failed to register customer";
pub const MESSAGE_INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const MESSAGE_EITHER_DOB_OR_EMAIL: &str = "Either Date Of Birth or Email is required";

// Validation defaults, overridable through the VALIDATION_* environment variables
pub const DEFAULT_MINIMUM_NAME_LENGTH: usize = 3;
pub const DEFAULT_MAXIMUM_NAME_LENGTH: usize = 50;
pub const DEFAULT_POLICY_REFERENCE_PATTERN: &str = r"^[A-Z]{2}-\d{6}$";
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[\w]{4,}@\w{2,}(.com|.co.uk)$";
pub const DEFAULT_MINIMUM_CUSTOMER_AGE: u32 = 18;

// Environment keys
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_MINIMUM_NAME_LENGTH: &str = "VALIDATION_MINIMUM_NAME_LENGTH";
pub const ENV_MAXIMUM_NAME_LENGTH: &str = "VALIDATION_MAXIMUM_NAME_LENGTH";
pub const ENV_POLICY_REFERENCE_PATTERN: &str = "VALIDATION_POLICY_REFERENCE_PATTERN";
pub const ENV_EMAIL_PATTERN: &str = "VALIDATION_EMAIL_PATTERN";
pub const ENV_MINIMUM_CUSTOMER_AGE: &str = "VALIDATION_MINIMUM_CUSTOMER_AGE";
