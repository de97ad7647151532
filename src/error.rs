use thiserror::Error;

// Client-fault outcomes of request extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed XML: {0}")]
    MalformedInput(String),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Missing required parameters (password, username, CompanyID)")]
    MissingCredentials,

    #[error("Invalid date format for {field}: '{value}' (expected DD/MM/YYYY)")]
    BadDateFormat { field: String, value: String },

    #[error("StartDate must be at least {min_days} days after today.")]
    LeadTimeTooShort { min_days: i64 },

    #[error("Stay duration must be at least {min_nights} nights.")]
    StayTooShort { min_nights: i64 },

    #[error("Invalid CompanyID: '{value}' is not an integer")]
    InvalidCompanyId { value: String },

    #[error("Invalid optionsQuota: '{value}' is not a non-negative integer")]
    InvalidOptionsQuota { value: String },
}

impl ValidationError {
    pub fn missing_field(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }

    /// Stable machine-readable code for the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedInput(_) => "malformed_input",
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::MissingCredentials => "missing_credentials",
            ValidationError::BadDateFormat { .. } => "bad_date_format",
            ValidationError::LeadTimeTooShort { .. } => "lead_time_too_short",
            ValidationError::StayTooShort { .. } => "stay_too_short",
            ValidationError::InvalidCompanyId { .. } => "invalid_company_id",
            ValidationError::InvalidOptionsQuota { .. } => "invalid_options_quota",
        }
    }
}

impl From<quick_xml::Error> for ValidationError {
    fn from(err: quick_xml::Error) -> Self {
        ValidationError::MalformedInput(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid market configuration: {0}")]
    Invalid(String),

    #[error("failed to parse market configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
