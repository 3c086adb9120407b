//! Field validation for account requests.
//!
//! Failures become `400 invalid_request` envelopes whose details name the
//! offending field and a machine-readable code.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::domain::{AccountNumber, AccountType};

use super::error::ApiError;

pub(crate) const NAME_MIN: usize = 5;
pub(crate) const NAME_MAX: usize = 30;

/// Reasons a request field is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidLength,
    InvalidFormat,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidLength => "invalid_length",
            ErrorCode::InvalidFormat => "invalid_format",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const MOBILE_NUMBER: FieldName = FieldName::new("mobileNumber");
pub(crate) const ACCOUNT_NUMBER: FieldName = FieldName::new("accountNumber");
pub(crate) const ACCOUNT_TYPE: FieldName = FieldName::new("accountType");
pub(crate) const BRANCH_ADDRESS: FieldName = FieldName::new("branchAddress");

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> ApiError {
    ApiError::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> ApiError {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Unwrap a required field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, ApiError> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn validate_name(name: &str) -> Result<(), ApiError> {
    let len = name.trim().chars().count();
    if (NAME_MIN..=NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(field_error(
            NAME,
            ErrorCode::InvalidLength,
            format!("The length of the customer name should be between {NAME_MIN} and {NAME_MAX}"),
        ))
    }
}

pub(crate) fn validate_email(email: &str) -> Result<(), ApiError> {
    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
    });
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(field_error(
            EMAIL,
            ErrorCode::InvalidFormat,
            "Email address should be a valid value",
        ))
    }
}

pub(crate) fn validate_mobile_number(mobile_number: &str) -> Result<(), ApiError> {
    static MOBILE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));
    if MOBILE_RE.is_match(mobile_number) {
        Ok(())
    } else {
        Err(field_error(
            MOBILE_NUMBER,
            ErrorCode::InvalidFormat,
            "Mobile number must be 10 digits",
        ))
    }
}

pub(crate) fn parse_account_number(raw: i64) -> Result<AccountNumber, ApiError> {
    if (1_000_000_000..=9_999_999_999).contains(&raw) {
        Ok(AccountNumber::new(raw))
    } else {
        Err(field_error(
            ACCOUNT_NUMBER,
            ErrorCode::InvalidFormat,
            "AccountNumber must be 10 digits",
        ))
    }
}

pub(crate) fn parse_account_type(raw: &str) -> Result<AccountType, ApiError> {
    raw.parse::<AccountType>().map_err(|err| {
        field_error(ACCOUNT_TYPE, ErrorCode::InvalidValue, err.to_string())
    })
}

pub(crate) fn validate_branch_address(branch_address: &str) -> Result<(), ApiError> {
    if branch_address.trim().is_empty() {
        Err(field_error(
            BRANCH_ADDRESS,
            ErrorCode::InvalidLength,
            "BranchAddress can not be a null or empty",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field_and_code(error: &ApiError) -> (String, String) {
        let details = error.details().expect("details present");
        (
            details["field"].as_str().expect("field").to_owned(),
            details["code"].as_str().expect("code").to_owned(),
        )
    }

    #[rstest]
    #[case("Madan")]
    #[case("John Hans")]
    #[case("abcdefghijklmnopqrstuvwxyzabcd")]
    fn names_within_bounds_pass(#[case] name: &str) {
        assert!(validate_name(name).is_ok());
    }

    #[rstest]
    #[case("Jo")]
    #[case("    ")]
    #[case("abcdefghijklmnopqrstuvwxyzabcde")]
    fn names_outside_bounds_fail(#[case] name: &str) {
        let error = validate_name(name).expect_err("invalid name");
        assert_eq!(
            field_and_code(&error),
            ("name".to_owned(), "invalid_length".to_owned())
        );
    }

    #[rstest]
    #[case("test@gmail.com", true)]
    #[case("first.last+tag@bank.co.uk", true)]
    #[case("not-an-email", false)]
    #[case("a@b", false)]
    fn email_format(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(validate_email(email).is_ok(), valid);
    }

    #[rstest]
    #[case("5717778989", true)]
    #[case("571777898", false)]
    #[case("57177789890", false)]
    #[case("57177a8989", false)]
    fn mobile_number_format(#[case] mobile: &str, #[case] valid: bool) {
        assert_eq!(validate_mobile_number(mobile).is_ok(), valid);
    }

    #[rstest]
    #[case(1_122_334_455, true)]
    #[case(999_999_999, false)]
    #[case(10_000_000_000, false)]
    fn account_number_digits(#[case] raw: i64, #[case] valid: bool) {
        assert_eq!(parse_account_number(raw).is_ok(), valid);
    }

    #[rstest]
    fn unknown_account_type_names_the_field() {
        let error = parse_account_type("Brokerage").expect_err("unknown kind");
        assert_eq!(
            field_and_code(&error),
            ("accountType".to_owned(), "invalid_value".to_owned())
        );
    }

    #[rstest]
    fn blank_branch_address_is_rejected() {
        assert!(validate_branch_address("  ").is_err());
        assert!(validate_branch_address("123 ABC").is_ok());
    }

    #[rstest]
    fn require_reports_missing_field() {
        let error = require(None::<String>, MOBILE_NUMBER).expect_err("missing");
        assert_eq!(
            field_and_code(&error),
            ("mobileNumber".to_owned(), "missing_field".to_owned())
        );
    }
}
