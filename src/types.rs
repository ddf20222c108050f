//! Common types used throughout tracktrace
//!
//! Remote records are kept as raw JSON objects so every field the API
//! returns can be passed straight through to CSV. The typed structs below
//! are thin views that pull out the keys the workflows need.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One remote record, fields in the order the API sent them
pub type Record = serde_json::Map<String, JsonValue>;

// ============================================================================
// Credentials
// ============================================================================

/// Login details for one run. Never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub hostname: String,
    pub username: String,
    pub password: String,
    pub otp: Option<String>,
}

impl Credentials {
    /// Create credentials without a one-time password
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password: password.into(),
            otp: None,
        }
    }

    /// Attach a one-time password. Empty strings are treated as absent.
    #[must_use]
    pub fn with_otp(mut self, otp: Option<String>) -> Self {
        self.otp = otp.filter(|v| !v.is_empty());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"***")
            .field("otp", &self.otp.as_ref().map(|_| "***"))
            .finish()
    }
}

// ============================================================================
// Access Token
// ============================================================================

/// Opaque bearer token, valid for the lifetime of one run
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

// ============================================================================
// Pages
// ============================================================================

/// A single page of results. An empty `data` array ends pagination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultPage {
    #[serde(default)]
    pub data: Vec<Record>,
}

// ============================================================================
// Typed Views
// ============================================================================

/// Read a key as a string, accepting numeric ids as well.
///
/// Returns `None` for absent, null and empty values.
pub fn field_as_string(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_field(record: &Record, key: &str, kind: &str) -> Result<String> {
    field_as_string(record, key)
        .ok_or_else(|| Error::Other(format!("{kind} record is missing '{key}'")))
}

/// A regulatory operating permit
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub license_number: String,
    pub license_name: String,
}

impl License {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            license_number: required_field(record, "licenseNumber", "License")?,
            license_name: field_as_string(record, "licenseName").unwrap_or_default(),
        })
    }
}

/// An outgoing shipment, keyed by manifest number within a license
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub manifest_number: String,
}

impl Transfer {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            manifest_number: required_field(record, "manifestNumber", "Transfer")?,
        })
    }
}

/// A shipment leg of a transfer
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: String,
}

impl Delivery {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            id: required_field(record, "id", "Delivery")?,
        })
    }
}

/// A package carried by a delivery
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub package_id: String,
}

impl Package {
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            package_id: required_field(record, "packageId", "Package")?,
        })
    }
}

/// A lab test result attached to a package
#[derive(Debug, Clone, PartialEq)]
pub struct LabResult {
    pub document_file_id: Option<String>,
}

impl LabResult {
    /// A zero or `false` document id means no document is attached
    pub fn from_record(record: &Record) -> Self {
        let document_file_id = match record.get("labTestResultDocumentFileId") {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => {
                None
            }
            Some(Value::Bool(false)) => None,
            _ => field_as_string(record, "labTestResultDocumentFileId"),
        };
        Self { document_file_id }
    }
}

/// A lab result document reachable through a specific package
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef {
    pub package_id: String,
    pub document_id: String,
}

impl DocumentRef {
    pub fn new(package_id: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            document_id: document_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = Credentials::new("ca.metrc.com", "user", "hunter2")
            .with_otp(Some("123456".to_string()));
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("123456"));
        assert!(debug.contains("ca.metrc.com"));
    }

    #[test]
    fn test_credentials_empty_otp_is_dropped() {
        let creds = Credentials::new("h", "u", "p").with_otp(Some(String::new()));
        assert!(creds.otp.is_none());
    }

    #[test]
    fn test_access_token_debug_redacts() {
        let token = AccessToken::new("secret-token");
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
        assert_eq!(token.as_str(), "secret-token");
    }

    #[test]
    fn test_result_page_missing_data_is_empty() {
        let page: ResultPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_field_as_string_accepts_numbers() {
        let rec = record(json!({"id": 42, "name": "x", "blank": "", "none": null}));
        assert_eq!(field_as_string(&rec, "id"), Some("42".to_string()));
        assert_eq!(field_as_string(&rec, "name"), Some("x".to_string()));
        assert_eq!(field_as_string(&rec, "blank"), None);
        assert_eq!(field_as_string(&rec, "none"), None);
        assert_eq!(field_as_string(&rec, "missing"), None);
    }

    #[test]
    fn test_license_from_record() {
        let rec = record(json!({"licenseNumber": "LIC-1", "licenseName": "Acme"}));
        let license = License::from_record(&rec).unwrap();
        assert_eq!(license.license_number, "LIC-1");
        assert_eq!(license.license_name, "Acme");

        let rec = record(json!({"licenseName": "Acme"}));
        assert!(License::from_record(&rec).is_err());
    }

    #[test]
    fn test_lab_result_optional_document() {
        let rec = record(json!({"labTestResultDocumentFileId": 991}));
        assert_eq!(
            LabResult::from_record(&rec).document_file_id,
            Some("991".to_string())
        );

        let rec = record(json!({"labTestResultDocumentFileId": null}));
        assert_eq!(LabResult::from_record(&rec).document_file_id, None);
    }

    #[test]
    fn test_lab_result_zero_document_is_absent() {
        for value in [json!(0), json!(false), json!(""), json!(0.0)] {
            let rec = record(json!({"labTestResultDocumentFileId": value}));
            assert_eq!(LabResult::from_record(&rec).document_file_id, None);
        }

        let rec = record(json!({"labTestResultDocumentFileId": "0"}));
        assert_eq!(
            LabResult::from_record(&rec).document_file_id,
            Some("0".to_string())
        );
    }
}
