//! Identifier kinds and placeholder tokens

use serde::{Deserialize, Serialize};

/// Identifier kind enumeration covering Indian identifier formats plus the
/// coarse named-entity categories emitted by the entity recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentifierKind {
    /// Permanent Account Number (5 letters, 4 digits, 1 letter)
    Pan,
    /// Aadhar number (leading digit 2-9, three space-separated groups of 4)
    Aadhar,
    /// Indian passport number
    IndianPassport,
    /// Driving licence number (state code, RTO code, year, serial)
    DrivingLicense,
    /// UPI virtual payment address
    UpiId,
    /// Bank account number (bare 9-18 digit run; over-matches by design of
    /// the inherited pattern)
    IndianBankAccount,
    /// IFSC branch code (4 letters, '0', 6 alphanumerics)
    IfscCode,
    /// Indian mobile number with optional +91/0 prefix
    IndianPhoneNumber,
    /// Email address
    Email,
    /// Person name (entity recognizer)
    Person,
    /// Organization name (entity recognizer)
    Organization,
    /// Geographic location (entity recognizer)
    Location,
}

impl IdentifierKind {
    /// Registry / report label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pan => "PAN",
            Self::Aadhar => "AADHAR",
            Self::IndianPassport => "INDIAN_PASSPORT",
            Self::DrivingLicense => "DRIVING_LICENSE",
            Self::UpiId => "UPI_ID",
            Self::IndianBankAccount => "INDIAN_BANK_ACCOUNT",
            Self::IfscCode => "IFSC_CODE",
            Self::IndianPhoneNumber => "INDIAN_PHONE_NUMBER",
            Self::Email => "EMAIL",
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Location => "LOCATION",
        }
    }

    /// Placeholder token substituted for a masked span of this kind
    pub fn placeholder(&self) -> &'static str {
        placeholder_for(self.label())
    }

    /// Parse a registry label back into a kind
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "PAN" => Some(Self::Pan),
            "AADHAR" => Some(Self::Aadhar),
            "INDIAN_PASSPORT" | "PASSPORT" => Some(Self::IndianPassport),
            "DRIVING_LICENSE" | "DL" => Some(Self::DrivingLicense),
            "UPI_ID" | "UPI" => Some(Self::UpiId),
            "INDIAN_BANK_ACCOUNT" | "BANK_ACCOUNT" => Some(Self::IndianBankAccount),
            "IFSC_CODE" | "IFSC" => Some(Self::IfscCode),
            "INDIAN_PHONE_NUMBER" | "PHONE" => Some(Self::IndianPhoneNumber),
            "EMAIL" => Some(Self::Email),
            "PERSON" => Some(Self::Person),
            "ORGANIZATION" => Some(Self::Organization),
            "LOCATION" => Some(Self::Location),
            _ => None,
        }
    }

    /// Check if this kind is produced by the regex scanner
    pub fn is_pattern_kind(&self) -> bool {
        !self.is_entity_kind()
    }

    /// Check if this kind is produced by the entity recognizer
    pub fn is_entity_kind(&self) -> bool {
        matches!(self, Self::Person | Self::Organization | Self::Location)
    }

    /// Precedence used to break ties between equal-length overlapping spans.
    ///
    /// Lower wins. Structurally specific formats outrank loose heuristics;
    /// the bare digit-run bank-account pattern ranks last among pattern
    /// kinds, and entity kinds rank below all pattern kinds.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Pan => 0,
            Self::IfscCode => 1,
            Self::Aadhar => 2,
            Self::IndianPassport => 3,
            Self::DrivingLicense => 4,
            Self::Email => 5,
            Self::UpiId => 6,
            Self::IndianPhoneNumber => 7,
            Self::IndianBankAccount => 8,
            Self::Person => 9,
            Self::Organization => 10,
            Self::Location => 11,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Placeholder token for a kind label.
///
/// Lookup is by label string so that callers holding labels from an external
/// source get the `[MASKED]` fallback for anything unrecognized.
pub fn placeholder_for(label: &str) -> &'static str {
    match label {
        "PAN" => "[PAN_NUMBER]",
        "AADHAR" => "[AADHAR_NUMBER]",
        "INDIAN_PASSPORT" => "[PASSPORT_NUMBER]",
        "DRIVING_LICENSE" => "[DL_NUMBER]",
        "UPI_ID" => "[UPI_ID]",
        "INDIAN_BANK_ACCOUNT" => "[BANK_ACCOUNT]",
        "IFSC_CODE" => "[IFSC_CODE]",
        "INDIAN_PHONE_NUMBER" => "[PHONE_NUMBER]",
        "EMAIL" => "[EMAIL_ADDRESS]",
        "PERSON" => "[PERSON_NAME]",
        "ORGANIZATION" => "[ORGANIZATION]",
        "LOCATION" => "[LOCATION]",
        _ => "[MASKED]",
    }
}
