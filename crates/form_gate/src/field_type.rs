use serde::{Serialize, Serializer};

/// Generic message for fields whose marker is not one of the known types.
pub const FALLBACK_MESSAGE: &str = "Invalid input";

/// Kind of a gated field, read from its marker attribute (`<input input="email">`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Name,
    Email,
    Company,
    Phone,
    Location,
    Link,
    Details,
    /// Marker present but unrecognised; validated as "non-empty".
    Other(String),
}

impl FieldType {
    /// Parse a marker value. An empty marker means the element is not a gated field.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let field_type = match marker {
            "" => return None,
            "name" => FieldType::Name,
            "email" => FieldType::Email,
            "company" => FieldType::Company,
            "phone" => FieldType::Phone,
            "location" => FieldType::Location,
            "link" => FieldType::Link,
            "details" => FieldType::Details,
            other => FieldType::Other(other.to_string()),
        };
        Some(field_type)
    }

    pub fn code(&self) -> &str {
        match self {
            FieldType::Name => "name",
            FieldType::Email => "email",
            FieldType::Company => "company",
            FieldType::Phone => "phone",
            FieldType::Location => "location",
            FieldType::Link => "link",
            FieldType::Details => "details",
            FieldType::Other(marker) => marker,
        }
    }

    /// Message shown under the field when its value is rejected.
    pub fn error_message(&self) -> &'static str {
        match self {
            FieldType::Name => "Name is required",
            FieldType::Email => "Invalid email format",
            FieldType::Company => "Company name is required",
            FieldType::Phone => "Invalid phone number format",
            FieldType::Location => "Location is required",
            FieldType::Link => "Invalid link format",
            FieldType::Details => "Project details are required",
            FieldType::Other(_) => FALLBACK_MESSAGE,
        }
    }

    /// All recognised field types.
    pub fn all() -> Vec<FieldType> {
        vec![
            FieldType::Name,
            FieldType::Email,
            FieldType::Company,
            FieldType::Phone,
            FieldType::Location,
            FieldType::Link,
            FieldType::Details,
        ]
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
