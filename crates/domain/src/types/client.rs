//! Client (customer) types

use serde::{Deserialize, Serialize};

/// Customer record scoped to the company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Sequential integer id, `max(existing) + 1`, starting at 1
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// National id ("cedula"), e.g. `V-12345678`
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Client fields as captured by the form or a bulk-import row, before an id
/// is assigned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDraft {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Partial update applied to a client; unset fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Supported bulk-import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Resolve an import format from a file extension.
    ///
    /// `.xls`/`.xlsx` are recognised but rejected with a conversion hint;
    /// anything else unknown gets a generic unsupported-format error.
    pub fn from_extension(ext: &str) -> crate::Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xls" | "xlsx" => Err(crate::CobrixError::UnsupportedFormat(
                "Excel files are not supported; export the sheet as CSV and import that instead"
                    .into(),
            )),
            other => Err(crate::CobrixError::UnsupportedFormat(format!(
                "unsupported import format: .{other}"
            ))),
        }
    }
}
