//! Bulk-import parsing for client records
//!
//! CSV files must carry a header row naming the six columns (any casing,
//! any order); rows are split on commas. JSON files may hold a single
//! object or an array of objects and must carry all six keys. Records that
//! fail the acceptance rule are dropped without individual reporting.

use std::collections::HashMap;

use cobrix_domain::constants::IMPORT_CSV_COLUMNS;
use cobrix_domain::{ClientDraft, CobrixError, ImportFormat, Result};
use serde_json::Value;

/// Parse import file content into accepted client drafts.
///
/// An empty accepted set is an error ("no valid data found").
pub fn parse(content: &str, format: ImportFormat) -> Result<Vec<ClientDraft>> {
    let drafts = match format {
        ImportFormat::Csv => parse_csv(content),
        ImportFormat::Json => parse_json(content)?,
    };

    if drafts.is_empty() {
        return Err(CobrixError::Validation(
            "no valid data found in the imported file".into(),
        ));
    }
    Ok(drafts)
}

/// Parse CSV content: header row first, then one record per non-blank line.
///
/// A record is accepted only when both first name and email are non-empty
/// after column mapping.
fn parse_csv(content: &str) -> Vec<ClientDraft> {
    let mut lines = content.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };

    // Map header column names (case-insensitive) to positions.
    let positions: HashMap<String, usize> = header
        .split(',')
        .enumerate()
        .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
        .collect();

    let mut drafts = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let column = |name: &str| -> String {
            positions
                .get(name)
                .and_then(|idx| fields.get(*idx))
                .map(|v| (*v).to_string())
                .unwrap_or_default()
        };

        let draft = ClientDraft {
            first_name: column(IMPORT_CSV_COLUMNS[0]),
            last_name: column(IMPORT_CSV_COLUMNS[1]),
            national_id: column(IMPORT_CSV_COLUMNS[2]),
            email: column(IMPORT_CSV_COLUMNS[3]),
            phone: column(IMPORT_CSV_COLUMNS[4]),
            address: column(IMPORT_CSV_COLUMNS[5]),
        };

        if !draft.first_name.is_empty() && !draft.email.is_empty() {
            drafts.push(draft);
        }
    }
    drafts
}

/// Parse JSON content: a single object or an array of objects.
///
/// An object is accepted only when all six keys are present; values are not
/// otherwise validated.
fn parse_json(content: &str) -> Result<Vec<ClientDraft>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| CobrixError::Validation(format!("invalid JSON: {e}")))?;

    let objects: Vec<Value> = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => Vec::new(),
    };

    Ok(objects.iter().filter_map(object_to_draft).collect())
}

fn object_to_draft(value: &Value) -> Option<ClientDraft> {
    let object = value.as_object()?;
    let field = |key: &str| -> Option<String> {
        object.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };

    Some(ClientDraft {
        first_name: field("firstName")?,
        last_name: field("lastName")?,
        national_id: field("cedula")?,
        email: field("email")?,
        phone: field("phone")?,
        address: field("address")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "firstname,lastname,cedula,email,phone,address";

    #[test]
    fn csv_single_row_is_accepted() {
        let content = format!("{HEADER}\nJuan,Perez,V-1,juan@x.com,555,Addr");
        let drafts = parse(&content, ImportFormat::Csv).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].first_name, "Juan");
        assert_eq!(drafts[0].email, "juan@x.com");
    }

    #[test]
    fn csv_header_is_case_insensitive_and_reorderable() {
        let content = "EMAIL,FirstName,LastName,Cedula,Phone,Address\n\
                       ana@x.com,Ana,Lopez,V-2,444,Calle 1";
        let drafts = parse(content, ImportFormat::Csv).unwrap();
        assert_eq!(drafts[0].first_name, "Ana");
        assert_eq!(drafts[0].email, "ana@x.com");
    }

    #[test]
    fn csv_rows_missing_first_name_or_email_are_dropped() {
        let content = format!(
            "{HEADER}\n,Perez,V-1,juan@x.com,555,Addr\nMaria,Diaz,V-3,,333,Av 2\nJose,Gil,V-4,jose@x.com,222,Av 3"
        );
        let drafts = parse(&content, ImportFormat::Csv).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].first_name, "Jose");
    }

    #[test]
    fn csv_blank_lines_are_skipped() {
        let content = format!("{HEADER}\n\nJuan,Perez,V-1,juan@x.com,555,Addr\n\n");
        let drafts = parse(&content, ImportFormat::Csv).unwrap();
        assert_eq!(drafts.len(), 1);
    }

    #[test]
    fn csv_with_no_accepted_rows_is_an_error() {
        let content = format!("{HEADER}\n,NoFirst,V-1,,555,Addr");
        let err = parse(&content, ImportFormat::Csv).unwrap_err();
        match err {
            CobrixError::Validation(msg) => assert!(msg.contains("no valid data")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn json_single_object_is_accepted() {
        let content = r#"{"firstName":"Juan","lastName":"Perez","cedula":"V-1",
                          "email":"juan@x.com","phone":"555","address":"Addr"}"#;
        let drafts = parse(content, ImportFormat::Json).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].last_name, "Perez");
    }

    #[test]
    fn json_array_accepts_only_complete_objects() {
        let content = r#"[
            {"firstName":"Juan","lastName":"Perez","cedula":"V-1",
             "email":"juan@x.com","phone":"555","address":"Addr"},
            {"firstName":"Incomplete","email":"missing@keys.com"}
        ]"#;
        let drafts = parse(content, ImportFormat::Json).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].first_name, "Juan");
    }

    #[test]
    fn json_invalid_content_is_a_validation_error() {
        let err = parse("{ not json", ImportFormat::Json).unwrap_err();
        assert!(matches!(err, CobrixError::Validation(_)));
    }
}
