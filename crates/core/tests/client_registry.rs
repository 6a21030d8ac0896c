//! Client registry integration tests: id assignment and bulk import.

mod support;

use std::sync::Arc;

use cobrix_core::ClientService;
use cobrix_domain::{ClientDraft, ClientUpdate, CobrixError};
use support::repositories::MockClientRepository;

fn draft(first: &str, email: &str) -> ClientDraft {
    ClientDraft {
        first_name: first.into(),
        last_name: "Perez".into(),
        national_id: "V-123".into(),
        email: email.into(),
        phone: "555".into(),
        address: "Av. Principal".into(),
    }
}

fn service() -> ClientService {
    ClientService::new(Arc::new(MockClientRepository::new()))
}

#[tokio::test]
async fn ids_are_sequential_from_one() {
    let service = service();
    let a = service.add_client(draft("Juan", "j@x.com")).await.unwrap();
    let b = service.add_client(draft("Ana", "a@x.com")).await.unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
}

#[tokio::test]
async fn deleting_the_max_id_does_not_reuse_it_while_others_remain() {
    let service = service();
    service.add_client(draft("Juan", "j@x.com")).await.unwrap();
    let b = service.add_client(draft("Ana", "a@x.com")).await.unwrap();
    service.delete_client(b.id).await.unwrap();

    // max(existing) + 1 with client 1 still present
    let c = service.add_client(draft("Luis", "l@x.com")).await.unwrap();
    assert_eq!(c.id, 2);
}

#[tokio::test]
async fn ids_restart_at_one_only_when_registry_is_empty() {
    let service = service();
    let a = service.add_client(draft("Juan", "j@x.com")).await.unwrap();
    let b = service.add_client(draft("Ana", "a@x.com")).await.unwrap();
    service.delete_client(a.id).await.unwrap();
    service.delete_client(b.id).await.unwrap();

    let fresh = service.add_client(draft("Luis", "l@x.com")).await.unwrap();
    assert_eq!(fresh.id, 1);
}

#[tokio::test]
async fn creation_requires_name_contact_and_address_fields() {
    let service = service();

    let mut missing_phone = draft("Juan", "j@x.com");
    missing_phone.phone = String::new();
    let err = service.add_client(missing_phone).await.unwrap_err();
    match err {
        CobrixError::Validation(msg) => assert!(msg.contains("phone")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut missing_rest = draft("Ana", "a@x.com");
    missing_rest.last_name = "  ".into();
    missing_rest.address = String::new();
    let err = service.add_client(missing_rest).await.unwrap_err();
    match err {
        CobrixError::Validation(msg) => {
            assert!(msg.contains("last name"));
            assert!(msg.contains("address"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // The national id stays optional.
    let mut no_cedula = draft("Luis", "l@x.com");
    no_cedula.national_id = String::new();
    service.add_client(no_cedula).await.unwrap();
}

#[tokio::test]
async fn import_rows_missing_required_fields_drop_without_aborting() {
    let service = service();
    // Second row parses (first name and email present) but has no address,
    // so the add step drops it while the rest of the batch lands.
    let content = "firstname,lastname,cedula,email,phone,address\n\
                   Juan,Perez,V-1,juan@x.com,555,Addr\n\
                   Ana,Lopez,V-2,ana@x.com,444,\n\
                   Maria,Diaz,V-3,maria@x.com,333,Addr";

    let report = service.bulk_import("clientes.csv", content).await.unwrap();
    assert_eq!(report.parsed, 3);
    assert_eq!(report.imported, 2);

    let clients = service.list_clients().await.unwrap();
    assert_eq!(clients.len(), 2);
    assert!(clients.iter().all(|c| c.first_name != "Ana"));
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let service = service();
    let client = service.add_client(draft("Juan", "j@x.com")).await.unwrap();

    let updated = service
        .update_client(client.id, ClientUpdate { phone: Some("0414".into()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(updated.phone, "0414");
    assert_eq!(updated.first_name, "Juan");
}

#[tokio::test]
async fn update_and_delete_of_missing_clients_report_not_found() {
    let service = service();
    let err = service.update_client(99, ClientUpdate::default()).await.unwrap_err();
    assert!(matches!(err, CobrixError::NotFound(_)));
    let err = service.delete_client(99).await.unwrap_err();
    assert!(matches!(err, CobrixError::NotFound(_)));
}

#[tokio::test]
async fn csv_bulk_import_adds_accepted_rows() {
    let service = service();
    let content = "firstname,lastname,cedula,email,phone,address\n\
                   Juan,Perez,V-1,juan@x.com,555,Addr\n\
                   ,SinNombre,V-2,skip@x.com,444,Addr\n\
                   Maria,Diaz,V-3,maria@x.com,333,Addr";

    let report = service.bulk_import("clientes.csv", content).await.unwrap();
    assert_eq!(report.parsed, 2);
    assert_eq!(report.imported, 2);

    let clients = service.list_clients().await.unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].first_name, "Juan");
    assert_eq!(clients[0].id, 1);
}

#[tokio::test]
async fn excel_files_are_rejected_with_conversion_hint() {
    let service = service();
    let err = service.bulk_import("clientes.xlsx", "whatever").await.unwrap_err();
    match err {
        CobrixError::UnsupportedFormat(msg) => assert!(msg.contains("CSV")),
        other => panic!("expected unsupported format, got {other:?}"),
    }
}

#[tokio::test]
async fn json_bulk_import_accepts_object_or_array() {
    let service = service();
    let single = r#"{"firstName":"Solo","lastName":"Uno","cedula":"V-9",
                     "email":"solo@x.com","phone":"111","address":"Calle 9"}"#;
    let report = service.bulk_import("uno.json", single).await.unwrap();
    assert_eq!(report.imported, 1);

    let array = r#"[{"firstName":"Dos","lastName":"Gil","cedula":"V-8",
                     "email":"dos@x.com","phone":"222","address":"Calle 8"}]"#;
    let report = service.bulk_import("varios.json", array).await.unwrap();
    assert_eq!(report.imported, 1);

    assert_eq!(service.list_clients().await.unwrap().len(), 2);
}

#[tokio::test]
async fn import_with_no_valid_rows_is_an_error() {
    let service = service();
    let content = "firstname,lastname,cedula,email,phone,address\n,X,V-1,,1,A";
    let err = service.bulk_import("vacio.csv", content).await.unwrap_err();
    assert!(matches!(err, CobrixError::Validation(_)));
}
