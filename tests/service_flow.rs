//! End-to-end service flow over the real SeaORM-backed store.

use std::sync::Arc;

use roster::storage::Storage;
use roster::{EmployeeFilter, EmployeeModel, EmployeeService};

fn new_model(name: &str, email_id: &str) -> EmployeeModel {
    EmployeeModel {
        id: 0,
        name: name.to_string(),
        email_id: email_id.to_string(),
    }
}

async fn seeded_service() -> EmployeeService {
    let storage = Storage::in_memory().await.expect("in-memory storage");
    let service = EmployeeService::new(Arc::new(storage.employees()));

    let affected = service
        .add_employees(vec![
            new_model("test1", "test1@gmail.com"),
            new_model("test2", "test2@gmail.com"),
        ])
        .await
        .unwrap();
    assert_eq!(affected, 2);

    service
}

#[tokio::test]
async fn seeded_store_serves_reads_in_mapped_form() {
    let service = seeded_service().await;

    let all = service.get_all_employees().await.unwrap();
    assert_eq!(all.len(), 2);

    let first = service.get_employee_by_id(1).await.unwrap().unwrap();
    assert_eq!(
        first,
        EmployeeModel {
            id: 1,
            name: "test1".to_string(),
            email_id: "test1@gmail.com".to_string(),
        }
    );

    let filtered = service.get_employees(EmployeeFilter::Id(1)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert!(filtered.iter().all(|m| m.id == 1));
}

#[tokio::test]
async fn writes_round_trip_through_the_service() {
    let service = seeded_service().await;

    let affected = service
        .update_employee(EmployeeModel {
            id: 2,
            name: "test2-renamed".to_string(),
            email_id: "test2@gmail.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let renamed = service
        .single_employee(EmployeeFilter::EmailId("test2@gmail.com".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "test2-renamed");

    assert_eq!(service.remove_employee_by_id(1).await.unwrap(), 1);
    assert!(service.get_employee_by_id(1).await.unwrap().is_none());

    let remaining = service.get_all_employees().await.unwrap();
    assert_eq!(remaining.len(), 1);

    assert_eq!(service.remove_employees(remaining).await.unwrap(), 1);
    assert!(service.get_all_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn first_employee_through_service() {
    let service = seeded_service().await;

    let first = service
        .first_employee(EmployeeFilter::NameContains("test".to_string()))
        .await
        .unwrap();
    assert!(first.is_some());
}
