mod common;

use shopdesk_core::{
    Customer, CustomerService, InMemoryRepository, NewCustomer, Repository, WriteOutcome,
};

#[test]
fn scenario_add_update_delete() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_customer_scenario(&mut repo);
}

#[test]
fn get_all_preserves_insertion_order_and_length() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_insertion_order_preserved(&mut repo);
}

#[test]
fn empty_repository_returns_absent() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_empty_lookups_are_absent(&mut repo);
}

#[test]
fn add_then_get_returns_equal_fields() {
    let mut repo = InMemoryRepository::<Customer>::new();
    let record = Customer::new(12, "Grace", "grace@example.com");
    repo.add(record.clone()).unwrap();

    assert_eq!(repo.get_by_id(12).unwrap(), Some(record));
}

#[test]
fn missing_update_and_delete_are_noops() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_missing_writes_leave_collection_unchanged(&mut repo);
}

#[test]
fn duplicate_ids_resolve_to_first_entry() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_duplicates_resolve_to_first_match(&mut repo);
}

#[test]
fn update_never_changes_id() {
    let mut repo = InMemoryRepository::<Customer>::new();
    common::assert_update_keeps_id(&mut repo);
}

#[test]
fn delete_reduces_length_by_one() {
    let mut repo = InMemoryRepository::<Customer>::new();
    repo.add(Customer::new(1, "A", "a@x.com")).unwrap();
    repo.add(Customer::new(2, "B", "b@x.com")).unwrap();
    repo.add(Customer::new(3, "C", "c@x.com")).unwrap();

    repo.delete(2).unwrap();
    assert_eq!(repo.len(), 2);
    assert!(repo.records().iter().all(|c| c.id != 2));
}

#[test]
fn add_new_assigns_increasing_ids() {
    let mut repo = InMemoryRepository::<Customer>::new();
    let first = repo.add_new(NewCustomer::new("A", "a@x.com")).unwrap();
    let second = repo.add_new(NewCustomer::new("B", "b@x.com")).unwrap();

    assert!(second.id > first.id);
    assert_eq!(repo.get_by_id(second.id).unwrap(), Some(second));
}

#[test]
fn service_create_assigns_unique_ids() {
    let mut service = CustomerService::new(InMemoryRepository::<Customer>::new());
    let mut ids = Vec::new();
    for index in 0..50 {
        let created = service
            .create(format!("customer {index}"), "c@example.com")
            .unwrap();
        ids.push(created.id);
    }

    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(service.get_all().unwrap().len(), 50);
}

#[test]
fn service_update_overwrites_fields_of_existing_customer() {
    let mut service = CustomerService::new(InMemoryRepository::<Customer>::new());
    let created = service.create("Ann", "ann@example.com").unwrap();

    let outcome = service
        .update(created.id, "Annie", "annie@example.com")
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Applied);

    let loaded = service.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Annie");
    assert_eq!(loaded.email, "annie@example.com");
}

#[test]
fn service_propagates_missing_without_error() {
    let mut service = CustomerService::new(InMemoryRepository::<Customer>::new());
    service.create("Ann", "ann@example.com").unwrap();

    assert_eq!(
        service.update(404, "Ghost", "ghost@example.com").unwrap(),
        WriteOutcome::Missing
    );
    assert_eq!(service.remove(404).unwrap(), WriteOutcome::Missing);

    let repo = service.into_inner();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.records()[0].name, "Ann");
}

#[test]
fn boxed_repository_behaves_like_inner() {
    let mut repo: Box<dyn Repository<Customer>> = Box::new(InMemoryRepository::<Customer>::new());
    common::assert_customer_scenario(&mut repo);
}
