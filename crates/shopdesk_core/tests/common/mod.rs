//! Repository behavior checks shared by the in-memory and SQLite suites.

#![allow(dead_code)]

use shopdesk_core::{Customer, Repository, WriteOutcome};

pub fn customer(id: i64, name: &str, email: &str) -> Customer {
    Customer::new(id, name, email)
}

/// Add 1 and 2, update 1, delete 2.
pub fn assert_customer_scenario<R: Repository<Customer>>(repo: &mut R) {
    repo.add(customer(1, "A", "a@x.com")).unwrap();
    repo.add(customer(2, "B", "b@x.com")).unwrap();
    assert_eq!(
        repo.get_all().unwrap(),
        vec![customer(1, "A", "a@x.com"), customer(2, "B", "b@x.com")]
    );

    let outcome = repo.update(customer(1, "A2", "a2@x.com")).unwrap();
    assert_eq!(outcome, WriteOutcome::Applied);
    assert_eq!(
        repo.get_by_id(1).unwrap(),
        Some(customer(1, "A2", "a2@x.com"))
    );

    assert_eq!(repo.delete(2).unwrap(), WriteOutcome::Applied);
    assert_eq!(repo.get_all().unwrap(), vec![customer(1, "A2", "a2@x.com")]);
}

pub fn assert_insertion_order_preserved<R: Repository<Customer>>(repo: &mut R) {
    let ids = [7, 3, 9, 1, 3];
    for (index, id) in ids.iter().enumerate() {
        repo.add(customer(*id, &format!("c{index}"), "c@x.com"))
            .unwrap();
    }

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), ids.len());
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["c0", "c1", "c2", "c3", "c4"]);
}

pub fn assert_empty_lookups_are_absent<R: Repository<Customer>>(repo: &mut R) {
    for id in [0, 1, -5, i64::MAX] {
        assert_eq!(repo.get_by_id(id).unwrap(), None);
    }
    assert!(repo.get_all().unwrap().is_empty());
}

pub fn assert_missing_writes_leave_collection_unchanged<R: Repository<Customer>>(repo: &mut R) {
    repo.add(customer(1, "A", "a@x.com")).unwrap();
    repo.add(customer(2, "B", "b@x.com")).unwrap();
    let before = repo.get_all().unwrap();

    assert_eq!(
        repo.update(customer(99, "Z", "z@x.com")).unwrap(),
        WriteOutcome::Missing
    );
    assert_eq!(repo.delete(99).unwrap(), WriteOutcome::Missing);

    assert_eq!(repo.get_all().unwrap(), before);
}

pub fn assert_duplicates_resolve_to_first_match<R: Repository<Customer>>(repo: &mut R) {
    repo.add(customer(5, "first", "1@x.com")).unwrap();
    repo.add(customer(6, "other", "o@x.com")).unwrap();
    repo.add(customer(5, "second", "2@x.com")).unwrap();

    assert_eq!(repo.get_by_id(5).unwrap().unwrap().name, "first");

    assert_eq!(repo.delete(5).unwrap(), WriteOutcome::Applied);
    let remaining = repo.get_all().unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(
        remaining,
        vec![customer(6, "other", "o@x.com"), customer(5, "second", "2@x.com")]
    );
    assert_eq!(repo.get_by_id(5).unwrap().unwrap().name, "second");
}

pub fn assert_update_keeps_id<R: Repository<Customer>>(repo: &mut R) {
    repo.add(customer(4, "before", "b@x.com")).unwrap();
    repo.update(customer(4, "after", "a@x.com")).unwrap();

    let stored = repo.get_by_id(4).unwrap().unwrap();
    assert_eq!(stored.id, 4);
    assert_eq!(stored.name, "after");
    assert_eq!(stored.email, "a@x.com");
}
