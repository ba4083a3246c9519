//! Customer use-case service.
//!
//! # Responsibility
//! - Provide create/update/remove entry points for the console front end.
//! - Delegate id assignment to the repository's assign-and-return path.
//!
//! # Invariants
//! - `update` never changes a customer id.
//! - Updating or removing an unknown id is a `WriteOutcome::Missing`, not an error.

use crate::model::customer::{Customer, NewCustomer};
use crate::model::record::RecordId;
use crate::repo::record_repo::{RepoResult, Repository, WriteOutcome};
use log::debug;

/// Customer service facade over repository implementations.
pub struct CustomerService<R: Repository<Customer>> {
    repo: R,
}

impl<R: Repository<Customer>> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all customers in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<Customer>> {
        self.repo.get_all()
    }

    /// Gets the first customer with `id`, if any.
    pub fn get_by_id(&self, id: RecordId) -> RepoResult<Option<Customer>> {
        self.repo.get_by_id(id)
    }

    /// Creates a customer with a freshly assigned id and returns it.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> RepoResult<Customer> {
        let customer = self.repo.add_new(NewCustomer::new(name, email))?;
        debug!(
            "event=customer_create module=service status=ok id={}",
            customer.id
        );
        Ok(customer)
    }

    /// Overwrites name and email of the customer with `id`.
    pub fn update(
        &mut self,
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> RepoResult<WriteOutcome> {
        let outcome = self.repo.update(Customer::new(id, name, email))?;
        debug!("event=customer_update module=service outcome={outcome:?} id={id}");
        Ok(outcome)
    }

    /// Removes the first customer with `id`.
    pub fn remove(&mut self, id: RecordId) -> RepoResult<WriteOutcome> {
        let outcome = self.repo.delete(id)?;
        debug!("event=customer_remove module=service outcome={outcome:?} id={id}");
        Ok(outcome)
    }

    /// Returns the underlying repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
