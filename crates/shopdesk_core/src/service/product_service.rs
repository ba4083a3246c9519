//! Product use-case service.
//!
//! Pass-through over the repository; only `register_product` adds behavior
//! by delegating id assignment to the repository.

use crate::model::product::{NewProduct, Price, Product};
use crate::model::record::RecordId;
use crate::repo::record_repo::{RepoResult, Repository, WriteOutcome};

/// Product service facade over repository implementations.
pub struct ProductService<R: Repository<Product>> {
    repo: R,
}

impl<R: Repository<Product>> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_products(&self) -> RepoResult<Vec<Product>> {
        self.repo.get_all()
    }

    pub fn get_product_by_id(&self, id: RecordId) -> RepoResult<Option<Product>> {
        self.repo.get_by_id(id)
    }

    /// Stores a product with its caller-supplied id.
    pub fn create_product(&mut self, product: Product) -> RepoResult<()> {
        self.repo.add(product)
    }

    /// Stores a new product under a repository-assigned id.
    pub fn register_product(
        &mut self,
        name: impl Into<String>,
        price: Price,
    ) -> RepoResult<Product> {
        self.repo.add_new(NewProduct::new(name, price))
    }

    pub fn update_product(&mut self, product: Product) -> RepoResult<WriteOutcome> {
        self.repo.update(product)
    }

    pub fn remove_product(&mut self, id: RecordId) -> RepoResult<WriteOutcome> {
        self.repo.delete(id)
    }

    /// Returns the underlying repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
