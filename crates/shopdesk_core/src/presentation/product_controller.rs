//! Direct-call product controller.

use crate::model::product::{Price, Product};
use crate::model::record::RecordId;
use crate::presentation::PresentationResult;
use crate::repo::record_repo::Repository;
use crate::service::product_service::ProductService;
use log::info;
use std::io::Write;

/// Name and price used by the one-shot demo sequence.
pub const DEMO_PRODUCT_NAME: &str = "Sample Product";
pub const DEMO_PRODUCT_PRICE: Price = Price::new(99, 99);

/// Controller rendering product operations as output lines.
pub struct ProductController<R: Repository<Product>, O: Write> {
    service: ProductService<R>,
    output: O,
}

impl<R: Repository<Product>, O: Write> ProductController<R, O> {
    pub fn new(service: ProductService<R>, output: O) -> Self {
        Self { service, output }
    }

    /// Writes one `{id}: {name} - ${price}` line per product.
    pub fn list_products(&mut self) -> PresentationResult<()> {
        for product in self.service.get_all_products()? {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    /// Registers a product under a repository-assigned id.
    pub fn add_product(&mut self, name: &str, price: Price) -> PresentationResult<Product> {
        let product = self.service.register_product(name, price)?;
        writeln!(self.output, "Product added successfully.")?;
        Ok(product)
    }

    /// Removes the first product with `id`; unknown ids are a silent no-op.
    pub fn delete_product(&mut self, id: RecordId) -> PresentationResult<()> {
        self.service.remove_product(id)?;
        writeln!(self.output, "Product with ID {id} removed.")?;
        Ok(())
    }

    /// Fixed start-up sequence: add the sample product, then list everything.
    pub fn run_demo(&mut self) -> PresentationResult<()> {
        info!("event=product_demo module=presentation status=start");
        self.add_product(DEMO_PRODUCT_NAME, DEMO_PRODUCT_PRICE)?;
        self.list_products()?;
        info!("event=product_demo module=presentation status=ok");
        Ok(())
    }

    pub fn into_parts(self) -> (ProductService<R>, O) {
        (self.service, self.output)
    }
}
