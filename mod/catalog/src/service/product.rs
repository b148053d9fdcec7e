use catalog_core::{ListParams, ListResult, ServiceError, new_id, now_rfc3339};
use catalog_sql::Value;

use crate::model::{CreateProduct, Product};
use super::CatalogService;

impl CatalogService {
    pub fn create_product(&self, input: CreateProduct) -> Result<Product, ServiceError> {
        let now = now_rfc3339();

        let record = Product {
            id: new_id(),
            sku: input.sku.clone(),
            name: input.name.clone(),
            description: input.description,
            price: input.price,
            tax_rate: input.tax_rate,
            created_at: Some(now.clone()),
            updated_at: Some(now.clone()),
        };

        self.insert_record(
            "products",
            &record.id,
            &record,
            &[
                ("sku", Value::Text(input.sku)),
                ("name", Value::Text(input.name)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(record)
    }

    pub fn get_product(&self, id: &str) -> Result<Product, ServiceError> {
        self.get_record("products", id)
    }

    pub fn list_products(&self, params: &ListParams) -> Result<ListResult<Product>, ServiceError> {
        let limit = params.limit.min(500);
        self.list_records("products", limit, params.offset)
    }

    pub fn update_product(
        &self,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<Product, ServiceError> {
        let current: Product = self.get_record("products", id)?;
        let updated: Product = Self::apply_patch(&current, patch)?;

        self.update_record(
            "products",
            id,
            &updated,
            &[
                ("sku", Value::Text(updated.sku.clone())),
                ("name", Value::Text(updated.name.clone())),
                ("updated_at", Value::Text(updated.updated_at.clone().unwrap_or_default())),
            ],
        )?;

        Ok(updated)
    }

    pub fn delete_product(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("products", id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_sql::SqliteStore;

    use super::*;

    fn test_service() -> CatalogService {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        CatalogService::new(sql).unwrap()
    }

    fn kettle() -> CreateProduct {
        CreateProduct {
            sku: "SKU-001".to_string(),
            name: "Kettle".to_string(),
            description: "Stainless steel kettle".to_string(),
            price: 39.9,
            tax_rate: 0.19,
        }
    }

    #[test]
    fn product_crud() {
        let svc = test_service();

        // Create
        let product = svc.create_product(kettle()).unwrap();
        assert_eq!(product.sku, "SKU-001");
        assert_eq!(product.id.len(), 32);

        // Get
        let fetched = svc.get_product(&product.id).unwrap();
        assert_eq!(fetched, product);

        // Update
        let updated = svc
            .update_product(&product.id, serde_json::json!({"price": 44.9}))
            .unwrap();
        assert_eq!(updated.price, 44.9);
        assert_eq!(updated.sku, "SKU-001");

        // List
        let list = svc.list_products(&ListParams::default()).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.items[0].price, 44.9);

        // Delete
        svc.delete_product(&product.id).unwrap();
        assert!(svc.get_product(&product.id).is_err());
        assert!(svc.delete_product(&product.id).is_err());
    }

    #[test]
    fn duplicate_sku_conflicts() {
        let svc = test_service();
        svc.create_product(kettle()).unwrap();

        let err = svc.create_product(kettle()).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn patch_cannot_move_id_or_created_at() {
        let svc = test_service();
        let product = svc.create_product(kettle()).unwrap();

        let updated = svc
            .update_product(
                &product.id,
                serde_json::json!({"id": "hijacked", "createdAt": "1970-01-01T00:00:00+00:00"}),
            )
            .unwrap();
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
    }

    #[test]
    fn list_paginates() {
        let svc = test_service();
        for i in 0..7 {
            svc.create_product(CreateProduct {
                sku: format!("SKU-{:03}", i),
                name: format!("Item {}", i),
                description: "test item".to_string(),
                price: 1.0 + i as f64,
                tax_rate: 0.19,
            })
            .unwrap();
        }

        let page = svc
            .list_products(&ListParams { limit: 3, offset: 0 })
            .unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 7);

        let rest = svc
            .list_products(&ListParams { limit: 10, offset: 5 })
            .unwrap();
        assert_eq!(rest.items.len(), 2);
    }
}
