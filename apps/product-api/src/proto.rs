//! Generated gRPC code for the product service.
//!
//! This module includes the Rust code generated from `proto/product_service.proto`,
//! plus conversions between wire messages and domain types.
//!
//! ## Services Available
//! - `ProductServiceServer` / `ProductServiceClient` - Product CRUD
//! - `HealthServiceServer` / `HealthServiceClient` - Health checks

tonic::include_proto!("product.v1");

impl From<product_core::Product> for Product {
    fn from(product: product_core::Product) -> Self {
        Product {
            id: product.id.to_string(),
            user_id: product.user_id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

impl From<Vec<product_core::Product>> for ListResponse {
    fn from(products: Vec<product_core::Product>) -> Self {
        ListResponse {
            products: products.into_iter().map(Product::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::widget;
    use uuid::Uuid;

    #[test]
    fn test_list_response_keeps_order_and_fields() {
        let first = widget().with_id(Uuid::nil());
        let second = widget().with_id(Uuid::from_u128(2));

        let response = ListResponse::from(vec![first.clone(), second.clone()]);

        assert_eq!(response.products, vec![Product::from(first), Product::from(second)]);
        assert_eq!(response.products[0].id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(response.products[1].user_id, "11111111-1111-1111-1111-111111111111");
        assert_eq!(response.products[1].price, 100);
    }

    #[test]
    fn test_empty_list_response() {
        assert!(ListResponse::from(Vec::new()).products.is_empty());
    }
}
