//! Product gRPC service implementation.
//!
//! Transport-facing CRUD over products.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────┬──────────────────────────┬──────────────────────────────┐
//! │ RPC         │ storage error            │ other outcomes               │
//! ├─────────────┼──────────────────────────┼──────────────────────────────┤
//! │ Create      │ INVALID_ARGUMENT         │                              │
//! │ Get         │ INTERNAL                 │ NOT_FOUND on missing id      │
//! │ List        │ INTERNAL                 │ empty list is OK             │
//! │ ListByUser  │ INTERNAL                 │ empty list is OK             │
//! │ Update      │ INTERNAL                 │ owner mismatch is a no-op OK │
//! │ Delete      │ INTERNAL                 │ missing id is a no-op OK     │
//! └─────────────┴──────────────────────────┴──────────────────────────────┘
//! ```
//! A malformed `id` or `user_id` is INVALID_ARGUMENT on every RPC and never
//! reaches the catalog.

use std::sync::Arc;

use product_core::validation::parse_id;
use product_core::{NewProduct, Product};
use tonic::{Request, Response, Status};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::config::DeletePolicy;
use crate::error::ApiError;
use crate::proto::{
    product_service_server::ProductService, CreateRequest, DeleteRequest, DeleteResponse,
    GetRequest, ListByUserRequest, ListRequest, ListResponse, Product as ProtoProduct,
};
use crate::AppState;

/// Product service implementation.
pub struct ProductServiceImpl {
    catalog: ProductCatalog,
    delete_policy: DeletePolicy,
}

impl ProductServiceImpl {
    /// Create a new product service.
    pub fn new(state: Arc<AppState>) -> Self {
        ProductServiceImpl {
            catalog: ProductCatalog::new(state.store.clone()),
            delete_policy: state.config.delete_policy,
        }
    }
}

/// Parses a wire identifier, logging the rejected value.
fn parse_wire_id(field: &str, raw: &str) -> Result<Uuid, ApiError> {
    parse_id(field, raw).map_err(|e| {
        warn!(field = e.field(), value = %raw, error = %e, "Rejected malformed identifier");
        ApiError::from(e)
    })
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<ProtoProduct>, Status> {
        let req = request.into_inner();
        let user_id = parse_wire_id("user_id", &req.user_id)?;

        let new_product = NewProduct {
            user_id,
            name: req.name,
            description: req.description,
            price: req.price,
        };

        let product = self.catalog.create(&new_product).await.map_err(|e| {
            error!(error = %e, user_id = %user_id, "Failed to create product");
            ApiError::InvalidRequest("failed to create product".to_string())
        })?;

        info!(id = %product.id, user_id = %user_id, "Created product");
        Ok(Response::new(product.into()))
    }

    async fn get(&self, request: Request<GetRequest>) -> Result<Response<ProtoProduct>, Status> {
        let req = request.into_inner();
        let id = parse_wire_id("id", &req.id)?;

        let product = self.catalog.get(id).await.map_err(|e| {
            if e.is_not_found() {
                debug!(id = %id, "Product not found");
                ApiError::NotFound("product not found".to_string())
            } else {
                error!(error = %e, id = %id, "Failed to get product");
                ApiError::Internal("failed to get product".to_string())
            }
        })?;

        Ok(Response::new(product.into()))
    }

    async fn list(&self, _request: Request<ListRequest>) -> Result<Response<ListResponse>, Status> {
        let products = self.catalog.list().await.map_err(|e| {
            error!(error = %e, "Failed to list products");
            ApiError::Internal("failed to list products".to_string())
        })?;

        Ok(Response::new(ListResponse::from(products)))
    }

    async fn list_by_user(
        &self,
        request: Request<ListByUserRequest>,
    ) -> Result<Response<ListResponse>, Status> {
        let req = request.into_inner();
        let user_id = parse_wire_id("user_id", &req.user_id)?;

        let products = self.catalog.list_by_user(user_id).await.map_err(|e| {
            error!(error = %e, user_id = %user_id, "Failed to list products by user");
            ApiError::Internal("failed to list products by user".to_string())
        })?;

        Ok(Response::new(ListResponse::from(products)))
    }

    /// Echoes the request on success; the stored row is not re-read.
    async fn update(
        &self,
        request: Request<ProtoProduct>,
    ) -> Result<Response<ProtoProduct>, Status> {
        let wire = request.into_inner();
        let id = parse_wire_id("id", &wire.id)?;
        let user_id = parse_wire_id("user_id", &wire.user_id)?;

        let product = Product {
            id,
            user_id,
            name: wire.name.clone(),
            description: wire.description.clone(),
            price: wire.price,
        };

        let updated = self.catalog.update(&product).await.map_err(|e| {
            error!(error = %e, id = %id, "Failed to update product");
            ApiError::Internal("failed to update product".to_string())
        })?;

        if updated == 0 {
            debug!(id = %id, user_id = %user_id, "Update matched no product");
        }

        Ok(Response::new(wire))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();
        let id = parse_wire_id("id", &req.id)?;

        let result = match self.delete_policy {
            DeletePolicy::Unchecked => self.catalog.delete(id).await,
            DeletePolicy::OwnerChecked => {
                let user_id = parse_wire_id("user_id", &req.user_id)?;
                self.catalog.delete_owned(id, user_id).await
            }
        };

        let deleted = result.map_err(|e| {
            error!(error = %e, id = %id, "Failed to delete product");
            ApiError::Internal("failed to delete product".to_string())
        })?;

        if deleted == 0 {
            debug!(id = %id, "Delete matched no product");
        }

        Ok(Response::new(DeleteResponse {}))
    }
}
