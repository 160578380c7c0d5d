//! gRPC server assembly.

use std::sync::Arc;

use tonic::transport::server::Router;
use tonic::transport::Server;

use crate::proto::{
    health_service_server::HealthServiceServer, product_service_server::ProductServiceServer,
};
use crate::services::{health_service::HealthServiceImpl, product_service::ProductServiceImpl};
use crate::AppState;

/// Builds the router carrying every service, ready to be served.
pub fn router(state: Arc<AppState>) -> Router {
    let config = &state.config;

    let product_service = ProductServiceServer::new(ProductServiceImpl::new(state.clone()))
        .max_decoding_message_size(config.max_message_size);
    let health_service = HealthServiceServer::new(HealthServiceImpl::new(state.clone()));

    Server::builder()
        .timeout(config.request_timeout)
        .add_service(product_service)
        .add_service(health_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeletePolicy;
    use crate::proto::{
        product_service_client::ProductServiceClient, CreateRequest, DeleteRequest, GetRequest,
        ListByUserRequest,
    };
    use crate::testing::{state_with, RecordingStore, ALICE};
    use tokio::net::TcpListener;
    use tokio_stream::wrappers::TcpListenerStream;
    use tonic::Code;

    #[tokio::test]
    async fn test_end_to_end_over_tcp() {
        let store = RecordingStore::new();
        let state = state_with(store.clone(), DeletePolicy::Unchecked);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(router(state).serve_with_incoming(TcpListenerStream::new(listener)));

        let mut client = ProductServiceClient::connect(format!("http://{}", addr))
            .await
            .unwrap();

        let created = client
            .create(CreateRequest {
                user_id: ALICE.to_string(),
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                price: 100,
            })
            .await
            .unwrap()
            .into_inner();

        let fetched = client
            .get(GetRequest { id: created.id.clone() })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(fetched, created);

        let mine = client
            .list_by_user(ListByUserRequest {
                user_id: ALICE.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(mine.products, vec![created.clone()]);

        client
            .delete(DeleteRequest {
                id: created.id.clone(),
                user_id: String::new(),
            })
            .await
            .unwrap();

        let status = client
            .get(GetRequest { id: created.id })
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);

        let status = client
            .get(GetRequest { id: "nope".to_string() })
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        server.abort();
    }
}
