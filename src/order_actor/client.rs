use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{Order, OrderId, Quantity};
use crate::order_service::OrderError;
use super::OrderRequest;

/// Generates a client method that sends a request and awaits its oneshot response.
/// Channel failures become `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to a running [`super::OrderActor`].
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn create_order(product: String, quantity: Quantity) -> Order as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn update_order(order_id: OrderId, new_quantity: Quantity) -> bool as OrderRequest::UpdateOrder, Error = OrderError);
client_method!(OrderClient => fn remove_order(order_id: OrderId) -> bool as OrderRequest::RemoveOrder, Error = OrderError);
client_method!(OrderClient => fn get_orders() -> Vec<Order> as OrderRequest::GetOrders, Error = OrderError);
client_method!(OrderClient => fn get_order(order_id: OrderId) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
