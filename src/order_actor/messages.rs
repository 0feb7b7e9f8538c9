use tokio::sync::oneshot;
use crate::domain::{Order, OrderId, Quantity};
use crate::order_service::OrderError;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by [`super::OrderActor`]. Each carries its response channel.
#[derive(Debug)]
pub enum OrderRequest {
    CreateOrder {
        product: String,
        quantity: Quantity,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    UpdateOrder {
        order_id: OrderId,
        new_quantity: Quantity,
        respond_to: ServiceResponse<bool, OrderError>,
    },
    RemoveOrder {
        order_id: OrderId,
        respond_to: ServiceResponse<bool, OrderError>,
    },
    GetOrders {
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    GetOrder {
        order_id: OrderId,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    Shutdown,
}
