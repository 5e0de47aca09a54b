use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{CreateOrderParam, Order, UpdateOrderStatusParam},
        service::order::OrderService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

const ORDER_NOT_FOUND: &str = "Order not found";

/// Place an order.
///
/// Each entry of `games` reserves one unit of that game's stock. Titles, prices, and
/// images are copied from the catalog and the total is computed server-side. Nothing is
/// written unless every item can be reserved.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Order placed in `Pending`
/// - `400 Bad Request` - Empty order, unknown payment method, or a game out of stock
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - A requested game does not exist
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed successfully", body = OrderDto),
        (status = 400, description = "Empty order or game out of stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = CreateOrderParam::from_dto(payload, user.id)?;
    let order = OrderService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(order.into_dto()).with_message("Order placed successfully")),
    ))
}

/// List the signed-in user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders/myorders",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's orders", body = Vec<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let orders = OrderService::new(&state.db).get_my_orders(user.id).await?;
    let dtos: Vec<_> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Get one order with its buyer.
///
/// # Access Control
/// - The order's owner or an admin
///
/// # Returns
/// - `200 OK` - The order
/// - `403 Forbidden` - Caller neither owns the order nor is an admin
/// - `404 Not Found` - No order with that id, or the id is malformed
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized to view this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let id = parse_id(&id, ORDER_NOT_FOUND)?;
    let order = OrderService::new(&state.db).get_by_id(id, &user).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(order.into_dto()))))
}

/// List every order with its buyer, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list all orders
#[utoipa::path(
    get,
    path = "/api/orders/admin/all",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All orders", body = Vec<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let orders = OrderService::new(&state.db).get_all().await?;
    let dtos: Vec<_> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(dtos))))
}

/// Move an order to another status.
///
/// Allowed moves are `Pending` to `Paid`, `Delivered`, or `Cancelled`, and `Paid` to
/// `Delivered` or `Cancelled`. Cancelling returns the order's stock.
///
/// # Access Control
/// - `Admin` - Only admins can change order status
///
/// # Returns
/// - `200 OK` - Status changed
/// - `400 Bad Request` - Missing or unknown status, or transition not allowed
/// - `404 Not Found` - No order with that id
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated successfully", body = OrderDto),
        (status = 400, description = "Invalid status or transition", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id, ORDER_NOT_FOUND)?;
    let param = UpdateOrderStatusParam::from_dto(payload, id)?;
    let order = OrderService::new(&state.db).update_status(param).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(order.into_dto()).with_message("Order status updated successfully")),
    ))
}

/// Cancel a pending order and return its stock.
///
/// # Access Control
/// - The order's owner or an admin
///
/// # Returns
/// - `200 OK` - Order cancelled
/// - `400 Bad Request` - Order is no longer pending
/// - `403 Forbidden` - Caller neither owns the order nor is an admin
/// - `404 Not Found` - No order with that id
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled successfully", body = OrderDto),
        (status = 400, description = "Order is not pending", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized to cancel this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let id = parse_id(&id, ORDER_NOT_FOUND)?;
    let order = OrderService::new(&state.db).cancel(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(order.into_dto()).with_message("Order cancelled successfully")),
    ))
}
