//! HTTP handlers for the caller's wishlist

use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiResponse, CurrentUser, QueryPairs, ValidatedJson,
    errors::responses::{
        BadRequestQueryResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use domain_catalog::CatalogRepository;
use list_query::{ListParams, Page};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::{ToggleWishlist, WishlistAction, WishlistEntry, WishlistToggle};
use crate::repository::WishlistRepository;
use crate::service::WishlistService;

#[derive(OpenApi)]
#[openapi(
    paths(toggle_wishlist, list_wishlist),
    components(
        schemas(WishlistEntry, ToggleWishlist, WishlistToggle, WishlistAction),
        responses(
            BadRequestValidationResponse,
            BadRequestQueryResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Wishlist", description = "Per-user wishlist")
    )
)]
pub struct ApiDoc;

pub fn router<W, C>(service: WishlistService<W, C>) -> Router
where
    W: WishlistRepository + 'static,
    C: CatalogRepository + 'static,
{
    Router::new()
        .route("/", get(list_wishlist).post(toggle_wishlist))
        .with_state(Arc::new(service))
}

/// Add a product item to the wishlist, or remove it when already present
#[utoipa::path(
    post,
    path = "",
    tag = "Wishlist",
    request_body = ToggleWishlist,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Wishlist toggled", body = ApiResponse<WishlistToggle>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_wishlist<W, C>(
    State(service): State<Arc<WishlistService<W, C>>>,
    user: CurrentUser,
    ValidatedJson(input): ValidatedJson<ToggleWishlist>,
) -> ReviewResult<ApiResponse<WishlistToggle>>
where
    W: WishlistRepository,
    C: CatalogRepository,
{
    let outcome = service.toggle(user.id, input).await?;
    let message = match outcome.action {
        WishlistAction::Added => "Đã thêm vào danh sách yêu thích",
        WishlistAction::Removed => "Đã xóa khỏi danh sách yêu thích",
    };
    Ok(ApiResponse::ok(message, outcome))
}

/// List the caller's wishlist
#[utoipa::path(
    get,
    path = "",
    tag = "Wishlist",
    params(ListParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of wishlist entries", body = ApiResponse<Page<WishlistEntry>>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_wishlist<W, C>(
    State(service): State<Arc<WishlistService<W, C>>>,
    user: CurrentUser,
    QueryPairs(pairs): QueryPairs,
) -> ReviewResult<ApiResponse<Page<Value>>>
where
    W: WishlistRepository,
    C: CatalogRepository,
{
    let page = service.list(user.id, &pairs).await?;
    Ok(ApiResponse::ok("Lấy danh sách yêu thích thành công", page))
}
