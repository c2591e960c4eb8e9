//! HTTP handlers for product reviews

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    ApiResponse, CurrentUser, QueryPairs, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestQueryResponse, BadRequestValidationResponse,
        ConflictResponse, ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use domain_catalog::CatalogRepository;
use list_query::{ListParams, Page};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::{CreateReview, Review, UpdateReview};
use crate::repository::ReviewRepository;
use crate::service::ReviewService;

#[derive(OpenApi)]
#[openapi(
    paths(create_review, list_my_reviews, list_product_reviews, update_review, delete_review),
    components(
        schemas(Review, CreateReview, UpdateReview),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestQueryResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Reviews", description = "Product reviews and rating aggregates")
    )
)]
pub struct ApiDoc;

pub fn router<R, C>(service: ReviewService<R, C>) -> Router
where
    R: ReviewRepository + 'static,
    C: CatalogRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_review))
        .route("/me", get(list_my_reviews))
        .route(
            "/{id}",
            get(list_product_reviews)
                .put(update_review)
                .delete(delete_review),
        )
        .with_state(shared_service)
}

/// Review a product item from a delivered order
#[utoipa::path(
    post,
    path = "",
    tag = "Reviews",
    request_body = CreateReview,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Review created", body = ApiResponse<Review>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_review<R, C>(
    State(service): State<Arc<ReviewService<R, C>>>,
    user: CurrentUser,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> ReviewResult<ApiResponse<Review>>
where
    R: ReviewRepository,
    C: CatalogRepository,
{
    let review = service.create(input, user.id).await?;
    Ok(ApiResponse::ok("Đánh giá sản phẩm thành công", review))
}

/// List the caller's reviews
#[utoipa::path(
    get,
    path = "/me",
    tag = "Reviews",
    params(ListParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of reviews", body = ApiResponse<Page<Review>>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_my_reviews<R, C>(
    State(service): State<Arc<ReviewService<R, C>>>,
    user: CurrentUser,
    QueryPairs(pairs): QueryPairs,
) -> ReviewResult<ApiResponse<Page<Value>>>
where
    R: ReviewRepository,
    C: CatalogRepository,
{
    let page = service.list_mine(user.id, &pairs).await?;
    Ok(ApiResponse::ok("Lấy danh sách đánh giá của bạn thành công", page))
}

/// List a product's reviews
///
/// Public. Filters: `rating`, `productItemId`, `orderId`, `userId`,
/// `createdAt`, with `gt`, `gte`, `lt`, `lte`.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ListParams
    ),
    responses(
        (status = 200, description = "Page of reviews", body = ApiResponse<Page<Review>>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_product_reviews<R, C>(
    State(service): State<Arc<ReviewService<R, C>>>,
    UuidPath(product_id): UuidPath,
    QueryPairs(pairs): QueryPairs,
) -> ReviewResult<ApiResponse<Page<Value>>>
where
    R: ReviewRepository,
    C: CatalogRepository,
{
    let page = service.list_for_product(product_id, &pairs).await?;
    Ok(ApiResponse::ok("Lấy danh sách đánh giá thành công", page))
}

/// Update one of the caller's reviews
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReview,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<Review>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_review<R, C>(
    State(service): State<Arc<ReviewService<R, C>>>,
    user: CurrentUser,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateReview>,
) -> ReviewResult<ApiResponse<Review>>
where
    R: ReviewRepository,
    C: CatalogRepository,
{
    let review = service.update(id, user.id, input).await?;
    Ok(ApiResponse::ok("Cập nhật đánh giá thành công", review))
}

/// Delete one of the caller's reviews
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse<Review>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_review<R, C>(
    State(service): State<Arc<ReviewService<R, C>>>,
    user: CurrentUser,
    UuidPath(id): UuidPath,
) -> ReviewResult<ApiResponse<Review>>
where
    R: ReviewRepository,
    C: CatalogRepository,
{
    let review = service.delete(id, user.id).await?;
    Ok(ApiResponse::ok("Xóa đánh giá thành công", review))
}
