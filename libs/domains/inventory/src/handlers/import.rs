//! HTTP handlers for import receipts

use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use axum_helpers::{
    AdminUser, ApiResponse, QueryPairs, UuidPath, ValidatedJson,
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

use crate::error::ReceiptResult;
use crate::models::{
    CreateImportReceipt, ImportReceipt, ImportReceiptItem, PaymentMethod, ReceiptStatus,
    UpdateImportReceipt,
};
use crate::repository::ReceiptRepository;
use crate::service::ReceiptService;

pub type ImportReceiptService<R, C> = ReceiptService<ImportReceipt, R, C>;

#[derive(OpenApi)]
#[openapi(
    paths(
        create_import_receipt,
        list_import_receipts,
        get_import_receipt,
        update_import_receipt,
        approve_import_receipt,
        cancel_import_receipt,
    ),
    components(
        schemas(
            ImportReceipt, ImportReceiptItem, CreateImportReceipt, UpdateImportReceipt,
            PaymentMethod, ReceiptStatus
        ),
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
        (name = "Import receipts", description = "Stock-in receipts (admin)")
    )
)]
pub struct ApiDoc;

pub fn router<R, C>(service: ImportReceiptService<R, C>) -> Router
where
    R: ReceiptRepository<ImportReceipt> + 'static,
    C: CatalogRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_import_receipts).post(create_import_receipt))
        .route(
            "/{id}",
            get(get_import_receipt).put(update_import_receipt),
        )
        .route("/{id}/approve", put(approve_import_receipt))
        .route("/{id}/cancel", put(cancel_import_receipt))
        .with_state(shared_service)
}

/// Create a draft import receipt
#[utoipa::path(
    post,
    path = "",
    tag = "Import receipts",
    request_body = CreateImportReceipt,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt created", body = ApiResponse<ImportReceipt>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_import_receipt<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    AdminUser(admin): AdminUser,
    ValidatedJson(input): ValidatedJson<CreateImportReceipt>,
) -> ReceiptResult<ApiResponse<ImportReceipt>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.create(input, admin.id).await?;
    Ok(ApiResponse::ok("Tạo phiếu nhập thành công", receipt))
}

/// List import receipts
///
/// Filters: `status`, `paymentMethod`, `supplierId`, `branchId`,
/// `createdBy`, `totalAmount`, `createdAt`, with `eq`, `ne`, `gt`, `gte`,
/// `lt`, `lte`, `in`, `nin`.
#[utoipa::path(
    get,
    path = "",
    tag = "Import receipts",
    params(ListParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of receipts", body = ApiResponse<Page<ImportReceipt>>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_import_receipts<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    _admin: AdminUser,
    QueryPairs(pairs): QueryPairs,
) -> ReceiptResult<ApiResponse<Page<Value>>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let page = service.list(&pairs).await?;
    Ok(ApiResponse::ok("Lấy danh sách phiếu nhập thành công", page))
}

/// Get an import receipt by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Import receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt found", body = ApiResponse<ImportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_import_receipt<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ImportReceipt>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.get(id).await?;
    Ok(ApiResponse::ok("Lấy thông tin phiếu nhập thành công", receipt))
}

/// Update a draft import receipt
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Import receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    request_body = UpdateImportReceipt,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt updated", body = ApiResponse<ImportReceipt>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_import_receipt<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateImportReceipt>,
) -> ReceiptResult<ApiResponse<ImportReceipt>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.update(id, input).await?;
    Ok(ApiResponse::ok("Cập nhật phiếu nhập thành công", receipt))
}

/// Approve a draft import receipt
#[utoipa::path(
    put,
    path = "/{id}/approve",
    tag = "Import receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt approved", body = ApiResponse<ImportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn approve_import_receipt<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ImportReceipt>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.approve(id).await?;
    Ok(ApiResponse::ok("Duyệt phiếu nhập thành công", receipt))
}

/// Cancel a draft import receipt
#[utoipa::path(
    put,
    path = "/{id}/cancel",
    tag = "Import receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt cancelled", body = ApiResponse<ImportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn cancel_import_receipt<R, C>(
    State(service): State<Arc<ImportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ImportReceipt>>
where
    R: ReceiptRepository<ImportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.cancel(id).await?;
    Ok(ApiResponse::ok("Hủy phiếu nhập thành công", receipt))
}
