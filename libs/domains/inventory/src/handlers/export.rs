//! HTTP handlers for export receipts

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
    CreateExportReceipt, ExportReceipt, ExportReceiptItem, ExportReason, ReceiptStatus,
    UpdateExportReceipt,
};
use crate::repository::ReceiptRepository;
use crate::service::ReceiptService;

pub type ExportReceiptService<R, C> = ReceiptService<ExportReceipt, R, C>;

#[derive(OpenApi)]
#[openapi(
    paths(
        create_export_receipt,
        list_export_receipts,
        get_export_receipt,
        update_export_receipt,
        approve_export_receipt,
        cancel_export_receipt,
    ),
    components(
        schemas(
            ExportReceipt, ExportReceiptItem, CreateExportReceipt, UpdateExportReceipt,
            ExportReason, ReceiptStatus
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
        (name = "Export receipts", description = "Stock-out receipts (admin)")
    )
)]
pub struct ApiDoc;

pub fn router<R, C>(service: ExportReceiptService<R, C>) -> Router
where
    R: ReceiptRepository<ExportReceipt> + 'static,
    C: CatalogRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_export_receipts).post(create_export_receipt))
        .route(
            "/{id}",
            get(get_export_receipt).put(update_export_receipt),
        )
        .route("/{id}/approve", put(approve_export_receipt))
        .route("/{id}/cancel", put(cancel_export_receipt))
        .with_state(shared_service)
}

/// Create a draft export receipt
#[utoipa::path(
    post,
    path = "",
    tag = "Export receipts",
    request_body = CreateExportReceipt,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt created", body = ApiResponse<ExportReceipt>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_export_receipt<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    AdminUser(admin): AdminUser,
    ValidatedJson(input): ValidatedJson<CreateExportReceipt>,
) -> ReceiptResult<ApiResponse<ExportReceipt>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.create(input, admin.id).await?;
    Ok(ApiResponse::ok("Tạo phiếu xuất thành công", receipt))
}

/// List export receipts
///
/// Filters: `status`, `reason`, `branchId`, `createdBy`, `createdAt`, with
/// `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `in`, `nin`.
#[utoipa::path(
    get,
    path = "",
    tag = "Export receipts",
    params(ListParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of receipts", body = ApiResponse<Page<ExportReceipt>>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_export_receipts<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    _admin: AdminUser,
    QueryPairs(pairs): QueryPairs,
) -> ReceiptResult<ApiResponse<Page<Value>>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let page = service.list(&pairs).await?;
    Ok(ApiResponse::ok("Lấy danh sách phiếu xuất thành công", page))
}

/// Get an export receipt by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Export receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt found", body = ApiResponse<ExportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_export_receipt<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ExportReceipt>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.get(id).await?;
    Ok(ApiResponse::ok("Lấy thông tin phiếu xuất thành công", receipt))
}

/// Update a draft export receipt
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Export receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    request_body = UpdateExportReceipt,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt updated", body = ApiResponse<ExportReceipt>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_export_receipt<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateExportReceipt>,
) -> ReceiptResult<ApiResponse<ExportReceipt>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.update(id, input).await?;
    Ok(ApiResponse::ok("Cập nhật phiếu xuất thành công", receipt))
}

/// Approve a draft export receipt
#[utoipa::path(
    put,
    path = "/{id}/approve",
    tag = "Export receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt approved", body = ApiResponse<ExportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn approve_export_receipt<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ExportReceipt>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.approve(id).await?;
    Ok(ApiResponse::ok("Duyệt phiếu xuất thành công", receipt))
}

/// Cancel a draft export receipt
#[utoipa::path(
    put,
    path = "/{id}/cancel",
    tag = "Export receipts",
    params(("id" = Uuid, Path, description = "Receipt ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Receipt cancelled", body = ApiResponse<ExportReceipt>),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn cancel_export_receipt<R, C>(
    State(service): State<Arc<ExportReceiptService<R, C>>>,
    _admin: AdminUser,
    UuidPath(id): UuidPath,
) -> ReceiptResult<ApiResponse<ExportReceipt>>
where
    R: ReceiptRepository<ExportReceipt>,
    C: CatalogRepository,
{
    let receipt = service.cancel(id).await?;
    Ok(ApiResponse::ok("Hủy phiếu xuất thành công", receipt))
}
