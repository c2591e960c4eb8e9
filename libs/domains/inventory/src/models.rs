use chrono::{DateTime, Utc};
use database::mongodb::timestamp;
use list_query::{FieldKind, FilterSchema, OperatorSet};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Receipt lifecycle: `draft` until approved or cancelled, both terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReceiptStatus {
    #[default]
    Draft,
    Approved,
    Cancelled,
}

impl ReceiptStatus {
    pub const ALL: &'static [&'static str] = &["draft", "approved", "cancelled"];

    /// Timestamp field stamped when entering this status.
    pub fn timestamp_field(&self) -> Option<&'static str> {
        match self {
            ReceiptStatus::Draft => None,
            ReceiptStatus::Approved => Some("approvedAt"),
            ReceiptStatus::Cancelled => Some("cancelledAt"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Credit,
}

impl PaymentMethod {
    pub const ALL: &'static [&'static str] = &["cash", "bank_transfer", "credit"];
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExportReason {
    Sale,
    Transfer,
    Damaged,
    Expired,
    ReturnToSupplier,
    Other,
}

impl ExportReason {
    pub const ALL: &'static [&'static str] = &[
        "sale",
        "transfer",
        "damaged",
        "expired",
        "return_to_supplier",
        "other",
    ];
}

/// Behaviour shared by import and export receipts.
pub trait Receipt:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Unpin + Send + Sync + 'static
{
    type Create: Validate + Send + Sync + 'static;
    type Update: Validate + Send + Sync + 'static;

    const COLLECTION: &'static str;
    /// Vietnamese noun used in messages ("phiếu nhập", "phiếu xuất")
    const LABEL: &'static str;

    fn new(input: Self::Create, created_by: Uuid) -> Self;
    fn apply_update(&mut self, update: Self::Update);

    fn id(&self) -> Uuid;
    fn status(&self) -> ReceiptStatus;
    fn branch_id(&self) -> Uuid;
    fn supplier_id(&self) -> Option<Uuid> {
        None
    }
    fn product_item_ids(&self) -> Vec<Uuid>;

    /// Filters accepted by the list endpoint.
    fn filter_schema() -> FilterSchema;
}

// ---------------------------------------------------------------------------
// Import receipts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportReceiptItem {
    pub product_item_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[validate(range(exclusive_min = 0.0))]
    pub purchase_price: f64,
}

/// Stock-in record from a supplier into a branch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportReceipt {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub branch_id: Uuid,
    pub items: Vec<ImportReceiptItem>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub note: String,
    /// Σ quantity × purchasePrice
    pub total_amount: f64,
    pub status: ReceiptStatus,
    pub created_by: Uuid,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateImportReceipt {
    pub supplier_id: Uuid,
    pub branch_id: Uuid,
    #[validate(length(min = 1), nested)]
    pub items: Vec<ImportReceiptItem>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImportReceipt {
    pub supplier_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    #[validate(length(min = 1), nested)]
    pub items: Option<Vec<ImportReceiptItem>>,
    pub payment_method: Option<PaymentMethod>,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

fn total_amount(items: &[ImportReceiptItem]) -> f64 {
    items
        .iter()
        .map(|item| f64::from(item.quantity) * item.purchase_price)
        .sum()
}

impl Receipt for ImportReceipt {
    type Create = CreateImportReceipt;
    type Update = UpdateImportReceipt;

    const COLLECTION: &'static str = "importReceipts";
    const LABEL: &'static str = "phiếu nhập";

    fn new(input: CreateImportReceipt, created_by: Uuid) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::now_v7(),
            supplier_id: input.supplier_id,
            branch_id: input.branch_id,
            total_amount: total_amount(&input.items),
            items: input.items,
            payment_method: input.payment_method,
            note: input.note,
            status: ReceiptStatus::Draft,
            created_by,
            approved_at: None,
            cancelled_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: UpdateImportReceipt) {
        if let Some(supplier_id) = update.supplier_id {
            self.supplier_id = supplier_id;
        }
        if let Some(branch_id) = update.branch_id {
            self.branch_id = branch_id;
        }
        if let Some(items) = update.items {
            self.total_amount = total_amount(&items);
            self.items = items;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(note) = update.note {
            self.note = note;
        }
        self.updated_at = timestamp::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> ReceiptStatus {
        self.status
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }

    fn supplier_id(&self) -> Option<Uuid> {
        Some(self.supplier_id)
    }

    fn product_item_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|item| item.product_item_id).collect()
    }

    fn filter_schema() -> FilterSchema {
        FilterSchema::new(OperatorSet::Extended)
            .field("status", FieldKind::Enum(ReceiptStatus::ALL))
            .field("paymentMethod", FieldKind::Enum(PaymentMethod::ALL))
            .field("supplierId", FieldKind::Id)
            .field("branchId", FieldKind::Id)
            .field("createdBy", FieldKind::Id)
            .field("totalAmount", FieldKind::Float)
            .field("createdAt", FieldKind::DateTime)
    }
}

// ---------------------------------------------------------------------------
// Export receipts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportReceiptItem {
    pub product_item_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Stock-out record from a branch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportReceipt {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub branch_id: Uuid,
    pub items: Vec<ExportReceiptItem>,
    pub reason: ExportReason,
    pub note: String,
    pub status: ReceiptStatus,
    pub created_by: Uuid,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportReceipt {
    pub branch_id: Uuid,
    #[validate(length(min = 1), nested)]
    pub items: Vec<ExportReceiptItem>,
    pub reason: ExportReason,
    #[validate(length(min = 1, max = 1000))]
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExportReceipt {
    pub branch_id: Option<Uuid>,
    #[validate(length(min = 1), nested)]
    pub items: Option<Vec<ExportReceiptItem>>,
    pub reason: Option<ExportReason>,
    #[validate(length(min = 1, max = 1000))]
    pub note: Option<String>,
}

impl Receipt for ExportReceipt {
    type Create = CreateExportReceipt;
    type Update = UpdateExportReceipt;

    const COLLECTION: &'static str = "exportReceipts";
    const LABEL: &'static str = "phiếu xuất";

    fn new(input: CreateExportReceipt, created_by: Uuid) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::now_v7(),
            branch_id: input.branch_id,
            items: input.items,
            reason: input.reason,
            note: input.note,
            status: ReceiptStatus::Draft,
            created_by,
            approved_at: None,
            cancelled_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, update: UpdateExportReceipt) {
        if let Some(branch_id) = update.branch_id {
            self.branch_id = branch_id;
        }
        if let Some(items) = update.items {
            self.items = items;
        }
        if let Some(reason) = update.reason {
            self.reason = reason;
        }
        if let Some(note) = update.note {
            self.note = note;
        }
        self.updated_at = timestamp::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> ReceiptStatus {
        self.status
    }

    fn branch_id(&self) -> Uuid {
        self.branch_id
    }

    fn product_item_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|item| item.product_item_id).collect()
    }

    fn filter_schema() -> FilterSchema {
        FilterSchema::new(OperatorSet::Extended)
            .field("status", FieldKind::Enum(ReceiptStatus::ALL))
            .field("reason", FieldKind::Enum(ExportReason::ALL))
            .field("branchId", FieldKind::Id)
            .field("createdBy", FieldKind::Id)
            .field("createdAt", FieldKind::DateTime)
    }
}
