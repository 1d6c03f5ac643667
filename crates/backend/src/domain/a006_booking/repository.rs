use chrono::{NaiveDate, Utc};
use contracts::domain::a006_booking::aggregate::{Booking, BookingId, PaymentLine, ServiceLine};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::booking_status::BookingStatus;
use contracts::enums::payment_method::PaymentMethod;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a006_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub customer_phone: Option<String>,
    /// JSON: Vec<ServiceLine>
    pub services_json: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub branch_ref: String,
    pub branch_name: String,
    pub staff_ref: String,
    pub staff_name: String,
    pub status: String,
    pub total_price: f64,
    pub total_duration: i32,
    pub payment_method: Option<String>,
    /// JSON: Vec<PaymentLine>
    pub payment_details_json: String,
    pub tip_amount: f64,
    pub discount: f64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_lines<T: serde::de::DeserializeOwned>(id: &str, column: &str, json: &str) -> Vec<T> {
    match serde_json::from_str(json) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("a006_booking {}: cannot parse {}: {}", id, column, e);
            Vec::new()
        }
    }
}

impl From<Model> for Booking {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let services: Vec<ServiceLine> = parse_lines(&m.id, "services_json", &m.services_json);
        let payment_details: Vec<PaymentLine> =
            parse_lines(&m.id, "payment_details_json", &m.payment_details_json);

        Booking {
            base: BaseAggregate::with_metadata(BookingId(uuid), m.code, m.description, m.comment, metadata),
            customer_phone: m.customer_phone,
            services,
            booking_date: m.booking_date,
            booking_time: m.booking_time,
            branch_ref: m.branch_ref,
            branch_name: m.branch_name,
            staff_ref: m.staff_ref,
            staff_name: m.staff_name,
            status: BookingStatus::from_code(&m.status).unwrap_or_default(),
            total_price: m.total_price,
            total_duration: m.total_duration,
            payment_method: m.payment_method.as_deref().and_then(PaymentMethod::from_code),
            payment_details,
            tip_amount: m.tip_amount,
            discount: m.discount,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Booking) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        customer_phone: Set(aggregate.customer_phone.clone()),
        services_json: Set(serde_json::to_string(&aggregate.services)?),
        booking_date: Set(aggregate.booking_date),
        booking_time: Set(aggregate.booking_time.clone()),
        branch_ref: Set(aggregate.branch_ref.clone()),
        branch_name: Set(aggregate.branch_name.clone()),
        staff_ref: Set(aggregate.staff_ref.clone()),
        staff_name: Set(aggregate.staff_name.clone()),
        status: Set(aggregate.status.code().to_string()),
        total_price: Set(aggregate.total_price),
        total_duration: Set(aggregate.total_duration),
        payment_method: Set(aggregate.payment_method.map(|m| m.code().to_string())),
        payment_details_json: Set(serde_json::to_string(&aggregate.payment_details)?),
        tip_amount: Set(aggregate.tip_amount),
        discount: Set(aggregate.discount),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

/// Записи за период (границы включительно), по дате и времени
pub async fn list(
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    branch_ref: Option<&str>,
) -> anyhow::Result<Vec<Booking>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(from) = date_from {
        query = query.filter(Column::BookingDate.gte(from));
    }
    if let Some(to) = date_to {
        query = query.filter(Column::BookingDate.lte(to));
    }
    if let Some(branch) = branch_ref {
        query = query.filter(Column::BranchRef.eq(branch));
    }
    let items = query
        .order_by_asc(Column::BookingDate)
        .order_by_asc(Column::BookingTime)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Booking>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn count_all() -> anyhow::Result<u64> {
    let n = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(n)
}

pub async fn insert(aggregate: &Booking) -> anyhow::Result<Uuid> {
    to_active(aggregate)?.insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Booking) -> anyhow::Result<()> {
    let mut active = to_active(aggregate)?;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_line_json_yields_empty_lines() {
        let lines: Vec<ServiceLine> = parse_lines("x", "services_json", "{not json");
        assert!(lines.is_empty());
        let lines: Vec<PaymentLine> =
            parse_lines("x", "payment_details_json", r#"[{"method":"Card","amount":100.0}]"#);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].method, PaymentMethod::Card);
    }
}
