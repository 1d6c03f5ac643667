use chrono::{NaiveDate, Utc};
use contracts::domain::a005_membership::aggregate::{Membership, MembershipId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::membership_tier::MembershipTier;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a005_membership")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub customer_phone: Option<String>,
    /// Код уровня, см. `MembershipTier::code`
    pub tier: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_total: i32,
    pub visits_used: i32,
    pub price: f64,
    pub is_frozen: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Membership {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Membership {
            base: BaseAggregate::with_metadata(MembershipId(uuid), m.code, m.description, m.comment, metadata),
            customer_phone: m.customer_phone,
            tier: MembershipTier::from_code(&m.tier).unwrap_or_default(),
            start_date: m.start_date,
            end_date: m.end_date,
            visits_total: m.visits_total,
            visits_used: m.visits_used,
            price: m.price,
            is_frozen: m.is_frozen,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Membership) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        customer_phone: Set(aggregate.customer_phone.clone()),
        tier: Set(aggregate.tier.code().to_string()),
        start_date: Set(aggregate.start_date),
        end_date: Set(aggregate.end_date),
        visits_total: Set(aggregate.visits_total),
        visits_used: Set(aggregate.visits_used),
        price: Set(aggregate.price),
        is_frozen: Set(aggregate.is_frozen),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Абонементы, новые сверху по дате начала
pub async fn list_all() -> anyhow::Result<Vec<Membership>> {
    let mut items: Vec<Membership> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    Ok(items)
}

/// Абонементы, срок которых закончился в `[from, to)`
pub async fn list_ended_between(from: NaiveDate, to: NaiveDate) -> anyhow::Result<Vec<Membership>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::EndDate.gte(from))
        .filter(Column::EndDate.lt(to))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Membership>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<Membership>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Membership) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Membership) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
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
