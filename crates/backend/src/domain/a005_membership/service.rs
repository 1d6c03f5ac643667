use super::repository;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use crate::shared::logger::{self, CATEGORY_MEMBERSHIP};
use chrono::{Duration, Local, NaiveDate};
use contracts::domain::a005_membership::aggregate::{Membership, MembershipDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::membership_tier::{MembershipStatus, MembershipTier};
use uuid::Uuid;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn create(dto: MembershipDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("MB"));
    let mut aggregate = Membership::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Membership::collection_name());
    Ok(id)
}

pub async fn update(dto: MembershipDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| validation("Некорректный id"))?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Membership::collection_name());
    Ok(())
}

async fn load_live(id: Uuid) -> anyhow::Result<Membership> {
    repository::get_by_id(id)
        .await?
        .filter(|m| !m.base.metadata.is_deleted)
        .ok_or_else(not_found)
}

/// Списать одно посещение
pub async fn use_visit(id: Uuid) -> anyhow::Result<Membership> {
    let mut aggregate = load_live(id).await?;
    aggregate.use_visit(today()).map_err(validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Membership::collection_name());
    let left = aggregate
        .visits_left()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "без ограничений".into());
    logger::log(
        CATEGORY_MEMBERSHIP,
        &format!(
            "{} ({}): списано посещение, осталось {}",
            aggregate.customer_name(),
            aggregate.base.code,
            left
        ),
    );
    Ok(aggregate)
}

/// Заморозить или разморозить абонемент
pub async fn set_frozen(id: Uuid, frozen: bool) -> anyhow::Result<Membership> {
    let mut aggregate = load_live(id).await?;
    if aggregate.is_frozen == frozen {
        return Ok(aggregate);
    }
    aggregate.is_frozen = frozen;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Membership::collection_name());
    logger::log(
        CATEGORY_MEMBERSHIP,
        &format!(
            "{} ({}): {}",
            aggregate.customer_name(),
            aggregate.base.code,
            if frozen { "заморожен" } else { "разморожен" }
        ),
    );
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Membership::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Membership>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Membership>> {
    repository::list_all().await
}

/// Абонементы, истёкшие за последние `days` дней. Данные не меняются, только журнал.
pub async fn log_recently_expired(days: i64) -> anyhow::Result<usize> {
    let today = today();
    let ended = repository::list_ended_between(today - Duration::days(days), today).await?;
    let expired: Vec<&Membership> = ended
        .iter()
        .filter(|m| m.status_on(today) == MembershipStatus::Expired)
        .collect();
    for m in &expired {
        logger::log(
            CATEGORY_MEMBERSHIP,
            &format!(
                "{} ({}): срок абонемента истёк {}",
                m.customer_name(),
                m.base.code,
                m.end_date.format("%d.%m.%Y")
            ),
        );
    }
    Ok(expired.len())
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let today = today();
    let data = vec![
        MembershipDto {
            code: Some("MB-001".into()),
            customer_name: "Елена Васильева".into(),
            customer_phone: Some("+79161112233".into()),
            tier: MembershipTier::Gold,
            start_date: today - Duration::days(10),
            end_date: today + Duration::days(80),
            visits_total: 12,
            visits_used: 3,
            price: 24000.0,
            ..Default::default()
        },
        MembershipDto {
            code: Some("MB-002".into()),
            customer_name: "Дмитрий Орлов".into(),
            tier: MembershipTier::Basic,
            start_date: today - Duration::days(40),
            end_date: today - Duration::days(1),
            visits_total: 4,
            visits_used: 4,
            price: 6000.0,
            ..Default::default()
        },
        MembershipDto {
            code: Some("MB-003".into()),
            customer_name: "Светлана Ким".into(),
            customer_phone: Some("+79035554433".into()),
            tier: MembershipTier::Platinum,
            start_date: today + Duration::days(5),
            end_date: today + Duration::days(370),
            visits_total: 0,
            price: 90000.0,
            ..Default::default()
        },
    ];
    for dto in data {
        if let Some(code) = &dto.code {
            if repository::get_by_code(code).await?.is_some() {
                continue;
            }
        }
        create(dto).await?;
    }
    Ok(())
}
