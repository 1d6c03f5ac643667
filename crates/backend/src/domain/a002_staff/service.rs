use super::repository;
use crate::domain::a001_branch;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use contracts::domain::a002_staff::aggregate::{Staff, StaffDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

/// Мастер должен ссылаться на существующий филиал
async fn ensure_branch(branch_ref: &str) -> anyhow::Result<()> {
    let exists = match Uuid::parse_str(branch_ref) {
        Ok(id) => a001_branch::repository::get_by_id(id)
            .await?
            .is_some_and(|b| !b.base.metadata.is_deleted),
        Err(_) => false,
    };
    if !exists {
        return Err(validation(format!("Филиал не найден: {}", branch_ref)));
    }
    Ok(())
}

pub async fn create(dto: StaffDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("ST"));
    let mut aggregate = Staff::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    ensure_branch(&aggregate.branch_ref).await?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Staff::collection_name());
    Ok(id)
}

pub async fn update(dto: StaffDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| validation("Некорректный id"))?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or_else(not_found)?;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    ensure_branch(&aggregate.branch_ref).await?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Staff::collection_name());
    Ok(())
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Staff::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Staff>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Staff>> {
    repository::list_all().await
}

pub async fn list_by_branch(branch_ref: &str) -> anyhow::Result<Vec<Staff>> {
    repository::list_by_branch(branch_ref).await
}

/// Тестовые мастера: по три в каждом филиале, если в филиале ещё никого нет
pub async fn insert_test_data() -> anyhow::Result<()> {
    let roster = [
        ("Анна Соколова", "Стилист", 10),
        ("Ирина Лебедева", "Мастер маникюра", 20),
        ("Олег Морозов", "Барбер", 30),
    ];
    for branch in a001_branch::repository::list_all().await? {
        let branch_id = branch.to_string_id();
        if !repository::list_by_branch(&branch_id).await?.is_empty() {
            continue;
        }
        for (name, position, order) in roster {
            create(StaffDto {
                description: name.into(),
                position: position.into(),
                branch_ref: branch_id.clone(),
                sort_order: order,
                ..Default::default()
            })
            .await?;
        }
    }
    Ok(())
}
