use super::repository;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use contracts::domain::a001_branch::aggregate::{Branch, BranchDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

/// Создание филиала
pub async fn create(dto: BranchDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("BR"));
    if repository::get_by_code(&code).await?.is_some() {
        return Err(validation(format!("Филиал с кодом {} уже существует", code)));
    }
    let mut aggregate = Branch::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Branch::collection_name());
    Ok(id)
}

pub async fn update(dto: BranchDto) -> anyhow::Result<()> {
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
    changes::notify(Branch::collection_name());
    Ok(())
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Branch::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Branch>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Branch>> {
    repository::list_all().await
}

/// Вставка тестовых данных (пропускает уже существующие коды)
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        BranchDto {
            code: Some("BR-001".into()),
            description: "Салон на Тверской".into(),
            address: "Москва, ул. Тверская, 12".into(),
            phone: Some("+74951234567".into()),
            ..Default::default()
        },
        BranchDto {
            code: Some("BR-002".into()),
            description: "Салон у парка".into(),
            address: "Москва, Парковая ул., 3".into(),
            phone: Some("+74957654321".into()),
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
