use super::repository;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use contracts::domain::a003_salon_service::aggregate::{SalonService, SalonServiceDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

pub async fn create(dto: SalonServiceDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("SV"));
    let mut aggregate = SalonService::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(SalonService::collection_name());
    Ok(id)
}

pub async fn update(dto: SalonServiceDto) -> anyhow::Result<()> {
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
    changes::notify(SalonService::collection_name());
    Ok(())
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(SalonService::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SalonService>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<SalonService>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("SV-001", "Волосы", "Женская стрижка", 2500.0, 60),
        ("SV-002", "Волосы", "Укладка", 1500.0, 45),
        ("SV-003", "Волосы", "Окрашивание", 6500.0, 150),
        ("SV-004", "Ногти", "Маникюр с покрытием", 2200.0, 90),
        ("SV-005", "Ногти", "Педикюр", 2800.0, 75),
        ("SV-006", "Барбершоп", "Мужская стрижка", 1800.0, 45),
        ("SV-007", "Барбершоп", "Оформление бороды", 900.0, 30),
    ];
    for (code, category, name, price, minutes) in data {
        if repository::get_by_code(code).await?.is_some() {
            continue;
        }
        create(SalonServiceDto {
            code: Some(code.into()),
            description: name.into(),
            category: category.into(),
            price,
            duration_minutes: minutes,
            ..Default::default()
        })
        .await?;
    }
    Ok(())
}
