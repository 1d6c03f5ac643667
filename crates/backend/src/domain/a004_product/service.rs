use super::repository;
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::short_code;
use crate::shared::logger::{self, CATEGORY_PRODUCT};
use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

pub async fn create(dto: ProductDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("PR"));
    let mut aggregate = Product::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Product::collection_name());
    Ok(id)
}

pub async fn update(dto: ProductDto) -> anyhow::Result<()> {
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
    changes::notify(Product::collection_name());
    Ok(())
}

/// Приход (delta > 0) или списание (delta < 0). Возвращает новый остаток.
pub async fn adjust_stock(id: Uuid, delta: i32) -> anyhow::Result<i32> {
    if delta == 0 {
        return Err(validation("Изменение остатка не может быть нулевым"));
    }
    let mut aggregate = repository::get_by_id(id)
        .await?
        .filter(|p| !p.base.metadata.is_deleted)
        .ok_or_else(not_found)?;
    let before = aggregate.stock_qty;
    let after = aggregate.adjust_stock(delta).map_err(validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Product::collection_name());
    logger::log(
        CATEGORY_PRODUCT,
        &format!(
            "{} ({}): остаток {} → {}",
            aggregate.base.description, aggregate.base.code, before, after
        ),
    );
    Ok(after)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Product::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("PR-001", "Уход за волосами", "Kerastase", "Шампунь восстанавливающий 250 мл", 2890.0, 12),
        ("PR-002", "Уход за волосами", "Kerastase", "Маска для окрашенных волос 200 мл", 3650.0, 6),
        ("PR-003", "Стайлинг", "Davines", "Спрей для объёма 150 мл", 2150.0, 9),
        ("PR-004", "Ногти", "OPI", "Масло для кутикулы 15 мл", 990.0, 20),
        ("PR-005", "Барбершоп", "Reuzel", "Помада для укладки 113 г", 1790.0, 0),
    ];
    for (code, category, brand, name, price, stock) in data {
        if repository::get_by_code(code).await?.is_some() {
            continue;
        }
        create(ProductDto {
            code: Some(code.into()),
            description: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
            stock_qty: stock,
            ..Default::default()
        })
        .await?;
    }
    Ok(())
}
