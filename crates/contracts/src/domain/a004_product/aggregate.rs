use crate::domain::common::base_aggregate::non_empty;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(ProductId);

/// Товар (косметика и расходники, продаваемые в салоне)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub category: String,
    pub brand: String,
    pub price: f64,
    pub stock_qty: i32,
    /// Только ссылка: загрузка изображений выполняется внешним сервисом
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl Product {
    pub fn new_for_insert(code: String, dto: &ProductDto) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), code, dto.description.trim().to_string());
        base.comment = non_empty(dto.comment.clone());

        Self {
            base,
            category: dto.category.trim().to_string(),
            brand: dto.brand.trim().to_string(),
            price: dto.price,
            stock_qty: dto.stock_qty,
            image_url: non_empty(dto.image_url.clone()),
            is_active: dto.is_active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProductDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.description.trim().to_string();
        self.base.comment = non_empty(dto.comment.clone());
        self.category = dto.category.trim().to_string();
        self.brand = dto.brand.trim().to_string();
        self.price = dto.price;
        self.stock_qty = dto.stock_qty;
        self.image_url = non_empty(dto.image_url.clone());
        self.is_active = dto.is_active;
    }

    /// Изменить остаток на `delta`. Остаток не может уйти в минус.
    pub fn adjust_stock(&mut self, delta: i32) -> Result<i32, String> {
        let next = self.stock_qty + delta;
        if next < 0 {
            return Err(format!(
                "Недостаточно остатка: есть {}, списывается {}",
                self.stock_qty, -delta
            ));
        }
        self.stock_qty = next;
        Ok(next)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование товара не может быть пустым".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if self.stock_qty < 0 {
            return Err("Остаток не может быть отрицательным".into());
        }
        if let Some(url) = &self.image_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Ссылка на изображение должна начинаться с http:// или https://".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub stock_qty: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            category: String::new(),
            brand: String::new(),
            price: 0.0,
            stock_qty: 0,
            image_url: None,
            is_active: true,
            comment: None,
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.to_string_id()),
            code: Some(p.base.code.clone()),
            description: p.base.description.clone(),
            category: p.category.clone(),
            brand: p.brand.clone(),
            price: p.price,
            stock_qty: p.stock_qty,
            image_url: p.image_url.clone(),
            is_active: p.is_active,
            comment: p.base.comment.clone(),
        }
    }
}

/// Запрос на изменение остатка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustRequest {
    pub delta: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shampoo() -> Product {
        Product::new_for_insert(
            "P-1".into(),
            &ProductDto {
                description: "Шампунь".into(),
                price: 990.0,
                stock_qty: 3,
                ..Default::default()
            },
        )
    }

    #[test]
    fn stock_never_goes_negative() {
        let mut p = shampoo();
        assert_eq!(p.adjust_stock(-2), Ok(1));
        assert!(p.adjust_stock(-2).is_err());
        assert_eq!(p.stock_qty, 1);
        assert_eq!(p.adjust_stock(10), Ok(11));
    }

    #[test]
    fn image_url_must_be_http() {
        let mut p = shampoo();
        p.image_url = Some("ftp://img".into());
        assert!(p.validate().is_err());
        p.image_url = Some("https://cdn.example.com/a.png".into());
        assert!(p.validate().is_ok());
    }
}
