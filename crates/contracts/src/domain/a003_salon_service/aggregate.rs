use crate::domain::common::base_aggregate::non_empty;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(SalonServiceId);

/// Услуга из прайс-листа салона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonService {
    #[serde(flatten)]
    pub base: BaseAggregate<SalonServiceId>,

    pub category: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl SalonService {
    pub fn new_for_insert(code: String, dto: &SalonServiceDto) -> Self {
        let mut base = BaseAggregate::new(
            SalonServiceId::new_v4(),
            code,
            dto.description.trim().to_string(),
        );
        base.comment = non_empty(dto.comment.clone());

        Self {
            base,
            category: dto.category.trim().to_string(),
            price: dto.price,
            duration_minutes: dto.duration_minutes,
            is_active: dto.is_active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &SalonServiceDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.description.trim().to_string();
        self.base.comment = non_empty(dto.comment.clone());
        self.category = dto.category.trim().to_string();
        self.price = dto.price;
        self.duration_minutes = dto.duration_minutes;
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название услуги не может быть пустым".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if self.duration_minutes <= 0 || self.duration_minutes % 5 != 0 {
            return Err("Длительность должна быть положительной и кратной 5 минутам".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

impl AggregateRoot for SalonService {
    type Id = SalonServiceId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "salon_service"
    }

    fn element_name() -> &'static str {
        "Услуга"
    }

    fn list_name() -> &'static str {
        "Услуги"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonServiceDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for SalonServiceDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            category: String::new(),
            price: 0.0,
            duration_minutes: 60,
            is_active: true,
            comment: None,
        }
    }
}

impl From<&SalonService> for SalonServiceDto {
    fn from(s: &SalonService) -> Self {
        Self {
            id: Some(s.to_string_id()),
            code: Some(s.base.code.clone()),
            description: s.base.description.clone(),
            category: s.category.clone(),
            price: s.price,
            duration_minutes: s.duration_minutes,
            is_active: s.is_active,
            comment: s.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_must_be_multiple_of_five() {
        let mut dto = SalonServiceDto {
            description: "Стрижка".into(),
            price: 1500.0,
            duration_minutes: 45,
            ..Default::default()
        };
        assert!(SalonService::new_for_insert("S1".into(), &dto).validate().is_ok());
        dto.duration_minutes = 42;
        assert!(SalonService::new_for_insert("S1".into(), &dto).validate().is_err());
        dto.duration_minutes = 0;
        assert!(SalonService::new_for_insert("S1".into(), &dto).validate().is_err());
    }
}
