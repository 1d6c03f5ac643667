use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::domain::common::base_aggregate::non_empty;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(BranchId);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Филиал салона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(flatten)]
    pub base: BaseAggregate<BranchId>,

    pub address: String,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl Branch {
    pub fn new_for_insert(code: String, dto: &BranchDto) -> Self {
        let mut base = BaseAggregate::new(BranchId::new_v4(), code, dto.description.trim().to_string());
        base.comment = non_empty(dto.comment.clone());

        Self {
            base,
            address: dto.address.trim().to_string(),
            phone: non_empty(dto.phone.clone()),
            is_active: dto.is_active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &BranchDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.description.trim().to_string();
        self.base.comment = non_empty(dto.comment.clone());
        self.address = dto.address.trim().to_string();
        self.phone = non_empty(dto.phone.clone());
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название филиала не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

impl AggregateRoot for Branch {
    type Id = BranchId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "branch"
    }

    fn element_name() -> &'static str {
        "Филиал"
    }

    fn list_name() -> &'static str {
        "Филиалы"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub address: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for BranchDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            address: String::new(),
            phone: None,
            is_active: true,
            comment: None,
        }
    }
}

impl From<&Branch> for BranchDto {
    fn from(b: &Branch) -> Self {
        Self {
            id: Some(b.to_string_id()),
            code: Some(b.base.code.clone()),
            description: b.base.description.clone(),
            address: b.address.clone(),
            phone: b.phone.clone(),
            is_active: b.is_active,
            comment: b.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let branch = Branch::new_for_insert("BR-1".into(), &BranchDto::default());
        assert!(branch.validate().is_err());
    }

    #[test]
    fn update_keeps_code_when_not_provided() {
        let dto = BranchDto {
            description: "Центр".into(),
            ..Default::default()
        };
        let mut branch = Branch::new_for_insert("BR-1".into(), &dto);
        let mut edit = BranchDto::from(&branch);
        edit.code = None;
        edit.description = "Центр (Тверская)".into();
        branch.update(&edit);
        assert_eq!(branch.base.code, "BR-1");
        assert_eq!(branch.base.description, "Центр (Тверская)");
        assert!(branch.validate().is_ok());
    }
}
