use crate::domain::common::base_aggregate::non_empty;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(StaffId);

/// Мастер (сотрудник, к которому ведётся запись)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(flatten)]
    pub base: BaseAggregate<StaffId>,

    /// Ссылка на филиал (a001_branch)
    pub branch_ref: String,
    pub position: String,
    pub phone: Option<String>,
    /// Порядок колонки в сетке расписания
    pub sort_order: i32,
    pub is_active: bool,
}

impl Staff {
    pub fn new_for_insert(code: String, dto: &StaffDto) -> Self {
        let mut base = BaseAggregate::new(StaffId::new_v4(), code, dto.description.trim().to_string());
        base.comment = non_empty(dto.comment.clone());

        Self {
            base,
            branch_ref: dto.branch_ref.clone(),
            position: dto.position.trim().to_string(),
            phone: non_empty(dto.phone.clone()),
            sort_order: dto.sort_order,
            is_active: dto.is_active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &StaffDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.description.trim().to_string();
        self.base.comment = non_empty(dto.comment.clone());
        self.branch_ref = dto.branch_ref.clone();
        self.position = dto.position.trim().to_string();
        self.phone = non_empty(dto.phone.clone());
        self.sort_order = dto.sort_order;
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя мастера не может быть пустым".into());
        }
        if self.branch_ref.trim().is_empty() {
            return Err("Необходимо указать филиал".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

/// Упорядочивает мастеров для колонок сетки: sort_order, затем имя
pub fn sort_for_board(staff: &mut [Staff]) {
    staff.sort_by(|a, b| {
        a.sort_order.cmp(&b.sort_order).then_with(|| {
            a.base
                .description
                .to_lowercase()
                .cmp(&b.base.description.to_lowercase())
        })
    });
}

impl AggregateRoot for Staff {
    type Id = StaffId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "Мастер"
    }

    fn list_name() -> &'static str {
        "Мастера"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub branch_ref: String,
    pub position: String,
    pub phone: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for StaffDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            branch_ref: String::new(),
            position: String::new(),
            phone: None,
            sort_order: 100,
            is_active: true,
            comment: None,
        }
    }
}

impl From<&Staff> for StaffDto {
    fn from(s: &Staff) -> Self {
        Self {
            id: Some(s.to_string_id()),
            code: Some(s.base.code.clone()),
            description: s.base.description.clone(),
            branch_ref: s.branch_ref.clone(),
            position: s.position.clone(),
            phone: s.phone.clone(),
            sort_order: s.sort_order,
            is_active: s.is_active,
            comment: s.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(name: &str, order: i32) -> Staff {
        Staff::new_for_insert(
            "ST".into(),
            &StaffDto {
                description: name.into(),
                branch_ref: "b".into(),
                sort_order: order,
                ..Default::default()
            },
        )
    }

    #[test]
    fn board_order_is_sort_order_then_name() {
        let mut list = vec![staff("Вера", 2), staff("анна", 2), staff("Юлия", 1)];
        sort_for_board(&mut list);
        let names: Vec<_> = list.iter().map(|s| s.base.description.as_str()).collect();
        assert_eq!(names, vec!["Юлия", "анна", "Вера"]);
    }

    #[test]
    fn branch_is_required() {
        let mut s = staff("Анна", 1);
        s.branch_ref = String::new();
        assert!(s.validate().is_err());
    }
}
