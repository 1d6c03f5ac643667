use crate::domain::common::base_aggregate::non_empty;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::membership_tier::{MembershipStatus, MembershipTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(MembershipId);

/// Абонемент клиента
///
/// `base.description` хранит имя клиента.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    #[serde(flatten)]
    pub base: BaseAggregate<MembershipId>,

    pub customer_phone: Option<String>,
    pub tier: MembershipTier,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0 = безлимит
    pub visits_total: i32,
    pub visits_used: i32,
    pub price: f64,
    pub is_frozen: bool,
}

impl Membership {
    pub fn new_for_insert(code: String, dto: &MembershipDto) -> Self {
        let mut base = BaseAggregate::new(
            MembershipId::new_v4(),
            code,
            dto.customer_name.trim().to_string(),
        );
        base.comment = non_empty(dto.comment.clone());

        Self {
            base,
            customer_phone: non_empty(dto.customer_phone.clone()),
            tier: dto.tier,
            start_date: dto.start_date,
            end_date: dto.end_date,
            visits_total: dto.visits_total,
            visits_used: dto.visits_used,
            price: dto.price,
            is_frozen: dto.is_frozen,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn customer_name(&self) -> &str {
        &self.base.description
    }

    pub fn update(&mut self, dto: &MembershipDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.customer_name.trim().to_string();
        self.base.comment = non_empty(dto.comment.clone());
        self.customer_phone = non_empty(dto.customer_phone.clone());
        self.tier = dto.tier;
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.visits_total = dto.visits_total;
        self.visits_used = dto.visits_used;
        self.price = dto.price;
        self.is_frozen = dto.is_frozen;
    }

    /// Статус на дату `today`
    pub fn status_on(&self, today: NaiveDate) -> MembershipStatus {
        if self.is_frozen {
            return MembershipStatus::Frozen;
        }
        let visits_exhausted = self.visits_total > 0 && self.visits_used >= self.visits_total;
        if today > self.end_date || visits_exhausted {
            return MembershipStatus::Expired;
        }
        if today < self.start_date {
            return MembershipStatus::Upcoming;
        }
        MembershipStatus::Active
    }

    /// Остаток посещений, `None` для безлимитного абонемента
    pub fn visits_left(&self) -> Option<i32> {
        if self.visits_total == 0 {
            None
        } else {
            Some((self.visits_total - self.visits_used).max(0))
        }
    }

    /// Списать посещение. Возможно только для активного абонемента.
    pub fn use_visit(&mut self, today: NaiveDate) -> Result<(), String> {
        let status = self.status_on(today);
        if status != MembershipStatus::Active {
            return Err(format!(
                "Нельзя списать посещение: абонемент в статусе \"{}\"",
                status.display_name()
            ));
        }
        self.visits_used += 1;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя клиента не может быть пустым".into());
        }
        if self.end_date < self.start_date {
            return Err("Дата окончания раньше даты начала".into());
        }
        if self.visits_total < 0 || self.visits_used < 0 {
            return Err("Количество посещений не может быть отрицательным".into());
        }
        if self.visits_total > 0 && self.visits_used > self.visits_total {
            return Err("Использовано больше посещений, чем включено в абонемент".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }
}

impl AggregateRoot for Membership {
    type Id = MembershipId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "membership"
    }

    fn element_name() -> &'static str {
        "Абонемент"
    }

    fn list_name() -> &'static str {
        "Абонементы"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub tier: MembershipTier,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub visits_total: i32,
    pub visits_used: i32,
    pub price: f64,
    pub is_frozen: bool,
    pub comment: Option<String>,
}

impl Default for MembershipDto {
    fn default() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            id: None,
            code: None,
            customer_name: String::new(),
            customer_phone: None,
            tier: MembershipTier::Basic,
            start_date: today,
            end_date: today + chrono::Duration::days(30),
            visits_total: 10,
            visits_used: 0,
            price: 0.0,
            is_frozen: false,
            comment: None,
        }
    }
}

impl From<&Membership> for MembershipDto {
    fn from(m: &Membership) -> Self {
        Self {
            id: Some(m.to_string_id()),
            code: Some(m.base.code.clone()),
            customer_name: m.base.description.clone(),
            customer_phone: m.customer_phone.clone(),
            tier: m.tier,
            start_date: m.start_date,
            end_date: m.end_date,
            visits_total: m.visits_total,
            visits_used: m.visits_used,
            price: m.price,
            is_frozen: m.is_frozen,
            comment: m.base.comment.clone(),
        }
    }
}

/// Запрос на заморозку/разморозку
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeRequest {
    pub frozen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn membership(total: i32, used: i32) -> Membership {
        Membership::new_for_insert(
            "M-1".into(),
            &MembershipDto {
                customer_name: "Ольга".into(),
                start_date: d("2025-03-01"),
                end_date: d("2025-03-31"),
                visits_total: total,
                visits_used: used,
                ..Default::default()
            },
        )
    }

    #[test]
    fn status_follows_dates_and_visits() {
        let m = membership(10, 0);
        assert_eq!(m.status_on(d("2025-02-28")), MembershipStatus::Upcoming);
        assert_eq!(m.status_on(d("2025-03-01")), MembershipStatus::Active);
        assert_eq!(m.status_on(d("2025-03-31")), MembershipStatus::Active);
        assert_eq!(m.status_on(d("2025-04-01")), MembershipStatus::Expired);

        let used_up = membership(5, 5);
        assert_eq!(used_up.status_on(d("2025-03-10")), MembershipStatus::Expired);

        let mut frozen = membership(10, 0);
        frozen.is_frozen = true;
        assert_eq!(frozen.status_on(d("2025-04-10")), MembershipStatus::Frozen);
    }

    #[test]
    fn unlimited_never_runs_out_of_visits() {
        let mut m = membership(0, 0);
        for _ in 0..50 {
            m.use_visit(d("2025-03-15")).unwrap();
        }
        assert_eq!(m.visits_left(), None);
        assert_eq!(m.status_on(d("2025-03-15")), MembershipStatus::Active);
    }

    #[test]
    fn use_visit_requires_active() {
        let mut m = membership(2, 1);
        assert!(m.use_visit(d("2025-03-02")).is_ok());
        assert_eq!(m.visits_left(), Some(0));
        assert!(m.use_visit(d("2025-03-03")).is_err());
        assert_eq!(m.visits_used, 2);
    }

    #[test]
    fn end_before_start_is_invalid() {
        let mut m = membership(10, 0);
        m.end_date = d("2025-02-01");
        assert!(m.validate().is_err());
    }
}
