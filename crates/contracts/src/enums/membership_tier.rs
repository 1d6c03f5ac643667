use serde::{Deserialize, Serialize};

/// Уровень абонемента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MembershipTier {
    #[default]
    Basic,
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    pub fn code(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "basic",
            MembershipTier::Silver => "silver",
            MembershipTier::Gold => "gold",
            MembershipTier::Platinum => "platinum",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "Базовый",
            MembershipTier::Silver => "Серебряный",
            MembershipTier::Gold => "Золотой",
            MembershipTier::Platinum => "Платиновый",
        }
    }

    pub fn all() -> Vec<MembershipTier> {
        vec![
            MembershipTier::Basic,
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Platinum,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Вычисляемый статус абонемента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Upcoming,
    Active,
    Frozen,
    Expired,
}

impl MembershipStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MembershipStatus::Upcoming => "upcoming",
            MembershipStatus::Active => "active",
            MembershipStatus::Frozen => "frozen",
            MembershipStatus::Expired => "expired",
        }
    }

    pub fn all() -> Vec<MembershipStatus> {
        vec![
            MembershipStatus::Active,
            MembershipStatus::Upcoming,
            MembershipStatus::Frozen,
            MembershipStatus::Expired,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipStatus::Upcoming => "Не начат",
            MembershipStatus::Active => "Активен",
            MembershipStatus::Frozen => "Заморожен",
            MembershipStatus::Expired => "Истёк",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MembershipStatus::Upcoming => "badge badge--info",
            MembershipStatus::Active => "badge badge--success",
            MembershipStatus::Frozen => "badge badge--warning",
            MembershipStatus::Expired => "badge badge--neutral",
        }
    }
}
