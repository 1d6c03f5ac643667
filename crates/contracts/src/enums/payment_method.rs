use serde::{Deserialize, Serialize};

/// Способ оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Membership,
    GiftCard,
    /// Только как итоговый способ, если оплата разбита на несколько строк
    Mixed,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Membership => "membership",
            PaymentMethod::GiftCard => "gift_card",
            PaymentMethod::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Наличные",
            PaymentMethod::Card => "Карта",
            PaymentMethod::Transfer => "Перевод",
            PaymentMethod::Membership => "Абонемент",
            PaymentMethod::GiftCard => "Сертификат",
            PaymentMethod::Mixed => "Смешанная",
        }
    }

    /// Способы, допустимые в строке оплаты
    pub fn line_methods() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Transfer,
            PaymentMethod::Membership,
            PaymentMethod::GiftCard,
        ]
    }

    pub fn all() -> Vec<PaymentMethod> {
        let mut all = Self::line_methods();
        all.push(PaymentMethod::Mixed);
        all
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
