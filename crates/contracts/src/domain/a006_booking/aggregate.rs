use super::totals::{self, BookingTotals, DEFAULT_DURATION_MINUTES};
use crate::domain::common::base_aggregate::non_empty;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::booking_status::BookingStatus;
use crate::enums::payment_method::PaymentMethod;
use crate::shared::clock::{normalize_hhmm, parse_hhmm, MINUTES_PER_DAY};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(BookingId);

/// Верхняя граница количества в строке услуг
pub const MAX_LINE_QUANTITY: i32 = 1000;

// ============================================================================
// Lines
// ============================================================================

/// Строка услуги в записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    /// Ссылка на услугу прайс-листа (a003_salon_service), если выбрана из справочника
    pub service_ref: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub duration_minutes: i32,
}

impl Default for ServiceLine {
    fn default() -> Self {
        Self {
            service_ref: None,
            name: String::new(),
            price: 0.0,
            quantity: 1,
            duration_minutes: 60,
        }
    }
}

/// Строка оплаты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLine {
    pub method: PaymentMethod,
    pub amount: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись клиента к мастеру
///
/// `base.description` хранит имя клиента.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(flatten)]
    pub base: BaseAggregate<BookingId>,

    pub customer_phone: Option<String>,
    pub services: Vec<ServiceLine>,
    pub booking_date: NaiveDate,
    /// "HH:MM"
    pub booking_time: String,
    pub branch_ref: String,
    pub branch_name: String,
    pub staff_ref: String,
    pub staff_name: String,
    pub status: BookingStatus,
    /// Итог к оплате, пересчитывается сервером при записи
    pub total_price: f64,
    /// Длительность в минутах, пересчитывается сервером при записи
    pub total_duration: i32,
    pub payment_method: Option<PaymentMethod>,
    pub payment_details: Vec<PaymentLine>,
    pub tip_amount: f64,
    pub discount: f64,
}

impl Booking {
    pub fn new_for_insert(code: String, dto: &BookingDto) -> Self {
        let mut base = BaseAggregate::new(BookingId::new_v4(), code, dto.customer_name.trim().to_string());
        base.comment = non_empty(dto.note.clone());

        let mut booking = Self {
            base,
            customer_phone: None,
            services: Vec::new(),
            booking_date: dto.booking_date,
            booking_time: String::new(),
            branch_ref: String::new(),
            branch_name: String::new(),
            staff_ref: String::new(),
            staff_name: String::new(),
            status: dto.status,
            total_price: 0.0,
            total_duration: 0,
            payment_method: None,
            payment_details: Vec::new(),
            tip_amount: 0.0,
            discount: 0.0,
        };
        booking.update(dto);
        booking
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn customer_name(&self) -> &str {
        &self.base.description
    }

    pub fn update(&mut self, dto: &BookingDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.customer_name.trim().to_string();
        self.base.comment = non_empty(dto.note.clone());
        self.customer_phone = non_empty(dto.customer_phone.clone());
        self.services = dto
            .services
            .iter()
            .map(|l| ServiceLine {
                name: l.name.trim().to_string(),
                ..l.clone()
            })
            .collect();
        self.booking_date = dto.booking_date;
        // Некорректное время сохраняется как есть, его отклонит validate()
        self.booking_time = normalize_hhmm(&dto.booking_time)
            .unwrap_or_else(|| dto.booking_time.trim().to_string());
        self.branch_ref = dto.branch_ref.clone();
        self.branch_name = dto.branch_name.clone();
        self.staff_ref = dto.staff_ref.clone();
        self.staff_name = dto.staff_name.clone();
        self.status = dto.status;
        self.payment_method = dto.payment_method;
        self.payment_details = dto
            .payment_details
            .iter()
            .filter(|p| p.amount != 0.0)
            .cloned()
            .collect();
        self.tip_amount = dto.tip_amount;
        self.discount = dto.discount;
    }

    pub fn totals(&self) -> BookingTotals {
        BookingTotals::compute(
            &self.services,
            &self.payment_details,
            self.tip_amount,
            self.discount,
        )
    }

    /// Пересчитать хранимые итоги из строк. Значения от клиента не используются.
    pub fn recalculate(&mut self) {
        let t = self.totals();
        self.total_price = totals::round2(t.final_total);
        self.total_duration = t.total_duration;
    }

    /// Начало записи в минутах от полуночи
    pub fn start_minutes(&self) -> Option<i32> {
        parse_hhmm(&self.booking_time)
    }

    /// Длительность для размещения в сетке: сохранённая, иначе по строкам, иначе один слот
    pub fn effective_duration(&self) -> i32 {
        if self.total_duration > 0 {
            return self.total_duration;
        }
        let from_lines = totals::total_duration(&self.services);
        if from_lines > 0 {
            from_lines
        } else {
            DEFAULT_DURATION_MINUTES
        }
    }

    /// Краткое перечисление услуг для ячейки сетки и списка
    pub fn services_summary(&self) -> String {
        self.services
            .iter()
            .map(|l| {
                if l.quantity > 1 {
                    format!("{} ×{}", l.name, l.quantity)
                } else {
                    l.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя клиента не может быть пустым".into());
        }
        if self.services.is_empty() {
            return Err("Добавьте хотя бы одну услугу".into());
        }
        for (idx, line) in self.services.iter().enumerate() {
            let n = idx + 1;
            if line.name.trim().is_empty() {
                return Err(format!("Строка услуг {}: не указано название", n));
            }
            if line.quantity < 1 {
                return Err(format!("Строка услуг {}: количество должно быть не меньше 1", n));
            }
            if line.quantity > MAX_LINE_QUANTITY {
                return Err(format!(
                    "Строка услуг {}: количество не может превышать {}",
                    n, MAX_LINE_QUANTITY
                ));
            }
            if line.price < 0.0 {
                return Err(format!("Строка услуг {}: цена не может быть отрицательной", n));
            }
            if line.duration_minutes < 0 {
                return Err(format!("Строка услуг {}: длительность не может быть отрицательной", n));
            }
            if line.duration_minutes > MINUTES_PER_DAY {
                return Err(format!("Строка услуг {}: длительность больше суток", n));
            }
        }
        if self.tip_amount < 0.0 {
            return Err("Чаевые не могут быть отрицательными".into());
        }
        if self.discount < 0.0 {
            return Err("Скидка не может быть отрицательной".into());
        }
        if self.start_minutes().is_none() {
            return Err(format!("Некорректное время записи: \"{}\"", self.booking_time));
        }
        if self.branch_ref.trim().is_empty() {
            return Err("Необходимо указать филиал".into());
        }
        if self.staff_ref.trim().is_empty() {
            return Err("Необходимо указать мастера".into());
        }

        let t = self.totals();
        if self.discount > t.services_total + t.tip + totals::PAYMENT_EPSILON {
            return Err("Скидка превышает сумму услуг и чаевых".into());
        }
        for (idx, p) in self.payment_details.iter().enumerate() {
            if p.amount < 0.0 {
                return Err(format!("Строка оплаты {}: сумма не может быть отрицательной", idx + 1));
            }
            if p.method == PaymentMethod::Mixed {
                return Err(format!(
                    "Строка оплаты {}: способ \"Смешанная\" допустим только как итоговый",
                    idx + 1
                ));
            }
        }
        if self.payment_method == Some(PaymentMethod::Mixed) && self.payment_details.len() < 2 {
            return Err("Смешанная оплата требует минимум двух строк оплаты".into());
        }
        let must_reconcile =
            !self.payment_details.is_empty() || self.status == BookingStatus::Completed;
        if must_reconcile && !t.is_reconciled() {
            return Err(format!(
                "Сумма оплат {:.2} не совпадает с итогом {:.2}",
                t.payments_total, t.final_total
            ));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.before_write();
    }
}

impl AggregateRoot for Booking {
    type Id = BookingId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "booking"
    }

    fn element_name() -> &'static str {
        "Запись"
    }

    fn list_name() -> &'static str {
        "Записи"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub services: Vec<ServiceLine>,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub branch_ref: String,
    pub branch_name: String,
    pub staff_ref: String,
    pub staff_name: String,
    pub status: BookingStatus,
    pub payment_method: Option<PaymentMethod>,
    pub payment_details: Vec<PaymentLine>,
    pub tip_amount: f64,
    pub discount: f64,
    pub note: Option<String>,
}

impl Default for BookingDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            customer_name: String::new(),
            customer_phone: None,
            services: vec![ServiceLine::default()],
            booking_date: chrono::Utc::now().date_naive(),
            booking_time: "10:00".into(),
            branch_ref: String::new(),
            branch_name: String::new(),
            staff_ref: String::new(),
            staff_name: String::new(),
            status: BookingStatus::Pending,
            payment_method: None,
            payment_details: Vec::new(),
            tip_amount: 0.0,
            discount: 0.0,
            note: None,
        }
    }
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            id: Some(b.to_string_id()),
            code: Some(b.base.code.clone()),
            customer_name: b.base.description.clone(),
            customer_phone: b.customer_phone.clone(),
            services: b.services.clone(),
            booking_date: b.booking_date,
            booking_time: b.booking_time.clone(),
            branch_ref: b.branch_ref.clone(),
            branch_name: b.branch_name.clone(),
            staff_ref: b.staff_ref.clone(),
            staff_name: b.staff_name.clone(),
            status: b.status,
            payment_method: b.payment_method,
            payment_details: b.payment_details.clone(),
            tip_amount: b.tip_amount,
            discount: b.discount,
            note: b.base.comment.clone(),
        }
    }
}

impl BookingDto {
    /// Итоги по данным формы (для живой панели итогов)
    pub fn totals(&self) -> BookingTotals {
        BookingTotals::compute(
            &self.services,
            &self.payment_details,
            self.tip_amount,
            self.discount,
        )
    }
}

/// Запрос на смену статуса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: BookingStatus,
}

/// Параметры выборки списка записей
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> BookingDto {
        BookingDto {
            customer_name: "Мария Петрова".into(),
            services: vec![
                ServiceLine {
                    service_ref: None,
                    name: "Стрижка".into(),
                    price: 2000.0,
                    quantity: 1,
                    duration_minutes: 60,
                },
                ServiceLine {
                    service_ref: None,
                    name: "Укладка".into(),
                    price: 700.0,
                    quantity: 1,
                    duration_minutes: 30,
                },
            ],
            booking_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            booking_time: "11:30".into(),
            branch_ref: "branch-1".into(),
            branch_name: "Центр".into(),
            staff_ref: "staff-1".into(),
            staff_name: "Анна".into(),
            ..Default::default()
        }
    }

    #[test]
    fn totals_are_recalculated_on_write() {
        let mut dto = sample_dto();
        dto.tip_amount = 300.0;
        dto.discount = 200.0;
        let mut b = Booking::new_for_insert("BK-1".into(), &dto);
        b.total_price = 1.0;
        b.before_write();
        assert_eq!(b.total_price, 2800.0);
        assert_eq!(b.total_duration, 90);
        assert_eq!(b.effective_duration(), 90);
        assert_eq!(b.base.metadata.version, 1);
    }

    #[test]
    fn completed_booking_must_reconcile() {
        let mut dto = sample_dto();
        dto.status = BookingStatus::Completed;
        let b = Booking::new_for_insert("BK-1".into(), &dto);
        assert!(b.validate().is_err());

        dto.payment_method = Some(PaymentMethod::Mixed);
        dto.payment_details = vec![
            PaymentLine { method: PaymentMethod::Card, amount: 2000.0 },
            PaymentLine { method: PaymentMethod::Cash, amount: 700.0 },
        ];
        let b = Booking::new_for_insert("BK-1".into(), &dto);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn pending_booking_without_payments_is_valid() {
        let b = Booking::new_for_insert("BK-1".into(), &sample_dto());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn mixed_requires_two_lines() {
        let mut dto = sample_dto();
        dto.payment_method = Some(PaymentMethod::Mixed);
        dto.payment_details = vec![PaymentLine { method: PaymentMethod::Card, amount: 2700.0 }];
        assert!(Booking::new_for_insert("BK".into(), &dto).validate().is_err());
    }

    #[test]
    fn booking_time_is_stored_as_hh_mm() {
        let mut dto = sample_dto();
        dto.booking_time = " 9:15 ".into();
        let b = Booking::new_for_insert("BK".into(), &dto);
        assert_eq!(b.booking_time, "09:15");
        assert_eq!(b.start_minutes(), Some(555));

        dto.booking_time = "14:30:00".into();
        let mut b = b;
        b.update(&dto);
        assert_eq!(b.booking_time, "14:30");
    }

    #[test]
    fn huge_quantity_is_rejected_without_overflow() {
        let mut dto = sample_dto();
        dto.services.truncate(1);
        dto.services[0].quantity = 50_000_000;
        let b = Booking::new_for_insert("BK".into(), &dto);
        let err = b.validate().unwrap_err();
        assert!(err.contains("количество"), "{}", err);

        dto.services[0].quantity = 1;
        dto.services[0].duration_minutes = MINUTES_PER_DAY + 1;
        assert!(Booking::new_for_insert("BK".into(), &dto).validate().is_err());
    }

    #[test]
    fn discount_cannot_exceed_services_and_tip() {
        let mut dto = sample_dto();
        dto.discount = 5000.0;
        assert!(Booking::new_for_insert("BK".into(), &dto).validate().is_err());
    }

    #[test]
    fn bad_time_is_rejected() {
        let mut dto = sample_dto();
        dto.booking_time = "25:00".into();
        assert!(Booking::new_for_insert("BK".into(), &dto).validate().is_err());

        for raw in ["10:00:junk", "+9:15", "9:5"] {
            dto.booking_time = raw.into();
            assert!(Booking::new_for_insert("BK".into(), &dto).validate().is_err(), "{}", raw);
        }
    }

    #[test]
    fn zero_amount_payment_lines_are_dropped() {
        let mut dto = sample_dto();
        dto.payment_details = vec![
            PaymentLine { method: PaymentMethod::Card, amount: 2700.0 },
            PaymentLine { method: PaymentMethod::Cash, amount: 0.0 },
        ];
        let b = Booking::new_for_insert("BK".into(), &dto);
        assert_eq!(b.payment_details.len(), 1);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn effective_duration_falls_back_to_one_slot() {
        let mut dto = sample_dto();
        for l in dto.services.iter_mut() {
            l.duration_minutes = 0;
        }
        let b = Booking::new_for_insert("BK".into(), &dto);
        assert_eq!(b.effective_duration(), DEFAULT_DURATION_MINUTES);
        assert_eq!(b.services_summary(), "Стрижка, Укладка");
    }
}
