//! Финансовые итоги записи: услуги, чаевые, скидка, сверка оплат

use super::aggregate::{PaymentLine, ServiceLine};
use crate::enums::payment_method::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Допустимое расхождение суммы строк оплаты и итога записи
pub const PAYMENT_EPSILON: f64 = 0.01;

/// Погрешность f64 при сравнении с `PAYMENT_EPSILON`
const FLOAT_SLACK: f64 = 1e-9;

/// Длительность по умолчанию, если в записи нет длительности
pub const DEFAULT_DURATION_MINUTES: i32 = 15;

/// Сумма услуг: Σ price × quantity
pub fn services_total(lines: &[ServiceLine]) -> f64 {
    lines
        .iter()
        .map(|l| l.price * f64::from(l.quantity))
        .sum()
}

/// Длительность услуг в минутах: Σ duration × quantity, с насыщением на границах i32
pub fn total_duration(lines: &[ServiceLine]) -> i32 {
    lines
        .iter()
        .map(|l| l.duration_minutes.saturating_mul(l.quantity))
        .fold(0i32, i32::saturating_add)
}

pub fn payments_total(lines: &[PaymentLine]) -> f64 {
    lines.iter().map(|l| l.amount).sum()
}

/// Итоговый способ оплаты по строкам: один способ как есть, несколько строк дают `Mixed`
pub fn header_method(lines: &[PaymentLine]) -> Option<PaymentMethod> {
    match lines {
        [] => None,
        [single] => Some(single.method),
        _ => Some(PaymentMethod::Mixed),
    }
}

/// Округление денежной суммы до копеек
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Итоги записи
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingTotals {
    pub services_total: f64,
    pub tip: f64,
    pub discount: f64,
    /// services_total + tip − discount
    pub final_total: f64,
    pub payments_total: f64,
    pub total_duration: i32,
}

impl BookingTotals {
    pub fn compute(
        services: &[ServiceLine],
        payments: &[PaymentLine],
        tip: f64,
        discount: f64,
    ) -> Self {
        let services_total = services_total(services);
        Self {
            services_total,
            tip,
            discount,
            final_total: services_total + tip - discount,
            payments_total: payments_total(payments),
            total_duration: total_duration(services),
        }
    }

    /// Сколько осталось оплатить (отрицательное значение означает переплату)
    pub fn balance(&self) -> f64 {
        round2(self.final_total - self.payments_total)
    }

    /// Строки оплаты сходятся с итогом в пределах `PAYMENT_EPSILON`
    pub fn is_reconciled(&self) -> bool {
        (self.payments_total - self.final_total).abs() <= PAYMENT_EPSILON + FLOAT_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, qty: i32, minutes: i32) -> ServiceLine {
        ServiceLine {
            service_ref: None,
            name: "x".into(),
            price,
            quantity: qty,
            duration_minutes: minutes,
        }
    }

    fn pay(method: PaymentMethod, amount: f64) -> PaymentLine {
        PaymentLine { method, amount }
    }

    #[test]
    fn final_total_is_services_plus_tip_minus_discount() {
        let t = BookingTotals::compute(&[line(1500.0, 2, 45), line(800.0, 1, 30)], &[], 300.0, 500.0);
        assert_eq!(t.services_total, 3800.0);
        assert_eq!(t.final_total, 3600.0);
        assert_eq!(t.total_duration, 120);
        assert_eq!(t.balance(), 3600.0);
    }

    #[test]
    fn reconciliation_tolerates_one_cent() {
        let services = [line(1000.0, 1, 60)];
        let exact = BookingTotals::compute(&services, &[pay(PaymentMethod::Card, 1000.0)], 0.0, 0.0);
        assert!(exact.is_reconciled());

        let within = BookingTotals::compute(
            &services,
            &[pay(PaymentMethod::Card, 600.0), pay(PaymentMethod::Cash, 399.99)],
            0.0,
            0.0,
        );
        assert!(within.is_reconciled());

        let outside = BookingTotals::compute(&services, &[pay(PaymentMethod::Cash, 999.98)], 0.0, 0.0);
        assert!(!outside.is_reconciled());
        assert_eq!(outside.balance(), 0.02);
    }

    #[test]
    fn float_noise_does_not_break_reconciliation() {
        let services = [line(0.1, 3, 15)];
        let t = BookingTotals::compute(&services, &[pay(PaymentMethod::Cash, 0.3)], 0.0, 0.0);
        assert!(t.is_reconciled());
    }

    #[test]
    fn duration_saturates_instead_of_overflowing() {
        assert_eq!(total_duration(&[line(0.0, 50_000_000, 60)]), i32::MAX);
        assert_eq!(
            total_duration(&[line(0.0, 1, i32::MAX), line(0.0, 1, 30)]),
            i32::MAX
        );
    }

    #[test]
    fn header_method_follows_lines() {
        assert_eq!(header_method(&[]), None);
        assert_eq!(
            header_method(&[pay(PaymentMethod::Card, 100.0)]),
            Some(PaymentMethod::Card)
        );
        assert_eq!(
            header_method(&[pay(PaymentMethod::Card, 100.0), pay(PaymentMethod::Cash, 50.0)]),
            Some(PaymentMethod::Mixed)
        );
    }
}
