use crate::domain::a006_booking::aggregate::Booking;
use crate::domain::a006_booking::totals::round2;
use crate::enums::booking_status::BookingStatus;
use crate::enums::payment_method::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Сумма оплат одним способом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub amount: f64,
}

/// Итоги дня по записям, размещённым в сетке
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub bookings_count: usize,
    pub completed_count: usize,
    pub services_total: f64,
    pub tips: f64,
    pub discounts: f64,
    pub final_total: f64,
    pub payments_total: f64,
    pub total_duration: i32,
    /// По строкам оплаты, в порядке `PaymentMethod::line_methods`
    pub by_method: Vec<MethodTotal>,
    /// Завершённые записи, у которых оплаты не сходятся с итогом
    pub unreconciled_completed: usize,
}

impl DaySummary {
    /// Отменённые записи не учитываются
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        let mut s = DaySummary::default();
        let mut by_method: BTreeMap<PaymentMethod, f64> = BTreeMap::new();

        for b in bookings {
            if !b.status.occupies_schedule() {
                continue;
            }
            let t = b.totals();
            s.bookings_count += 1;
            s.services_total += t.services_total;
            s.tips += t.tip;
            s.discounts += t.discount;
            s.final_total += t.final_total;
            s.payments_total += t.payments_total;
            s.total_duration += b.effective_duration();
            for p in &b.payment_details {
                *by_method.entry(p.method).or_insert(0.0) += p.amount;
            }
            if b.status == BookingStatus::Completed {
                s.completed_count += 1;
                if !t.is_reconciled() {
                    s.unreconciled_completed += 1;
                }
            }
        }

        s.services_total = round2(s.services_total);
        s.tips = round2(s.tips);
        s.discounts = round2(s.discounts);
        s.final_total = round2(s.final_total);
        s.payments_total = round2(s.payments_total);
        s.by_method = PaymentMethod::line_methods()
            .into_iter()
            .filter_map(|m| {
                by_method.get(&m).map(|amount| MethodTotal {
                    method: m,
                    amount: round2(*amount),
                })
            })
            .collect();
        s
    }

    /// Ещё не оплачено по дню
    pub fn outstanding(&self) -> f64 {
        round2(self.final_total - self.payments_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_booking::aggregate::{BookingDto, PaymentLine, ServiceLine};
    use chrono::NaiveDate;

    fn booking(price: f64, tip: f64, discount: f64, status: BookingStatus, payments: Vec<PaymentLine>) -> Booking {
        let dto = BookingDto {
            customer_name: "Клиент".into(),
            services: vec![ServiceLine {
                name: "Маникюр".into(),
                price,
                duration_minutes: 45,
                ..Default::default()
            }],
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            booking_time: "10:00".into(),
            branch_ref: "b".into(),
            staff_ref: "s".into(),
            status,
            tip_amount: tip,
            discount,
            payment_details: payments,
            ..Default::default()
        };
        let mut b = Booking::new_for_insert("BK".into(), &dto);
        b.recalculate();
        b
    }

    #[test]
    fn sums_and_groups_by_method() {
        let list = vec![
            booking(
                1500.0,
                200.0,
                100.0,
                BookingStatus::Completed,
                vec![
                    PaymentLine { method: PaymentMethod::Card, amount: 1000.0 },
                    PaymentLine { method: PaymentMethod::Cash, amount: 600.0 },
                ],
            ),
            booking(
                800.0,
                0.0,
                0.0,
                BookingStatus::Completed,
                vec![PaymentLine { method: PaymentMethod::Card, amount: 500.0 }],
            ),
            booking(999.0, 0.0, 0.0, BookingStatus::Cancelled, vec![]),
            booking(400.0, 0.0, 0.0, BookingStatus::Pending, vec![]),
        ];
        let s = DaySummary::from_bookings(&list);
        assert_eq!(s.bookings_count, 3);
        assert_eq!(s.completed_count, 2);
        assert_eq!(s.services_total, 2700.0);
        assert_eq!(s.tips, 200.0);
        assert_eq!(s.discounts, 100.0);
        assert_eq!(s.final_total, 2800.0);
        assert_eq!(s.payments_total, 2100.0);
        assert_eq!(s.outstanding(), 700.0);
        assert_eq!(s.total_duration, 135);
        assert_eq!(s.unreconciled_completed, 1);
        assert_eq!(
            s.by_method,
            vec![
                MethodTotal { method: PaymentMethod::Cash, amount: 600.0 },
                MethodTotal { method: PaymentMethod::Card, amount: 1500.0 },
            ]
        );
    }
}
