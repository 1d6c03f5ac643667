//! Выгрузка списка записей в CSV (разделитель ";", UTF-8 с BOM для Excel)

use contracts::domain::a006_booking::aggregate::Booking;

use crate::shared::format::format_money;

const HEADERS: [&str; 16] = [
    "Код",
    "Дата",
    "Время",
    "Клиент",
    "Телефон",
    "Филиал",
    "Мастер",
    "Услуги",
    "Длительность, мин",
    "Статус",
    "Сумма услуг",
    "Чаевые",
    "Скидка",
    "Итого",
    "Оплачено",
    "Способ оплаты",
];

pub fn bookings_to_csv<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for b in bookings {
        let t = b.totals();
        let payment = match (&b.payment_method, b.payment_details.as_slice()) {
            (Some(m), _) => m.display_name().to_string(),
            (None, [single]) => single.method.display_name().to_string(),
            _ => String::new(),
        };
        writer.write_record([
            b.base.code.clone(),
            b.booking_date.format("%d.%m.%Y").to_string(),
            b.booking_time.clone(),
            b.customer_name().to_string(),
            b.customer_phone.clone().unwrap_or_default(),
            b.branch_name.clone(),
            b.staff_name.clone(),
            b.services_summary(),
            b.effective_duration().to_string(),
            b.status.display_name().to_string(),
            format_money(t.services_total),
            format_money(t.tip),
            format_money(t.discount),
            format_money(t.final_total),
            format_money(t.payments_total),
            payment,
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    let body = String::from_utf8(bytes)?;
    Ok(format!("\u{FEFF}{}", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a006_booking::aggregate::{BookingDto, PaymentLine, ServiceLine};
    use contracts::enums::payment_method::PaymentMethod;

    #[test]
    fn writes_header_and_rows() {
        let dto = BookingDto {
            customer_name: "Мария; Петрова".into(),
            services: vec![ServiceLine {
                name: "Стрижка".into(),
                price: 2500.0,
                quantity: 1,
                duration_minutes: 60,
                service_ref: None,
            }],
            booking_date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            booking_time: "12:15".into(),
            branch_ref: "b".into(),
            branch_name: "Центр".into(),
            staff_ref: "s".into(),
            staff_name: "Анна".into(),
            tip_amount: 300.0,
            payment_details: vec![PaymentLine {
                method: PaymentMethod::Card,
                amount: 2800.0,
            }],
            ..Default::default()
        };
        let b = Booking::new_for_insert("BK-1".into(), &dto);
        let csv = bookings_to_csv([&b]).unwrap();

        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Код;Дата;Время"));
        // Поле с разделителем экранируется кавычками
        assert!(lines[1].contains("\"Мария; Петрова\""));
        assert!(lines[1].contains("07.04.2025;12:15"));
        assert!(lines[1].contains("2 800.00;2 800.00;Карта"));
    }
}
