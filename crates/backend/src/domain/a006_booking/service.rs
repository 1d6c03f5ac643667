use super::{export, repository};
use crate::domain::{a001_branch, a002_staff, a003_salon_service};
use crate::shared::data::changes;
use crate::shared::error::{not_found, validation};
use crate::shared::format::{format_money, short_code};
use crate::shared::logger::{self, CATEGORY_BOOKING};
use chrono::{Duration, Local};
use contracts::domain::a006_booking::aggregate::{
    Booking, BookingDto, BookingListQuery, PaymentLine, ServiceLine,
};
use contracts::domain::a006_booking::filter::BookingFilter;
use contracts::domain::common::AggregateRoot;
use contracts::enums::booking_status::BookingStatus;
use contracts::enums::payment_method::PaymentMethod;
use uuid::Uuid;

/// Филиал и мастер берутся из справочников: имена в записи перезаписываются
/// актуальными, мастер должен работать в выбранном филиале.
async fn resolve_refs(booking: &mut Booking) -> anyhow::Result<()> {
    let branch_id = Uuid::parse_str(&booking.branch_ref)
        .map_err(|_| validation("Необходимо указать филиал"))?;
    let branch = a001_branch::repository::get_by_id(branch_id)
        .await?
        .filter(|b| !b.base.metadata.is_deleted)
        .ok_or_else(|| validation("Филиал не найден"))?;

    let staff_id = Uuid::parse_str(&booking.staff_ref)
        .map_err(|_| validation("Необходимо указать мастера"))?;
    let staff = a002_staff::repository::get_by_id(staff_id)
        .await?
        .filter(|s| !s.base.metadata.is_deleted)
        .ok_or_else(|| validation("Мастер не найден"))?;
    if staff.branch_ref != booking.branch_ref {
        return Err(validation(format!(
            "Мастер {} не работает в филиале {}",
            staff.base.description, branch.base.description
        )));
    }

    booking.branch_name = branch.base.description;
    booking.staff_name = staff.base.description;
    Ok(())
}

pub async fn create(dto: BookingDto) -> anyhow::Result<Uuid> {
    let code = dto.code.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| short_code("BK"));
    let mut aggregate = Booking::new_for_insert(code, &dto);
    aggregate.validate().map_err(validation)?;
    resolve_refs(&mut aggregate).await?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    changes::notify(Booking::collection_name());
    logger::log(
        CATEGORY_BOOKING,
        &format!(
            "{}: создана запись {} {} {} к мастеру {}",
            aggregate.base.code,
            aggregate.customer_name(),
            aggregate.booking_date.format("%d.%m.%Y"),
            aggregate.booking_time,
            aggregate.staff_name
        ),
    );
    Ok(id)
}

pub async fn update(dto: BookingDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| validation("Некорректный id"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .filter(|b| !b.base.metadata.is_deleted)
        .ok_or_else(not_found)?;
    let old_status = aggregate.status;
    aggregate.update(&dto);
    aggregate.validate().map_err(validation)?;
    resolve_refs(&mut aggregate).await?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Booking::collection_name());
    if old_status != aggregate.status {
        log_status_change(&aggregate, old_status);
    }
    Ok(())
}

fn log_status_change(booking: &Booking, from: BookingStatus) {
    logger::log(
        CATEGORY_BOOKING,
        &format!(
            "{} ({}): статус {} → {}, итого {}",
            booking.base.code,
            booking.customer_name(),
            from.display_name(),
            booking.status.display_name(),
            format_money(booking.total_price)
        ),
    );
}

/// Сменить статус. Завершённая запись должна сходиться по оплатам.
pub async fn change_status(id: Uuid, status: BookingStatus) -> anyhow::Result<Booking> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .filter(|b| !b.base.metadata.is_deleted)
        .ok_or_else(not_found)?;
    let old_status = aggregate.status;
    if old_status == status {
        return Ok(aggregate);
    }
    aggregate.set_status(status);
    aggregate.validate().map_err(validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    changes::notify(Booking::collection_name());
    log_status_change(&aggregate, old_status);
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        changes::notify(Booking::collection_name());
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Booking>> {
    repository::get_by_id(id).await
}

pub async fn list(query: &BookingListQuery) -> anyhow::Result<Vec<Booking>> {
    let branch = query.branch.as_deref().map(str::trim).filter(|b| !b.is_empty());
    repository::list(query.date_from, query.date_to, branch).await
}

/// CSV по выборке периода и фильтру
pub async fn export_csv(query: &BookingListQuery, filter: &BookingFilter) -> anyhow::Result<String> {
    let bookings = list(query).await?;
    let selected = filter.apply(&bookings);
    tracing::info!("Exporting {} of {} bookings to CSV", selected.len(), bookings.len());
    export::bookings_to_csv(selected)
}

fn service_line(service: &contracts::domain::a003_salon_service::aggregate::SalonService) -> ServiceLine {
    ServiceLine {
        service_ref: Some(service.to_string_id()),
        name: service.base.description.clone(),
        price: service.price,
        quantity: 1,
        duration_minutes: service.duration_minutes,
    }
}

/// Тестовые данные: справочники и записи на сегодня и завтра.
/// Записи создаются только если их ещё нет.
pub async fn insert_test_data() -> anyhow::Result<()> {
    a001_branch::service::insert_test_data().await?;
    a002_staff::service::insert_test_data().await?;
    a003_salon_service::service::insert_test_data().await?;

    if repository::count_all().await? > 0 {
        return Ok(());
    }

    let catalog = a003_salon_service::repository::list_all().await?;
    if catalog.len() < 4 {
        return Err(validation("Недостаточно услуг в прайс-листе для тестовых записей"));
    }
    let today = Local::now().date_naive();
    let customers = [
        "Ольга Смирнова",
        "Ирина Ким",
        "Наталья Фёдорова",
        "Алексей Гусев",
        "Татьяна Белова",
    ];

    for branch in a001_branch::repository::list_all().await? {
        let branch_id = branch.to_string_id();
        let staff = a002_staff::repository::list_by_branch(&branch_id).await?;
        for (i, master) in staff.iter().enumerate() {
            let slots = [("10:00", 0usize), ("11:30", 1), ("14:00", 2), ("16:15", 3)];
            for (j, (time, service_idx)) in slots.iter().enumerate() {
                let service = &catalog[(service_idx + i) % catalog.len()];
                let day = if j % 2 == 0 { today } else { today + Duration::days(1) };
                let line = service_line(service);
                let total = line.price;
                let (status, payment_method, payment_details) = match (i + j) % 4 {
                    0 => (
                        BookingStatus::Completed,
                        Some(PaymentMethod::Card),
                        vec![PaymentLine { method: PaymentMethod::Card, amount: total }],
                    ),
                    1 => (
                        BookingStatus::Completed,
                        Some(PaymentMethod::Mixed),
                        vec![
                            PaymentLine { method: PaymentMethod::Cash, amount: 500.0 },
                            PaymentLine { method: PaymentMethod::Card, amount: total - 500.0 },
                        ],
                    ),
                    2 => (BookingStatus::Confirmed, None, Vec::new()),
                    _ => (BookingStatus::Pending, None, Vec::new()),
                };
                create(BookingDto {
                    customer_name: customers[(i * 4 + j) % customers.len()].into(),
                    services: vec![line],
                    booking_date: day,
                    booking_time: (*time).into(),
                    branch_ref: branch_id.clone(),
                    staff_ref: master.to_string_id(),
                    status,
                    payment_method,
                    payment_details,
                    ..Default::default()
                })
                .await?;
            }
        }
    }
    Ok(())
}
