use crate::domain::a006_booking::api;
use crate::domain::{a001_branch, a002_staff, a003_salon_service};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::booking_detail_key;
use crate::shared::components::table::parse_amount;
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_staff::aggregate::{sort_for_board, Staff};
use contracts::domain::a003_salon_service::aggregate::SalonService;
use contracts::domain::a006_booking::aggregate::{Booking, BookingDto, PaymentLine, ServiceLine};
use contracts::domain::a006_booking::totals::{header_method, BookingTotals};
use contracts::domain::common::AggregateRoot;
use contracts::enums::payment_method::PaymentMethod;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Состояние карточки записи. Форма хранится целиком как `BookingDto`,
/// строки услуг и оплат редактируются по индексу.
#[derive(Clone, Copy)]
pub struct BookingDetailsVm {
    pub form: RwSignal<BookingDto>,
    pub branches: RwSignal<Vec<Branch>>,
    pub staff: RwSignal<Vec<Staff>>,
    pub catalog: RwSignal<Vec<SalonService>>,
    tabs: Option<AppGlobalContext>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BookingDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BookingDto {
                booking_date: crate::shared::date_utils::today(),
                ..BookingDto::default()
            }),
            branches: RwSignal::new(Vec::new()),
            staff: RwSignal::new(Vec::new()),
            catalog: RwSignal::new(Vec::new()),
            tabs: use_context::<AppGlobalContext>(),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn totals(&self) -> BookingTotals {
        self.form.with(|f| f.totals())
    }

    // ------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------

    pub fn load_references(&self) {
        let this = *self;
        spawn_local(async move {
            match a001_branch::api::fetch_all().await {
                Ok(list) => this.branches.set(list),
                Err(e) => this.error.set(Some(e)),
            }
            match a002_staff::api::fetch_all().await {
                Ok(mut list) => {
                    sort_for_board(&mut list);
                    this.staff.set(list);
                }
                Err(e) => this.error.set(Some(e)),
            }
            match a003_salon_service::api::fetch_all().await {
                Ok(list) => this.catalog.set(list),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(b) => this.form.set(BookingDto::from(&b)),
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
            this.loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Филиал и мастер
    // ------------------------------------------------------------------

    /// Смена филиала сбрасывает мастера из другого филиала
    pub fn set_branch(&self, branch_id: &str) {
        let name = self.branches.with_untracked(|list| {
            list.iter()
                .find(|b| b.to_string_id() == branch_id)
                .map(|b| b.base.description.clone())
                .unwrap_or_default()
        });
        let staff_branch = self.form.with_untracked(|f| {
            self.staff.with_untracked(|list| {
                list.iter()
                    .find(|s| s.to_string_id() == f.staff_ref)
                    .map(|s| s.branch_ref.clone())
            })
        });
        self.form.update(|f| {
            f.branch_ref = branch_id.to_string();
            f.branch_name = name;
            if staff_branch.as_deref() != Some(branch_id) {
                f.staff_ref.clear();
                f.staff_name.clear();
            }
        });
    }

    pub fn set_staff(&self, staff_id: &str) {
        let name = self.staff.with_untracked(|list| {
            list.iter()
                .find(|s| s.to_string_id() == staff_id)
                .map(|s| s.base.description.clone())
                .unwrap_or_default()
        });
        self.form.update(|f| {
            f.staff_ref = staff_id.to_string();
            f.staff_name = name;
        });
    }

    /// Мастера выбранного филиала: активные и уже назначенный на запись
    pub fn staff_for_branch(&self) -> Vec<Staff> {
        let (branch_ref, staff_ref) = self
            .form
            .with(|f| (f.branch_ref.clone(), f.staff_ref.clone()));
        self.staff.with(|list| {
            list.iter()
                .filter(|s| s.branch_ref == branch_ref)
                .filter(|s| s.is_active || s.to_string_id() == staff_ref)
                .cloned()
                .collect()
        })
    }

    // ------------------------------------------------------------------
    // Строки услуг
    // ------------------------------------------------------------------

    pub fn add_service(&self) {
        self.form.update(|f| f.services.push(ServiceLine::default()));
    }

    pub fn remove_service(&self, index: usize) {
        self.form.update(|f| {
            if index < f.services.len() {
                f.services.remove(index);
            }
        });
    }

    pub fn update_service(&self, index: usize, change: impl FnOnce(&mut ServiceLine)) {
        self.form.update(|f| {
            if let Some(line) = f.services.get_mut(index) {
                change(line);
            }
        });
    }

    /// Выбор услуги из прайс-листа подставляет название, цену и длительность
    pub fn pick_service(&self, index: usize, service_id: &str) {
        if service_id.is_empty() {
            self.update_service(index, |line| line.service_ref = None);
            return;
        }
        let picked = self.catalog.with_untracked(|list| {
            list.iter()
                .find(|s| s.to_string_id() == service_id)
                .cloned()
        });
        if let Some(service) = picked {
            self.update_service(index, |line| {
                line.service_ref = Some(service.to_string_id());
                line.name = service.base.description.clone();
                line.price = service.price;
                line.duration_minutes = service.duration_minutes;
            });
        }
    }

    // ------------------------------------------------------------------
    // Оплата
    // ------------------------------------------------------------------

    pub fn add_payment(&self) {
        let amount = self.totals().balance().max(0.0);
        self.form.update(|f| {
            f.payment_details.push(PaymentLine {
                method: PaymentMethod::Card,
                amount,
            });
            sync_payment_method(f);
        });
    }

    pub fn remove_payment(&self, index: usize) {
        self.form.update(|f| {
            if index < f.payment_details.len() {
                f.payment_details.remove(index);
            }
            sync_payment_method(f);
        });
    }

    pub fn update_payment(&self, index: usize, change: impl FnOnce(&mut PaymentLine)) {
        self.form.update(|f| {
            if let Some(line) = f.payment_details.get_mut(index) {
                change(line);
            }
            sync_payment_method(f);
        });
    }

    /// Остаток к оплате добавляется к последней строке оплаты
    pub fn settle_balance(&self) {
        let balance = self.totals().balance();
        if balance.abs() < f64::EPSILON {
            return;
        }
        self.form.update(|f| {
            match f.payment_details.last_mut() {
                Some(last) => last.amount = (last.amount + balance).max(0.0),
                None => f.payment_details.push(PaymentLine {
                    method: f
                        .payment_method
                        .filter(|m| *m != PaymentMethod::Mixed)
                        .unwrap_or(PaymentMethod::Card),
                    amount: balance.max(0.0),
                }),
            }
            sync_payment_method(f);
        });
    }

    /// Разбор числового поля формы; ошибка показывается в карточке
    pub fn parse_number(&self, value: &str, what: &str) -> Option<f64> {
        match parse_amount(value) {
            Some(v) => Some(v),
            None => {
                self.error.set(Some(format!("{}: нужно число", what)));
                None
            }
        }
    }

    pub fn parse_int(&self, value: &str, what: &str) -> Option<i32> {
        match value.trim().parse::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.error.set(Some(format!("{}: нужно целое число", what)));
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Команды
    // ------------------------------------------------------------------

    pub fn save_command(&self, tab_key: String) {
        let dto = self.form.get_untracked();
        let is_new = dto.id.is_none();
        let title = detail_tab_label(Booking::element_name(), dto.customer_name.trim());
        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(id) => {
                    this.error.set(None);
                    if let Some(tabs) = this.tabs {
                        if is_new {
                            // Новая запись переезжает в таб со своим id
                            tabs.close_tab(&tab_key);
                            tabs.open_tab(&booking_detail_key(Some(&id)), &title);
                        } else {
                            tabs.update_tab_title(&tab_key, &title);
                        }
                    }
                    this.load_if_needed(Some(id));
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }

    pub fn delete_command(&self, on_close: Callback<()>) {
        let Some(id) = self.form.with_untracked(|f| f.id.clone()) else {
            on_close.run(());
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => on_close.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

/// Итоговый способ оплаты следует за строками; без строк остаётся выбор пользователя
fn sync_payment_method(form: &mut BookingDto) {
    if !form.payment_details.is_empty() {
        form.payment_method = header_method(&form.payment_details);
    } else if form.payment_method == Some(PaymentMethod::Mixed) {
        form.payment_method = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay(method: PaymentMethod, amount: f64) -> PaymentLine {
        PaymentLine { method, amount }
    }

    #[test]
    fn header_follows_payment_lines() {
        let mut form = BookingDto::default();
        form.payment_details = vec![pay(PaymentMethod::Cash, 500.0)];
        sync_payment_method(&mut form);
        assert_eq!(form.payment_method, Some(PaymentMethod::Cash));

        form.payment_details.push(pay(PaymentMethod::Card, 500.0));
        sync_payment_method(&mut form);
        assert_eq!(form.payment_method, Some(PaymentMethod::Mixed));
    }

    #[test]
    fn mixed_header_is_dropped_without_lines() {
        let mut form = BookingDto {
            payment_method: Some(PaymentMethod::Mixed),
            ..BookingDto::default()
        };
        sync_payment_method(&mut form);
        assert_eq!(form.payment_method, None);

        form.payment_method = Some(PaymentMethod::Transfer);
        sync_payment_method(&mut form);
        assert_eq!(form.payment_method, Some(PaymentMethod::Transfer));
    }
}
