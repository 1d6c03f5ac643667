use crate::domain::a005_membership::api;
use crate::shared::components::table::parse_amount;
use crate::shared::date_utils::{parse_input_date, to_input_date};
use contracts::domain::a005_membership::aggregate::{Membership, MembershipDto};
use contracts::enums::membership_tier::MembershipTier;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MembershipDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<Option<String>>,
    pub customer_name: RwSignal<String>,
    pub customer_phone: RwSignal<String>,
    /// Код уровня, см. `MembershipTier::code`
    pub tier: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub visits_total: RwSignal<String>,
    pub visits_used: RwSignal<String>,
    pub price: RwSignal<String>,
    pub is_frozen: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl MembershipDetailsVm {
    pub fn new() -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            code: RwSignal::new(None),
            customer_name: RwSignal::new(String::new()),
            customer_phone: RwSignal::new(String::new()),
            tier: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            visits_total: RwSignal::new(String::new()),
            visits_used: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            is_frozen: RwSignal::new(false),
            comment: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        vm.fill_dto(MembershipDto::default());
        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(|id| id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(m) => this.fill(&m),
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    fn fill(&self, m: &Membership) {
        self.fill_dto(MembershipDto::from(m));
    }

    fn fill_dto(&self, dto: MembershipDto) {
        self.id.set(dto.id);
        self.code.set(dto.code);
        self.customer_name.set(dto.customer_name);
        self.customer_phone.set(dto.customer_phone.unwrap_or_default());
        self.tier.set(dto.tier.code().to_string());
        self.start_date.set(to_input_date(dto.start_date));
        self.end_date.set(to_input_date(dto.end_date));
        self.visits_total.set(dto.visits_total.to_string());
        self.visits_used.set(dto.visits_used.to_string());
        self.price.set(dto.price.to_string());
        self.is_frozen.set(dto.is_frozen);
        self.comment.set(dto.comment.unwrap_or_default());
    }

    fn to_dto(&self) -> Result<MembershipDto, String> {
        let parse_int = |value: String, what: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| format!("{}: нужно целое число", what))
        };
        Ok(MembershipDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            customer_name: self.customer_name.get_untracked().trim().to_string(),
            customer_phone: Some(self.customer_phone.get_untracked()),
            tier: MembershipTier::from_code(&self.tier.get_untracked()).unwrap_or_default(),
            start_date: parse_input_date(&self.start_date.get_untracked())
                .ok_or_else(|| "Укажите дату начала".to_string())?,
            end_date: parse_input_date(&self.end_date.get_untracked())
                .ok_or_else(|| "Укажите дату окончания".to_string())?,
            visits_total: parse_int(self.visits_total.get_untracked(), "Посещений всего")?,
            visits_used: parse_int(self.visits_used.get_untracked(), "Использовано")?,
            price: parse_amount(&self.price.get_untracked())
                .ok_or_else(|| "Цена должна быть числом".to_string())?,
            is_frozen: self.is_frozen.get_untracked(),
            comment: Some(self.comment.get_untracked()),
        })
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    this.error.set(None);
                    on_saved.run(());
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}
