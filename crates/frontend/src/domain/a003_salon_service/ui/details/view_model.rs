use crate::domain::a003_salon_service::api;
use crate::shared::components::table::parse_amount;
use contracts::domain::a003_salon_service::aggregate::{SalonService, SalonServiceDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SalonServiceDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<Option<String>>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub duration_minutes: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SalonServiceDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new("0".to_string()),
            duration_minutes: RwSignal::new("60".to_string()),
            is_active: RwSignal::new(true),
            comment: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(|id| id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(s) => this.fill(s),
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    fn fill(&self, s: SalonService) {
        self.id.set(Some(s.to_string_id()));
        self.code.set(Some(s.base.code));
        self.description.set(s.base.description);
        self.category.set(s.category);
        self.price.set(s.price.to_string());
        self.duration_minutes.set(s.duration_minutes.to_string());
        self.is_active.set(s.is_active);
        self.comment.set(s.base.comment.unwrap_or_default());
    }

    fn to_dto(&self) -> Result<SalonServiceDto, String> {
        let price = parse_amount(&self.price.get_untracked())
            .ok_or_else(|| "Цена должна быть числом".to_string())?;
        let duration_minutes = self
            .duration_minutes
            .get_untracked()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Длительность должна быть целым числом минут".to_string())?;
        Ok(SalonServiceDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked().trim().to_string(),
            category: self.category.get_untracked().trim().to_string(),
            price,
            duration_minutes,
            is_active: self.is_active.get_untracked(),
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
