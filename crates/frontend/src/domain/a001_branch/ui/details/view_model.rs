use crate::domain::a001_branch::api;
use contracts::domain::a001_branch::aggregate::{Branch, BranchDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BranchDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<Option<String>>,
    pub description: RwSignal<String>,
    pub address: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BranchDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
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
                Ok(branch) => this.fill(branch),
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    fn fill(&self, b: Branch) {
        self.id.set(Some(b.base.id.as_string()));
        self.code.set(Some(b.base.code));
        self.description.set(b.base.description);
        self.address.set(b.address);
        self.phone.set(b.phone.unwrap_or_default());
        self.is_active.set(b.is_active);
        self.comment.set(b.base.comment.unwrap_or_default());
    }

    fn to_dto(&self) -> BranchDto {
        BranchDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            phone: Some(self.phone.get_untracked()),
            is_active: self.is_active.get_untracked(),
            comment: Some(self.comment.get_untracked()),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.to_dto();
        if dto.description.is_empty() {
            self.error.set(Some("Наименование обязательно".to_string()));
            return;
        }
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
