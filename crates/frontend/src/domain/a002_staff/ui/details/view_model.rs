use crate::domain::{a001_branch, a002_staff::api};
use contracts::domain::a001_branch::aggregate::Branch;
use contracts::domain::a002_staff::aggregate::{Staff, StaffDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct StaffDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<Option<String>>,
    pub description: RwSignal<String>,
    pub branch_ref: RwSignal<String>,
    pub position: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub sort_order: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub branches: RwSignal<Vec<Branch>>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StaffDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            branch_ref: RwSignal::new(String::new()),
            position: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            sort_order: RwSignal::new("0".to_string()),
            is_active: RwSignal::new(true),
            comment: RwSignal::new(String::new()),
            branches: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(|id| id.is_some())
    }

    /// Загружает справочник филиалов и, если задан id, самого мастера
    pub fn load(&self, id: Option<String>) {
        let this = *self;
        spawn_local(async move {
            match a001_branch::api::fetch_all().await {
                Ok(list) => {
                    if this.branch_ref.get_untracked().is_empty() {
                        if let Some(first) = list.iter().find(|b| b.is_active) {
                            this.branch_ref.set(first.to_string_id());
                        }
                    }
                    this.branches.set(list);
                }
                Err(e) => this.error.set(Some(format!("Филиалы не загружены: {}", e))),
            }
            if let Some(id) = id {
                match api::fetch_by_id(&id).await {
                    Ok(staff) => this.fill(staff),
                    Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            }
        });
    }

    fn fill(&self, s: Staff) {
        self.id.set(Some(s.to_string_id()));
        self.code.set(Some(s.base.code));
        self.description.set(s.base.description);
        self.branch_ref.set(s.branch_ref);
        self.position.set(s.position);
        self.phone.set(s.phone.unwrap_or_default());
        self.sort_order.set(s.sort_order.to_string());
        self.is_active.set(s.is_active);
        self.comment.set(s.base.comment.unwrap_or_default());
    }

    fn to_dto(&self) -> Result<StaffDto, String> {
        let sort_order = self
            .sort_order
            .get_untracked()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Порядок должен быть целым числом".to_string())?;
        Ok(StaffDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked().trim().to_string(),
            branch_ref: self.branch_ref.get_untracked(),
            position: self.position.get_untracked().trim().to_string(),
            phone: Some(self.phone.get_untracked()),
            sort_order,
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
        if dto.description.is_empty() {
            self.error.set(Some("Имя мастера обязательно".to_string()));
            return;
        }
        if dto.branch_ref.is_empty() {
            self.error.set(Some("Выберите филиал".to_string()));
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
