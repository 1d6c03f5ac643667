use crate::domain::a004_product::api;
use crate::shared::components::table::parse_amount;
use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<Option<String>>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock_qty: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            price: RwSignal::new("0".to_string()),
            stock_qty: RwSignal::new("0".to_string()),
            image_url: RwSignal::new(String::new()),
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
                Ok(p) => this.fill(p),
                Err(e) => this.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    fn fill(&self, p: Product) {
        self.id.set(Some(p.to_string_id()));
        self.code.set(Some(p.base.code));
        self.description.set(p.base.description);
        self.category.set(p.category);
        self.brand.set(p.brand);
        self.price.set(p.price.to_string());
        self.stock_qty.set(p.stock_qty.to_string());
        self.image_url.set(p.image_url.unwrap_or_default());
        self.is_active.set(p.is_active);
        self.comment.set(p.base.comment.unwrap_or_default());
    }

    fn to_dto(&self) -> Result<ProductDto, String> {
        let price = parse_amount(&self.price.get_untracked())
            .ok_or_else(|| "Цена должна быть числом".to_string())?;
        let stock_qty = self
            .stock_qty
            .get_untracked()
            .trim()
            .parse::<i32>()
            .map_err(|_| "Остаток должен быть целым числом".to_string())?;
        Ok(ProductDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked().trim().to_string(),
            category: self.category.get_untracked().trim().to_string(),
            brand: self.brand.get_untracked().trim().to_string(),
            price,
            stock_qty,
            image_url: Some(self.image_url.get_untracked()),
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
