//! Опрос `/api/changes`: ревизии коллекций для автообновления экранов
//!
//! Каждый экран подписывается на нужные коллекции через
//! [`refetch_on_change`] и перечитывает данные, когда ревизия выросла.

use super::api_utils::get_json;
use contracts::shared::live_changes::ChangeRevisions;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Период опроса backend
pub const POLL_INTERVAL_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct LiveChanges {
    revisions: RwSignal<ChangeRevisions>,
    /// Последний опрос прошёл успешно
    pub online: RwSignal<bool>,
}

impl LiveChanges {
    /// Создаёт состояние и запускает фоновый опрос
    pub fn start() -> Self {
        let this = Self {
            revisions: RwSignal::new(ChangeRevisions::default()),
            online: RwSignal::new(true),
        };
        spawn_local(async move {
            loop {
                this.poll_once().await;
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });
        this
    }

    async fn poll_once(&self) {
        match get_json::<ChangeRevisions>("/api/changes").await {
            Ok(snapshot) => {
                if !self.online.get_untracked() {
                    self.online.set(true);
                }
                let changed = self
                    .revisions
                    .with_untracked(|current| snapshot.changed_since(current));
                if !changed.is_empty() {
                    log::debug!("live changes: {:?}", changed);
                    self.revisions.set(snapshot);
                }
            }
            Err(e) => {
                if self.online.get_untracked() {
                    log::warn!("live changes poll failed: {}", e);
                    self.online.set(false);
                }
            }
        }
    }

    /// Ревизия коллекции; меняется только при изменении этой коллекции
    pub fn watch(&self, collection: &'static str) -> Memo<u64> {
        let revisions = self.revisions;
        Memo::new(move |_| revisions.with(|r| r.get(collection)))
    }
}

pub fn use_live_changes() -> LiveChanges {
    use_context::<LiveChanges>().expect("LiveChanges not found")
}

/// Вызывает `refetch` при каждом росте ревизии любой из коллекций.
/// Первое значение ревизий только запоминается: начальную загрузку экран делает сам.
pub fn refetch_on_change(collections: &'static [&'static str], refetch: impl Fn() + 'static) {
    let live = use_live_changes();
    let watched: Vec<Memo<u64>> = collections.iter().map(|c| live.watch(c)).collect();
    Effect::new(move |prev: Option<Vec<u64>>| {
        let current: Vec<u64> = watched.iter().map(|m| m.get()).collect();
        if let Some(prev) = prev {
            if revisions_grew(&prev, &current) {
                refetch();
            }
        }
        current
    });
}

/// Пустой снимок (0) считается "ещё не загружен": переход 0 → n не повод перечитывать
fn revisions_grew(prev: &[u64], current: &[u64]) -> bool {
    prev.iter()
        .zip(current)
        .any(|(p, c)| *p != 0 && c != p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_snapshot_does_not_trigger_refetch() {
        assert!(!revisions_grew(&[0, 0], &[1, 3]));
    }

    #[test]
    fn any_changed_collection_triggers_refetch() {
        assert!(revisions_grew(&[1, 3], &[1, 4]));
        assert!(!revisions_grew(&[1, 3], &[1, 3]));
    }
}
