use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Экземплярные методы отдают данные конкретной записи,
/// статические: имена коллекции и подписи для UI.
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Индекс агрегата в системе (например, "a006")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "booking"), оно же ключ ревизии изменений
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a006_booking"), совпадает с именем таблицы
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
