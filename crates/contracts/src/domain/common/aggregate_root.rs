/// Трейт для корня агрегата
///
/// Определяет идентификатор записи и статические метаданные, по которым
/// строятся пути REST API и подписи в UI.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Краткое представление записи для таблиц и заголовков
    fn display_name(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a003")
    fn aggregate_index() -> &'static str;

    /// Сегмент коллекции REST API (например, "mozos")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Mozo")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Mozos")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Путь коллекции: "/api/mozos/"
    fn api_path() -> String {
        format!("/api/{}/", Self::collection_name())
    }

    /// Путь конкретной записи: "/api/mozos/12"
    fn item_path(id: impl std::fmt::Display) -> String {
        format!("/api/{}/{}", Self::collection_name(), id)
    }
}
