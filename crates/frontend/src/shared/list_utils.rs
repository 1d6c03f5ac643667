/// Поиск и сортировка в клиентских списках справочников
use std::cmp::Ordering;

/// Строка списка, по которой работает поиск
pub trait Searchable {
    /// Текстовые поля, в которых ищется подстрока
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
    }
}

/// Строка списка, сортируемая по колонке
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Стрелка в заголовке колонки
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// Сравнение строк без учёта регистра
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        price: f64,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
                _ => cmp_text(&self.name, &other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Стрижка".into(), price: 2000.0 },
            Row { name: "маникюр".into(), price: 1500.0 },
            Row { name: "Окрашивание".into(), price: 5000.0 },
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(filter_list(rows(), "МАНИ").len(), 1);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn sort_by_field_and_direction() {
        let mut list = rows();
        sort_list(&mut list, "price", false);
        assert_eq!(list[0].price, 5000.0);
        sort_list(&mut list, "name", true);
        assert_eq!(list[0].name, "маникюр");
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "price", true), "");
    }
}
