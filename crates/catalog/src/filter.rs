//! Предикаты фильтрации каталога.
//!
//! Позиция проходит фильтр, когда (поиск пуст ИЛИ подстрока без учёта
//! регистра встречается в названии, артикуле или описании) И (категория
//! пуста ИЛИ совпадает точно) И (бренд пуст ИЛИ совпадает точно).

use client::models::Part;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartsFilter {
    pub query: String,
    pub category: String,
    pub brand: String,
}

impl PartsFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_empty() && self.brand.is_empty()
    }

    pub fn matches(&self, part: &Part) -> bool {
        let query = self.query.to_lowercase();
        let text_match = query.is_empty()
            || part.name.to_lowercase().contains(&query)
            || part.article.to_lowercase().contains(&query)
            || part.description.to_lowercase().contains(&query);

        let category_match = self.category.is_empty() || part.category == self.category;
        let brand_match = self.brand.is_empty() || part.brand == self.brand;

        text_match && category_match && brand_match
    }

    /// Производное представление: всегда ровно `filter(parts, predicate)`
    pub fn apply(&self, parts: &[Part]) -> Vec<Part> {
        if self.is_empty() {
            return parts.to_vec();
        }
        parts.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn part(id: u64, name: &str, article: &str, description: &str, category: &str, brand: &str) -> Part {
        Part {
            id,
            name: name.to_string(),
            article: article.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            price: 0.0,
            stock: 0,
        }
    }

    #[test]
    fn empty_filter_passes_everything() {
        let parts = vec![part(1, "Filter", "F100", "", "engine", "Bosch")];
        let filter = PartsFilter::default();
        assert_eq!(filter.apply(&parts), parts);
    }

    #[test]
    fn query_matches_name_article_and_description_case_insensitively() {
        let parts = vec![
            part(1, "Масляный фильтр", "F100", "", "engine", "Bosch"),
            part(2, "Помпа", "P200", "насос охлаждения", "cooling", "Mann"),
        ];

        let by_name = PartsFilter {
            query: "фильтр".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&parts).len(), 1);

        let by_article = PartsFilter {
            query: "p200".to_string(),
            ..Default::default()
        };
        assert_eq!(by_article.apply(&parts)[0].id, 2);

        let by_description = PartsFilter {
            query: "НАСОС".to_string(),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&parts)[0].id, 2);
    }

    #[test]
    fn category_and_brand_require_exact_match() {
        let parts = vec![
            part(1, "Filter", "F100", "", "engine", "Bosch"),
            part(2, "Pump", "P200", "", "cooling", "Mann"),
        ];

        let filter = PartsFilter {
            category: "engine".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&parts).len(), 1);

        // категория сравнивается точно, без учёта подстрок
        let filter = PartsFilter {
            category: "engin".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&parts).is_empty());
    }

    #[test]
    fn query_whitespace_is_significant() {
        let parts = vec![
            part(1, "Масляный фильтр", "F100", "", "engine", "Bosch"),
            part(2, "Фильтр", "F200", "", "engine", "Mann"),
        ];

        // пробел внутри запроса участвует в сравнении как обычный символ
        let filter = PartsFilter {
            query: "ый ф".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&parts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);

        // ведущий пробел не отбрасывается
        let filter = PartsFilter {
            query: " фильтр".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&parts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn predicates_combine_with_and() {
        let parts = vec![
            part(1, "Filter", "F100", "", "engine", "Bosch"),
            part(2, "Filter Pro", "F200", "", "engine", "Mann"),
        ];
        let filter = PartsFilter {
            query: "filter".to_string(),
            category: "engine".to_string(),
            brand: "Mann".to_string(),
        };
        let result = filter.apply(&parts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    proptest! {
        /// Закон фильтра: результат — в точности подмножество коллекции,
        /// удовлетворяющее всем трём предикатам, с сохранением порядка.
        #[test]
        fn filter_law(
            parts in proptest::collection::vec(
                (0u64..50, "[a-c ]{0,3}", "[a-c ]{0,3}", "[a-c ]{0,3}", "[a-c]{0,2}", "[a-c]{0,2}"),
                0..20,
            ),
            query in "[a-c ]{0,2}",
            category in "[a-c]{0,2}",
            brand in "[a-c]{0,2}",
        ) {
            let parts: Vec<Part> = parts
                .into_iter()
                .map(|(id, name, article, description, category, brand)| {
                    part(id, &name, &article, &description, &category, &brand)
                })
                .collect();
            let filter = PartsFilter { query: query.clone(), category: category.clone(), brand: brand.clone() };

            let result = filter.apply(&parts);

            let expected: Vec<Part> = parts
                .iter()
                .filter(|p| {
                    let q = query.to_lowercase();
                    let text = q.is_empty()
                        || p.name.to_lowercase().contains(&q)
                        || p.article.to_lowercase().contains(&q)
                        || p.description.to_lowercase().contains(&q);
                    let cat = category.is_empty() || p.category == category;
                    let br = brand.is_empty() || p.brand == brand;
                    text && cat && br
                })
                .cloned()
                .collect();

            prop_assert_eq!(result, expected);
        }
    }
}
