//! Хранилище состояния каталога.
//!
//! Составная мутация (замена коллекции, пересчёт отфильтрованного
//! представления и набора брендов) выполняется под одним замком: снаружи
//! нельзя увидеть обновлённую коллекцию без обновлённого представления.

use async_trait::async_trait;
use common::StoError;
use std::sync::RwLock;
use tracing::warn;

use client::api::parts::{PartListParams, PartsApi};
use client::models::Part;

use crate::filter::PartsFilter;

/// Источник данных каталога; в тестах подменяется заглушкой
#[async_trait]
pub trait PartsCatalog: Send + Sync {
    async fn fetch_all(&self, params: &PartListParams) -> Result<Vec<Part>, StoError>;
    async fn fetch_by_id(&self, id: u64) -> Result<Part, StoError>;
    async fn fetch_categories(&self) -> Result<Vec<String>, StoError>;
    async fn search(&self, query: &str) -> Result<Vec<Part>, StoError>;
}

#[async_trait]
impl PartsCatalog for PartsApi {
    async fn fetch_all(&self, params: &PartListParams) -> Result<Vec<Part>, StoError> {
        self.list(params).await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Part, StoError> {
        self.get(id).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, StoError> {
        self.categories().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Part>, StoError> {
        PartsApi::search(self, query).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartsState {
    /// Коллекция в порядке последней загрузки
    pub parts: Vec<Part>,
    /// Производное представление: filter(parts, predicate)
    pub filtered: Vec<Part>,
    /// Категории приходят только из fetch_categories
    pub categories: Vec<String>,
    /// Бренды выводятся из коллекции (в порядке первого появления)
    pub brands: Vec<String>,
    pub filter: PartsFilter,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct PartsStore<A: PartsCatalog> {
    api: A,
    state: RwLock<PartsState>,
}

impl<A: PartsCatalog> PartsStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(PartsState::default()),
        }
    }

    /// Снимок текущего состояния
    pub fn state(&self) -> PartsState {
        self.state.read().expect("parts state lock poisoned").clone()
    }

    /// Каждая мутация завершается пересчётом представления в той же
    /// критической секции
    fn mutate(&self, apply: impl FnOnce(&mut PartsState)) {
        let mut state = self.state.write().expect("parts state lock poisoned");
        apply(&mut state);
        state.filtered = state.filter.apply(&state.parts);
    }

    fn begin(&self) {
        self.mutate(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, err: &StoError) {
        warn!("операция каталога не удалась: {err}");
        let message = err.user_message();
        self.mutate(|s| {
            s.loading = false;
            s.error = Some(message);
        });
    }

    fn finish_with_catalog(&self, parts: Vec<Part>, query: Option<String>) {
        self.mutate(|s| {
            if let Some(query) = query {
                s.filter.query = query;
            }
            s.brands = distinct_brands(&parts);
            s.parts = parts;
            s.loading = false;
        });
    }

    /// Загрузка каталога. Параметр поиска уводит на серверный поиск,
    /// параметр категории — на выборку по категории, иначе грузится всё.
    pub async fn fetch_all(&self, params: &PartListParams) -> Result<(), StoError> {
        if let Some(query) = params.search.clone() {
            return self.search(&query).await;
        }

        self.begin();
        match self.api.fetch_all(params).await {
            Ok(parts) => {
                self.finish_with_catalog(parts, None);
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Серверный поиск. Запрос сохраняется в предикате, а результаты
    /// проходят через общий клиентский фильтр, так что выбранные
    /// категория и бренд продолжают действовать.
    pub async fn search(&self, query: &str) -> Result<(), StoError> {
        self.begin();
        match self.api.search(query).await {
            Ok(parts) => {
                self.finish_with_catalog(parts, Some(query.to_string()));
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Upsert по id: замена на месте либо добавление в конец
    pub async fn fetch_by_id(&self, id: u64) -> Result<(), StoError> {
        self.begin();
        match self.api.fetch_by_id(id).await {
            Ok(part) => {
                self.mutate(|s| {
                    if let Some(idx) = s.parts.iter().position(|p| p.id == part.id) {
                        s.parts[idx] = part;
                    } else {
                        s.parts.push(part);
                    }
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    pub async fn fetch_categories(&self) -> Result<(), StoError> {
        self.begin();
        match self.api.fetch_categories().await {
            Ok(categories) => {
                self.mutate(|s| {
                    s.categories = categories;
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.mutate(|s| s.filter.query = query);
    }

    pub fn set_selected_category(&self, category: impl Into<String>) {
        let category = category.into();
        self.mutate(|s| s.filter.category = category);
    }

    pub fn set_selected_brand(&self, brand: impl Into<String>) {
        let brand = brand.into();
        self.mutate(|s| s.filter.brand = brand);
    }

    pub fn clear_filters(&self) {
        self.mutate(|s| s.filter = PartsFilter::default());
    }

    pub fn clear_error(&self) {
        self.mutate(|s| s.error = None);
    }
}

/// Уникальные бренды в порядке первого появления; пустые значения
/// в набор не попадают
fn distinct_brands(parts: &[Part]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for part in parts {
        if !part.brand.is_empty() && !brands.contains(&part.brand) {
            brands.push(part.brand.clone());
        }
    }
    brands
}
