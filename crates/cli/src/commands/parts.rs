use console::style;
use std::sync::Arc;

use catalog::PartsStore;
use client::api::parts::{PartListParams, PartsApi};
use client::models::Part;
use client::HttpClient;
use common::StoError;

pub async fn list(
    http: Arc<HttpClient>,
    category: Option<String>,
    brand: Option<String>,
    search: Option<String>,
) -> Result<(), StoError> {
    let store = PartsStore::new(PartsApi::new(http));

    let params = PartListParams { search, category };

    let pb = super::spinner("Загружаю каталог...");
    let result = store.fetch_all(&params).await;
    pb.finish_and_clear();
    result?;

    // серверный поиск игнорирует параметр категории, поэтому выбранная
    // категория применяется и на клиенте, как и бренд
    if let Some(category) = params.category.clone() {
        store.set_selected_category(category);
    }
    if let Some(brand) = brand {
        store.set_selected_brand(brand);
    }

    let state = store.state();
    if state.filtered.is_empty() {
        println!("{}", style("Ничего не найдено").dim());
        return Ok(());
    }

    for part in &state.filtered {
        print_row(part);
    }
    println!(
        "{}",
        style(format!(
            "Всего: {} из {} (бренды: {})",
            state.filtered.len(),
            state.parts.len(),
            state.brands.join(", ")
        ))
        .dim()
    );
    Ok(())
}

pub async fn show(http: Arc<HttpClient>, id: u64) -> Result<(), StoError> {
    let api = PartsApi::new(http);

    let pb = super::spinner("Загружаю карточку...");
    let result = api.get(id).await;
    pb.finish_and_clear();

    let part = result?;
    println!("{}", style(&part.name).bold());
    println!("  артикул:   {}", part.article);
    println!("  категория: {}", part.category);
    println!("  бренд:     {}", part.brand);
    println!("  цена:      {:.2} ₽", part.price);
    println!("  остаток:   {}", part.stock);
    if !part.description.is_empty() {
        println!("  {}", style(&part.description).dim());
    }
    Ok(())
}

pub async fn categories(http: Arc<HttpClient>) -> Result<(), StoError> {
    let api = PartsApi::new(http);

    let pb = super::spinner("Загружаю категории...");
    let result = api.categories().await;
    pb.finish_and_clear();

    for category in result? {
        println!("  {category}");
    }
    Ok(())
}

fn print_row(part: &Part) {
    println!(
        "{:>5}  {:<12} {:<30} {:<10} {:>8.2} ₽",
        part.id,
        part.article,
        part.name,
        part.brand,
        part.price
    );
}
