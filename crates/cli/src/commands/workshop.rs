use console::style;
use std::sync::Arc;

use client::api::{AnalyticsApi, AppointmentsApi, OrdersApi};
use client::HttpClient;
use common::StoError;

pub async fn appointments(http: Arc<HttpClient>) -> Result<(), StoError> {
    let api = AppointmentsApi::new(http);

    let pb = super::spinner("Загружаю записи...");
    let result = api.list().await;
    pb.finish_and_clear();

    let appointments = result?;
    if appointments.is_empty() {
        println!("{}", style("Записей нет").dim());
        return Ok(());
    }
    for a in appointments {
        println!(
            "{}  {:<20} {:<20} {:<15} [{}]",
            a.scheduled_at.format("%d.%m.%Y %H:%M"),
            a.client_name,
            a.car,
            a.service,
            style(&a.status).cyan()
        );
    }
    Ok(())
}

pub async fn orders(http: Arc<HttpClient>) -> Result<(), StoError> {
    let api = OrdersApi::new(http);

    let pb = super::spinner("Загружаю заказы...");
    let result = api.list().await;
    pb.finish_and_clear();

    let orders = result?;
    if orders.is_empty() {
        println!("{}", style("Заказов нет").dim());
        return Ok(());
    }
    for order in orders {
        println!(
            "{}  {:<20} позиций: {:<3} {:>10.2} ₽ [{}]",
            order.created_at.format("%d.%m.%Y"),
            order.client_name,
            order.items.len(),
            order.total,
            style(&order.status).cyan()
        );
    }
    Ok(())
}

pub async fn analytics(http: Arc<HttpClient>) -> Result<(), StoError> {
    let api = AnalyticsApi::new(http);

    let pb = super::spinner("Собираю сводку...");
    let result = api.summary().await;
    pb.finish_and_clear();

    let summary = result?;
    println!("{}", style("Сводка").bold());
    println!("  записей:       {}", summary.appointments_total);
    println!("  заказов:       {}", summary.orders_total);
    println!("  выручка:       {:.2} ₽", summary.revenue);
    println!("  новых клиентов: {}", summary.new_clients);
    Ok(())
}
