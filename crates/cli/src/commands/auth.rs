use console::style;

use client::HttpClient;
use common::StoError;

pub async fn login(http: &HttpClient, username: &str, password: &str) -> Result<(), StoError> {
    let pb = super::spinner("Выполняю вход...");
    let result = http.login(username, password).await;
    pb.finish_and_clear();

    result?;
    println!(
        "{} вход выполнен: {}",
        style("✓").green(),
        style(username).bold()
    );
    Ok(())
}

pub async fn logout(http: &HttpClient) -> Result<(), StoError> {
    http.logout().await?;
    println!("{} сессия завершена", style("✓").green());
    Ok(())
}
