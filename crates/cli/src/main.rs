use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use std::sync::Arc;

use client::{FileTokenStore, HttpClient};
use common::ClientConfig;

mod commands;

#[derive(Parser)]
#[command(name = "supersto")]
#[command(about = "СуперСТО — консольный клиент сервисной станции")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Вход в систему
    Login {
        username: String,
        password: String,
    },
    /// Завершение сессии
    Logout,
    /// Каталог запчастей
    Parts {
        #[command(subcommand)]
        command: PartsCommands,
    },
    /// Записи на обслуживание
    Appointments,
    /// Заказы запчастей
    Orders,
    /// Сводная аналитика
    Analytics,
}

#[derive(Subcommand)]
enum PartsCommands {
    /// Список запчастей с фильтрами
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Карточка запчасти
    Show { id: u64 },
    /// Список категорий
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    common::logging::init_logging();

    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    let tokens = Arc::new(FileTokenStore::new(FileTokenStore::default_path()));
    let http = Arc::new(HttpClient::new(config, tokens)?);

    let result = match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&http, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(&http).await,
        Commands::Parts { command } => match command {
            PartsCommands::List {
                category,
                brand,
                search,
            } => commands::parts::list(http.clone(), category, brand, search).await,
            PartsCommands::Show { id } => commands::parts::show(http.clone(), id).await,
            PartsCommands::Categories => commands::parts::categories(http.clone()).await,
        },
        Commands::Appointments => commands::workshop::appointments(http.clone()).await,
        Commands::Orders => commands::workshop::orders(http.clone()).await,
        Commands::Analytics => commands::workshop::analytics(http.clone()).await,
    };

    if let Err(err) = result {
        if err.is_session_expired() {
            eprintln!(
                "{} сессия истекла, выполните {}",
                style("✗").red(),
                style("supersto login <логин> <пароль>").cyan()
            );
        } else {
            eprintln!("{} {}", style("✗").red(), err.user_message());
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
