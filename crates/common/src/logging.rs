use tracing_subscriber::EnvFilter;

/// Инициализация логирования для бинарников.
/// Уровень берётся из RUST_LOG, по умолчанию скрываем всё ниже warn
/// чтобы не засорять вывод CLI.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: повторная инициализация в тестах не должна паниковать
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
