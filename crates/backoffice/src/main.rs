use forno_backoffice::Backoffice;

fn main() -> anyhow::Result<()> {
    forno_observability::init();

    let app = Backoffice::from_env()?;

    for path in std::env::args().skip(1) {
        tracing::info!(%path, navigation = ?app.navigate(&path), "resolved");
    }

    if let Some(user) = app.current_user() {
        tracing::info!(
            email = %user.email,
            role = %user.role,
            orders = app.visible_orders().len(),
            customers = app.visible_customers().len(),
            "session restored"
        );
    }

    let overview = app.overview();
    tracing::info!(
        tenants = overview.tenant_count,
        users = overview.user_count,
        active_users = overview.active_user_percent,
        "platform overview"
    );
    Ok(())
}
