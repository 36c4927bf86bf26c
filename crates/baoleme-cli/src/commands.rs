use anyhow::Context;
use baoleme_http::{
    AdminSession, ApiClient, ApiRequest, MerchantSession, RiderSession, Role, UserSession,
};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn login(
    client: &ApiClient,
    role: Role,
    account: &str,
    password: &str,
) -> anyhow::Result<()> {
    match role {
        Role::User => {
            let user = UserSession::new(client.clone());
            user.login(account, password).await?;
            print_json(&user.info())?;
        }
        Role::Rider => {
            let rider = RiderSession::new(client.clone());
            rider.login(account, password).await?;
            print_json(&rider.info())?;
        }
        Role::Merchant => {
            let merchant = MerchantSession::new(client.clone());
            merchant.login(account, password).await?;
            print_json(&merchant.info())?;
        }
        Role::Admin => {
            let admin_id: i64 = account
                .parse()
                .with_context(|| format!("admin id must be a number, got {:?}", account))?;
            let admin = AdminSession::new(client.clone());
            admin.login(admin_id, password).await?;
            print_json(&admin.info())?;
        }
    }
    info!("{} logged in", role);
    Ok(())
}

/// The local token is dropped even when the server call fails.
pub async fn logout(client: &ApiClient, role: Role) -> anyhow::Result<()> {
    let result = match role {
        Role::User => UserSession::new(client.clone()).logout().await,
        Role::Rider => RiderSession::new(client.clone()).logout().await,
        Role::Merchant => MerchantSession::new(client.clone()).logout().await,
        Role::Admin => AdminSession::new(client.clone()).logout().await,
    };
    if let Err(e) = result {
        warn!("{} logout was not confirmed by the server: {}", role, e);
    }
    info!("{} logged out", role);
    Ok(())
}

pub async fn info(client: &ApiClient, role: Role) -> anyhow::Result<()> {
    if !client.session().is_logged_in(role) {
        anyhow::bail!("{} is not logged in", role);
    }
    match role {
        Role::User => {
            let envelope = UserSession::new(client.clone()).get_user_info().await?;
            print_json(&envelope.data)
        }
        Role::Rider => {
            let envelope = RiderSession::new(client.clone()).get_rider_info().await?;
            print_json(&envelope.data)
        }
        Role::Merchant => {
            let envelope = MerchantSession::new(client.clone())
                .get_merchant_info()
                .await?;
            print_json(&envelope.data)
        }
        // no profile endpoint for administrators
        Role::Admin => print_json(&serde_json::json!({ "logged_in": true })),
    }
}

pub fn status(client: &ApiClient) -> anyhow::Result<()> {
    let state = client.session().login_state();
    for role in Role::ALL {
        let mark = if state.get(role) { "logged in" } else { "-" };
        println!("{:<9} {}", role.as_str(), mark);
    }
    Ok(())
}

pub async fn call(
    client: &ApiClient,
    role: Role,
    method: &str,
    path: &str,
    data: Option<&str>,
) -> anyhow::Result<()> {
    let method: Method = method
        .to_ascii_uppercase()
        .parse()
        .with_context(|| format!("invalid method {:?}", method))?;

    let mut request = ApiRequest::new(method, path).as_role(role);
    if let Some(raw) = data {
        let body: Value = serde_json::from_str(raw).context("--data must be JSON")?;
        request = request.with_json(&body)?;
    }

    let envelope = client.call::<Value>(request).await?;
    print_json(&envelope.data)
}
