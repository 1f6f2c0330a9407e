//! Admin account commands

use auth::{AuthError, SetupForm};
use kernel::error::ErrorKind;

use super::{Context, Reply};

pub async fn status(ctx: &Context) -> Reply {
    let account = if ctx.store.has_credentials().await {
        ("Admin account: configured", "व्यवस्थापक खाता: बना हुआ है")
    } else {
        (
            "Admin account: not configured (run setup)",
            "व्यवस्थापक खाता: नहीं बना (सेटअप चलाएं)",
        )
    };

    let session = if ctx.store.is_authenticated() {
        ("Session: logged in", "सत्र: लॉग इन")
    } else {
        ("Session: logged out", "सत्र: लॉग आउट")
    };

    Reply::ok(
        format!("{}\n{}\nLanguage: English", account.0, session.0),
        format!("{}\n{}\nभाषा: हिंदी", account.1, session.1),
    )
}

/// First-run setup. Refuses to replace an existing account unless `force`.
pub async fn setup(ctx: &Context, form: SetupForm, force: bool) -> anyhow::Result<Reply> {
    if !force && ctx.store.has_credentials().await {
        return Ok(Reply::fail(
            ErrorKind::Conflict,
            "Admin account already exists. Use --force to replace it.",
            "व्यवस्थापक खाता पहले से मौजूद है। बदलने के लिए --force का उपयोग करें।",
        ));
    }

    match ctx.store.setup(form).await {
        Ok(()) => Ok(Reply::ok(
            "Admin account created successfully!",
            "व्यवस्थापक खाता सफलतापूर्वक बनाया गया!",
        )),
        Err(AuthError::InvalidSetup(e)) => {
            Ok(Reply::fail_text(ErrorKind::InvalidInput, e.message()))
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to create admin account")),
    }
}

pub async fn login(ctx: &Context, username: &str, password: &str) -> Reply {
    if ctx.store.login(username, password).await {
        Reply::ok("Login successful!", "लॉगिन सफल!")
    } else {
        Reply::fail(
            ErrorKind::Unauthorized,
            "Invalid username or password",
            "अमान्य उपयोगकर्ता नाम या पासवर्ड",
        )
    }
}

pub async fn logout(ctx: &Context) -> Reply {
    ctx.store.logout().await;
    Reply::ok("Logged out", "लॉग आउट हो गया")
}
