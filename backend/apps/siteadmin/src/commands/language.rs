//! Language preference command

use kernel::Language;

use super::{Context, Reply};

/// Show the stored language, or switch to `language`
pub async fn language(ctx: &mut Context, language: Option<Language>) -> anyhow::Result<Reply> {
    if let Some(language) = language {
        ctx.preference.save(language).await?;
        ctx.language = language;
    }

    Ok(match ctx.language {
        Language::English => Reply::ok("Language: English", "भाषा: अंग्रेज़ी"),
        Language::Hindi => Reply::ok("Language: Hindi", "भाषा: हिंदी"),
    })
}
