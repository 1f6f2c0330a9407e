//! Custom domain check (admin only)

use kernel::error::ErrorKind;

use super::{Context, Reply};

pub async fn check(ctx: &Context, input: &str) -> Reply {
    if !ctx.store.is_authenticated() {
        return Reply::fail(
            ErrorKind::Unauthorized,
            "You need to be logged in to access the admin panel",
            "व्यवस्थापक पैनल तक पहुंचने के लिए आपको लॉग इन होना होगा",
        );
    }

    let check = site::check_custom_domain(input);
    if check.result.is_valid {
        Reply::ok(
            format!("Valid domain: {}", check.domain),
            format!("मान्य डोमेन: {}", check.domain),
        )
    } else {
        let message = check.result.message;
        Reply::fail(ErrorKind::InvalidInput, message.clone(), message)
    }
}
