//! Sign-up and sign-in commands.

use super::Context;
use crate::cli::SignupArgs;
use botdesk_core::{login as sign_in, SignupError, SignupForm};

pub fn signup(ctx: &Context, args: &SignupArgs) -> anyhow::Result<()> {
    let form = SignupForm {
        username: args.username.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        phone: args.phone.clone(),
        country_code: args.country_code.clone(),
    };

    match form.submit(&ctx.session) {
        Ok(next) => {
            println!("Account created for {}. Next: {next}", form.username);
            Ok(())
        }
        Err(SignupError::Validation(e)) => anyhow::bail!("{e}"),
        Err(e) => Err(e.into()),
    }
}

/// Sign in, then show the screen the sign-in leads to.
pub fn login(ctx: &Context, username: &str, password: &str) -> anyhow::Result<()> {
    let next = sign_in(username, password);
    super::open::run(ctx, &next.path())
}
