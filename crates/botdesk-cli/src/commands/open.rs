//! Path-style navigation to any screen.

use super::Context;
use botdesk_core::{AgentForm, Dashboard, Route};

pub fn run(ctx: &Context, path: &str) -> anyhow::Result<()> {
    let route = Route::parse(path);
    tracing::debug!(path, route = %route, "navigating");

    match route {
        Route::Login => {
            println!("Sign in");
            println!("  botdesk login --username <NAME> --password <PASSWORD>");
            println!("Don't have an account? botdesk open /signup");
        }
        Route::Signup => {
            println!("Create your account");
            println!(
                "  botdesk signup --username <NAME> --email <EMAIL> --password <PASSWORD> --phone <DIGITS>"
            );
            println!("Already have an account? botdesk open /login");
        }
        Route::Dashboard => {
            let dashboard = Dashboard::load(&ctx.repo, &ctx.session);
            print!("{}", super::dashboard::render_dashboard(&dashboard));
        }
        Route::NewAgent => {
            let form = AgentForm::create(&ctx.repo);
            print!("{}", super::agent::render_form(&form));
        }
        Route::EditAgent(id) => {
            let form = AgentForm::open(&ctx.repo, Some(&id));
            print!("{}", super::agent::render_form(&form));
        }
    }
    Ok(())
}
