//! Authentication command handlers

use std::io::{self, Write};

use qrate::core::gateway::ApiClient;
use qrate::core::session::{self, SessionStore};
use tracing::{error, info};

/// Handle the login command.
///
/// Auth failures are rendered inline without clearing anything the user
/// entered; a success persists both session fields.
pub async fn login(api: &ApiClient, mut session: SessionStore, email: &str, password: &str) {
    if !session::is_institutional_email(email) {
        eprintln!("Please use a valid @queensu.ca email address.");
        std::process::exit(1);
    }

    match api.login(email, password).await {
        Ok(auth) => {
            if let Err(e) = session.login(&auth.email, &auth.token) {
                error!("Session persist failed: {e}");
                eprintln!("✗ Signed in, but the session could not be saved: {e}");
                std::process::exit(1);
            }
            info!("Signed in as {}", auth.email);
            println!("✓ Signed in as {}", auth.email);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Handle the register command.
pub async fn register(
    api: &ApiClient,
    mut session: SessionStore,
    email: &str,
    password: &str,
    confirm: Option<&str>,
) {
    if !session::is_institutional_email(email) {
        eprintln!("Please use a valid @queensu.ca email address.");
        std::process::exit(1);
    }

    if let Some(confirm) = confirm {
        if confirm != password {
            eprintln!("Passwords do not match.");
            std::process::exit(1);
        }
    }

    match api.register(email, password).await {
        Ok(auth) => {
            if let Err(e) = session.login(&auth.email, &auth.token) {
                error!("Session persist failed: {e}");
                eprintln!("✗ Account created, but the session could not be saved: {e}");
                std::process::exit(1);
            }
            println!("✓ Account created; signed in as {}", auth.email);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Handle the logout command. Asks for confirmation naming the
/// signed-in email before clearing anything.
pub fn logout(mut session: SessionStore) {
    let Some(email) = session.current().map(|c| c.user_email.clone()) else {
        println!("Not signed in.");
        return;
    };

    print!("Are you sure you want to sign out of {email}? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        match session.logout() {
            Ok(()) => println!("✓ Signed out"),
            Err(e) => {
                eprintln!("✗ Failed to clear session: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("✗ Sign out cancelled");
    }
}

/// Handle the whoami command
pub fn whoami(session: &SessionStore) {
    match session.current() {
        Some(credentials) => println!("Signed in as {}", credentials.user_email),
        None => println!("Not signed in."),
    }
}
