//! Walks through the user service in both error shapes.
//!
//! Run with `cargo run --example user_service`. Set `RUST_LOG=warn` to see the
//! structured warnings emitted by `log_failure`.

#[allow(dead_code)]
#[path = "../tests/support/user_service.rs"]
mod user_service;

use outcome_rail::prelude::*;
use tracing_subscriber::EnvFilter;
use user_service::*;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("== email checks ==");
    for email in ["alice@example.com", "", "invalid-email"] {
        match validate_email(email).log_failure() {
            Ok(()) => println!("{email:?}: ok"),
            Err(err) => println!("{email:?}: {}", err.to_detailed_string()),
        }
        let (valid, legacy) = validate_email_legacy(email);
        println!("  legacy: valid={valid} error={legacy:?}");
    }

    println!("\n== accumulated validation ==");
    let (valid, errors) = validate_user_data("", "").into_pair();
    println!("valid={valid}");
    for err in &errors {
        println!("  - {err}");
    }
    let (_, legacy) = validate_user_data_legacy("", "");
    println!("legacy: {legacy:?}");

    println!("\n== registration ==");
    let registered = process_user_registration("  Alice ", "Alice@Example.com", |name, email| {
        println!("creating {name:?} <{email}>");
    });
    match registered {
        Ok(user) => println!("registered {user:?}"),
        Err(err) => println!("{err:#}"),
    }

    println!("\n== lookup ==");
    let users = vec![User::new(1, "Alice", "alice@example.com"), User::new(2, "Bob", "bob@example.com")];
    match find_user_by_email(&users, "carol@example.com") {
        Ok(user) => println!("found {user:?}"),
        Err(err) => {
            println!("{err:#}");
            println!("legacy: {}", LegacyError::from(&err));
        }
    }

    println!("\n== batch ==");
    let batch = create_multiple_users(&[("Alice", "alice@example.com"), ("", "bob@example.com")]);
    if let Err(err) = batch {
        println!("{}", err.detail().compact().cause_depth(usize::MAX));
    }
}
