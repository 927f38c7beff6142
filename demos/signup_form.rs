//! Signup form example - guarding a constructor with preconditions
//!
//! This example shows how argument checks read in a typical web handler.

use stipulate::prelude::*;

// Domain types
#[derive(Debug, Clone, PartialEq)]
struct Email(String);

#[derive(Debug, Clone, PartialEq)]
struct Age(u8);

#[derive(Debug, PartialEq)]
struct User {
    email: Email,
    age: Age,
    roles: Vec<String>,
}

// Raw input from form
struct SignupForm {
    email: Option<String>,
    age: u8,
    roles: Vec<String>,
}

fn register(form: SignupForm) -> Result<User, ArgumentError> {
    let email = requires_named(form.email, "email")
        .is_not_null_or_empty()?
        .contains_with("@", "{0} should be an email address")?
        .into_inner()
        .unwrap_or_default();

    let age = requires_named(form.age, "age")
        .is_greater_or_equal_with(18, "{0} should be at least 18 to sign up")?
        .into_inner();

    let roles = requires_named(form.roles, "roles")
        .is_not_empty()?
        .does_not_contain("admin")?
        .into_inner();

    Ok(User {
        email: Email(email),
        age: Age(age),
        roles,
    })
}

fn main() {
    let forms = vec![
        SignupForm {
            email: Some("ada@example.com".to_string()),
            age: 36,
            roles: vec!["editor".to_string()],
        },
        SignupForm {
            email: None,
            age: 36,
            roles: vec!["editor".to_string()],
        },
        SignupForm {
            email: Some("grace".to_string()),
            age: 40,
            roles: vec!["viewer".to_string()],
        },
        SignupForm {
            email: Some("linus@example.com".to_string()),
            age: 12,
            roles: vec!["viewer".to_string()],
        },
        SignupForm {
            email: Some("ken@example.com".to_string()),
            age: 50,
            roles: vec!["admin".to_string()],
        },
    ];

    for form in forms {
        match register(form) {
            Ok(user) => println!("registered: {:?}", user),
            Err(e) => println!("rejected ({:?}): {}", e.kind(), e),
        }
    }
}
