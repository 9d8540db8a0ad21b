//! Test fixtures: records, schemas and documents shared by the suites

use serde::Serialize;
use serde_json::{json, Value};

use crate::infrastructure::Schema;

/// The user from the README walkthrough
pub struct User {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub hobbies: Vec<String>,
}

crate::record!(User {
    name: "required,non-blank",
    age: "min=18,max=100",
    email: "required,email",
    hobbies: "non-empty",
});

impl User {
    /// A user that breaks one rule on every field
    pub fn invalid() -> Self {
        Self {
            name: "   ".to_string(),
            age: 16,
            email: "invalid-email".to_string(),
            hobbies: vec![],
        }
    }

    pub fn valid() -> Self {
        Self {
            name: "Ann".to_string(),
            age: 30,
            email: "ann@example.com".to_string(),
            hobbies: vec!["chess".to_string()],
        }
    }
}

/// Every numeric and presence rule in one record
pub struct Account {
    pub balance: f64,
    pub debt: i64,
    pub credits: u32,
    pub overdraft: f32,
    pub accepted_terms: bool,
    pub referrer: Option<String>,
    pub pin: String,
    pub tags: Vec<String>,
}

crate::record!(Account {
    balance: "positiveOrZero",
    debt: "negativeOrZero",
    credits: "positive",
    overdraft: "negative",
    accepted_terms: "isTrue",
    referrer: "non-null",
    #[private] pin: "required,size=4",
    tags: "minSize=1,maxSize=3",
});

impl Account {
    pub fn valid() -> Self {
        Self {
            balance: 0.0,
            debt: -10,
            credits: 5,
            overdraft: -0.5,
            accepted_terms: true,
            referrer: Some("friend".to_string()),
            pin: String::new(),
            tags: vec!["a".to_string()],
        }
    }
}

/// Dates checked against fixed references
pub struct Booking {
    pub day: String,
    pub checkout: String,
    pub window: String,
    pub created: String,
}

crate::record!(Booking {
    day: "date=2006-01-02",
    checkout: "date-format=02/01/2006",
    window: "after=2024-01-01",
    created: "bogus,required",
});

#[derive(Debug, Clone, Serialize)]
pub struct Signup {
    pub username: String,
    pub age: u8,
    pub email: String,
    #[serde(skip)]
    pub password: String,
}

pub const SIGNUP_SCHEMA: &str = r#"
[[fields]]
name = "username"
rules = "required,minSize=3,maxSize=16"

[[fields]]
name = "age"
rules = "min=13"

[[fields]]
name = "email"
rules = "required,email"

[[fields]]
name = "password"
rules = "required"
"#;

pub fn signup_schema() -> Schema {
    Schema::new()
        .field("username", "required,minSize=3,maxSize=16")
        .field("age", "min=13")
        .field("email", "required,email")
        .field("password", "required")
}

pub fn signup_document() -> Value {
    json!({
        "username": "al",
        "age": 12,
        "email": "al@example",
        "nickname": null
    })
}
