//! Static content for the two landing pages

use super::forms::{Field, Rule, Submission};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A product or model card shown in the catalog section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
}

/// Which landing page to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    /// Laptop store
    #[default]
    Zenith,
    /// Car dealership
    Bmw,
}

const ZENITH_PRODUCTS: &[Product] = &[
    Product {
        name: "Zenith Air 13",
        blurb: "Featherweight ultrabook with all-day battery",
        price: "$999",
    },
    Product {
        name: "Zenith Pro 14",
        blurb: "Creator laptop with a color-accurate display",
        price: "$1,499",
    },
    Product {
        name: "Zenith Forge 16",
        blurb: "Desktop-class graphics for gaming and 3D",
        price: "$2,299",
    },
];

const BMW_PRODUCTS: &[Product] = &[
    Product {
        name: "BMW 3 Series",
        blurb: "The benchmark sports sedan",
        price: "From IDR 1.0B",
    },
    Product {
        name: "BMW X5",
        blurb: "Sports activity vehicle with room for seven",
        price: "From IDR 1.9B",
    },
    Product {
        name: "BMW i4",
        blurb: "All-electric gran coupe",
        price: "From IDR 1.4B",
    },
];

impl Site {
    pub fn brand(&self) -> &'static str {
        match self {
            Self::Zenith => "Zenith Laptops",
            Self::Bmw => "BMW Indonesia",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Zenith => "Power meets portability",
            Self::Bmw => "The Ultimate Driving Machine",
        }
    }

    /// Catalog section title
    pub fn catalog_title(&self) -> &'static str {
        match self {
            Self::Zenith => "Laptops",
            Self::Bmw => "Models",
        }
    }

    pub fn products(&self) -> &'static [Product] {
        match self {
            Self::Zenith => ZENITH_PRODUCTS,
            Self::Bmw => BMW_PRODUCTS,
        }
    }

    /// Question asked by the welcome prompt
    pub fn welcome_question(&self) -> &'static str {
        match self {
            Self::Zenith => "Welcome to Zenith Laptops! What should we call you?",
            Self::Bmw => "Welcome to BMW Indonesia! What's your name?",
        }
    }

    /// How long after startup the welcome prompt appears
    pub fn welcome_delay(&self) -> Duration {
        match self {
            Self::Zenith => Duration::from_millis(1000),
            Self::Bmw => Duration::from_millis(1500),
        }
    }

    /// Toast shown after the visitor introduces themselves
    pub fn greeting_notification(&self, name: &str) -> Option<String> {
        match self {
            Self::Zenith => None,
            Self::Bmw => Some(format!("Hello {name}! Ready to experience BMW?")),
        }
    }

    /// Toast shown when a product card is activated
    pub fn interest_message(&self, product: &Product) -> String {
        match self {
            Self::Zenith => format!("Thanks for your interest in {}!", product.name),
            Self::Bmw => format!(
                "Interested in {}? Contact us for a test drive!",
                product.name
            ),
        }
    }

    /// Contact form fields with their validation rules
    pub fn contact_fields(&self) -> Vec<Field> {
        match self {
            Self::Zenith => vec![
                Field::text("full-name", "Full Name")
                    .with_rule(Rule::required("Please enter your full name"))
                    .with_rule(Rule::min_length(
                        2,
                        "Name must be at least 2 characters long",
                    )),
                Field::text("email", "Email")
                    .with_rule(Rule::required("Please enter your email address"))
                    .with_rule(Rule::email("Please enter a valid email address")),
                Field::multiline("message", "Message")
                    .with_rule(Rule::required("Please enter your message"))
                    .with_rule(Rule::min_length(
                        10,
                        "Message must be at least 10 characters long",
                    )),
            ],
            Self::Bmw => {
                let required = "Please fill out all required fields.";
                vec![
                    Field::text("name", "Name").with_rule(Rule::required(required)),
                    Field::text("email", "Email")
                        .with_rule(Rule::required(required))
                        .with_rule(Rule::email("Please enter a valid email address.")),
                    Field::text("phone", "Phone"),
                    Field::text("interested-model", "Interested Model"),
                    Field::multiline("message", "Message")
                        .with_rule(Rule::required(required))
                        .with_rule(Rule::min_length(
                            10,
                            "Please enter a message with at least 10 characters.",
                        )),
                ]
            }
        }
    }

    /// Lines of the confirmation panel shown after a successful submission
    pub fn success_lines(&self, submission: &Submission) -> Vec<String> {
        match self {
            Self::Zenith => vec![
                "Message Sent Successfully!".to_string(),
                String::new(),
                format!("Name: {}", submission.value("full-name").unwrap_or_default()),
                format!("Email: {}", submission.value("email").unwrap_or_default()),
                format!("Message: {}", submission.value("message").unwrap_or_default()),
                format!("Submitted on: {}", submission.captured_at_display()),
                String::new(),
                "We'll get back to you within 24 hours!".to_string(),
            ],
            Self::Bmw => vec![format!(
                "Thank you, {}! Your inquiry has been sent to BMW Indonesia. \
                 Our team will contact you within 24 hours to discuss your BMW experience. \
                 We look forward to helping you find your ultimate driving machine!",
                submission.value("name").unwrap_or_default().trim()
            )],
        }
    }
}
