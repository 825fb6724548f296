//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::app::OnboardBusiness;
use crate::domain::entities::{
    Address, Business, BusinessId, Categories, Command, CommandId, UserId,
};
use crate::domain::tax_id::TaxIdKind;

/// Deterministic user id derived from a readable label (`"user-a"`)
pub fn user_id(label: &str) -> UserId {
    let seed = label
        .bytes()
        .fold(0u128, |acc, b| acc.wrapping_mul(131).wrapping_add(b as u128));
    UserId(Uuid::from_u128(seed))
}

/// A valid onboarding request owned by `user`
pub fn onboard_request(user: &str) -> OnboardBusiness {
    OnboardBusiness {
        user_id: user_id(user),
        name: "New Business".to_string(),
        categories: "bares".to_string(),
        tax_id: "889.786.230-69".to_string(),
        cell_phone: Some("19999999999".to_string()),
        phone: Some("1933333333".to_string()),
        zip_code: "99999-999".to_string(),
        number: "9".to_string(),
        complement: Some("Complement Test".to_string()),
        street: "Rua test".to_string(),
        neighborhood: "Neighborhood Test".to_string(),
        city: "City Test".to_string(),
        state: "State Test".to_string(),
        avatar: None,
    }
}

/// Create a test business with default values
pub fn test_business() -> Business {
    Business {
        id: BusinessId::new(),
        user_id: user_id("owner"),
        name: "Test Business".to_string(),
        tax_id: "51874860073230".to_string(),
        tax_id_kind: TaxIdKind::Entity,
        categories: Categories::parse("bares, restaurantes").unwrap(),
        cell_phone: Some("19988887777".to_string()),
        phone: None,
        address: Address {
            zip_code: "13015000".to_string(),
            street: "Rua test".to_string(),
            number: "100".to_string(),
            complement: None,
            neighborhood: "Centro".to_string(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
        },
        avatar: None,
        created_at: Utc::now(),
    }
}

/// Create a test command for a business
pub fn test_command(business_id: BusinessId, closed: bool) -> Command {
    Command {
        id: CommandId::new(),
        business_id,
        table: Some("7".to_string()),
        closed,
        created_at: Utc::now(),
        closed_at: if closed { Some(Utc::now()) } else { None },
    }
}
