//! Business onboarding service
//!
//! Validates an onboarding request, enforces uniqueness of the identifying
//! fields, persists the business, stores the optional avatar and issues a
//! session token bound to the new business.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Address, Business, Categories, NewBusiness, UserId};
use crate::domain::normalize::{digits_only, normalize_phone};
use crate::domain::ports::{AuthTokenIssuer, BusinessRepository, StorageProvider};
use crate::domain::tax_id::TaxId;
use crate::error::{AppError, DomainError};

/// Onboarding request as received from the caller
#[derive(Debug, Clone)]
pub struct OnboardBusiness {
    pub user_id: UserId,
    pub name: String,
    /// Comma-separated category labels
    pub categories: String,
    pub tax_id: String,
    pub cell_phone: Option<String>,
    pub phone: Option<String>,
    pub zip_code: String,
    pub number: String,
    pub complement: Option<String>,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// Reference to an uploaded file waiting to be persisted
    pub avatar: Option<String>,
}

/// Result of a successful onboarding
#[derive(Debug, Clone, Serialize)]
pub struct OnboardedBusiness {
    pub token: String,
    pub business: Business,
}

/// Service for onboarding businesses
pub struct BusinessOnboardingService<BR, TI, SP>
where
    BR: BusinessRepository,
    TI: AuthTokenIssuer,
    SP: StorageProvider,
{
    businesses: Arc<BR>,
    tokens: Arc<TI>,
    storage: Arc<SP>,
}

impl<BR, TI, SP> BusinessOnboardingService<BR, TI, SP>
where
    BR: BusinessRepository,
    TI: AuthTokenIssuer,
    SP: StorageProvider,
{
    pub fn new(businesses: Arc<BR>, tokens: Arc<TI>, storage: Arc<SP>) -> Self {
        Self {
            businesses,
            tokens,
            storage,
        }
    }

    /// Onboard a new business
    ///
    /// Steps, each failing fast:
    /// 1. Parse categories (1 to 4) and required fields
    /// 2. Validate the tax id
    /// 3. Uniqueness probes: name, tax id, cell phone, phone (in that order)
    /// 4. Persist the business
    /// 5. Store the avatar, if any, and attach it
    /// 6. Issue a session token for (user, business)
    ///
    /// Steps 5 and 6 are not compensated: if they fail the business stays
    /// persisted and the error is returned to the caller.
    pub async fn execute(&self, request: OnboardBusiness) -> Result<OnboardedBusiness, AppError> {
        let categories = Categories::parse(&request.categories)?;
        let name = required("name", &request.name)?;
        let address = Address {
            zip_code: digits_only(&required("zip_code", &request.zip_code)?),
            street: required("street", &request.street)?,
            number: required("number", &request.number)?,
            complement: request
                .complement
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            neighborhood: required("neighborhood", &request.neighborhood)?,
            city: required("city", &request.city)?,
            state: required("state", &request.state)?,
        };
        if address.zip_code.is_empty() {
            return Err(DomainError::InvalidInput("zip_code must contain digits".to_string()).into());
        }

        let tax_id = TaxId::parse(&request.tax_id)?;
        let cell_phone = normalize_phone(request.cell_phone.as_deref());
        let phone = normalize_phone(request.phone.as_deref());

        if self.businesses.find_by_name(&name).await?.is_some() {
            tracing::debug!(name = %name, "Onboarding rejected: name already registered");
            return Err(DomainError::DuplicateName(name).into());
        }

        if self.businesses.find_by_tax_id(tax_id.as_str()).await?.is_some() {
            tracing::debug!(kind = %tax_id.kind(), "Onboarding rejected: tax id already registered");
            return Err(DomainError::DuplicateTaxId(tax_id.to_string()).into());
        }

        if let Some(ref cell_phone) = cell_phone {
            if self.businesses.find_by_cell_phone(cell_phone).await?.is_some() {
                tracing::debug!("Onboarding rejected: cell phone already registered");
                return Err(DomainError::DuplicateCellPhone(cell_phone.clone()).into());
            }
        }

        if let Some(ref phone) = phone {
            if self.businesses.find_by_phone(phone).await?.is_some() {
                tracing::debug!("Onboarding rejected: phone already registered");
                return Err(DomainError::DuplicatePhone(phone.clone()).into());
            }
        }

        let new_business = NewBusiness {
            user_id: request.user_id,
            name,
            tax_id: tax_id.to_string(),
            tax_id_kind: tax_id.kind(),
            categories,
            cell_phone,
            phone,
            address,
        };

        let mut business = self.businesses.create(&new_business).await?;

        if let Some(avatar) = request.avatar.as_deref().filter(|a| !a.is_empty()) {
            let stored = self.storage.save_file(avatar).await?;
            business = self.businesses.set_avatar(&business.id, &stored).await?;
        }

        let token = self.tokens.issue(&request.user_id, &business.id).await?;

        tracing::info!(
            business_id = %business.id,
            user_id = %business.user_id,
            categories = business.categories.len(),
            "Business onboarded"
        );

        Ok(OnboardedBusiness { token, business })
    }
}

/// Trim a required field, failing on blank input
fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        onboard_request, InMemoryBusinessRepository, MockTokenIssuer, RecordingStorageProvider,
    };

    type TestService = BusinessOnboardingService<
        InMemoryBusinessRepository,
        MockTokenIssuer,
        RecordingStorageProvider,
    >;

    struct Harness {
        service: TestService,
        businesses: Arc<InMemoryBusinessRepository>,
        storage: Arc<RecordingStorageProvider>,
    }

    fn harness() -> Harness {
        harness_with(MockTokenIssuer::new(), RecordingStorageProvider::new())
    }

    fn harness_with(tokens: MockTokenIssuer, storage: RecordingStorageProvider) -> Harness {
        let businesses = Arc::new(InMemoryBusinessRepository::new());
        let storage = Arc::new(storage);
        let service =
            BusinessOnboardingService::new(businesses.clone(), Arc::new(tokens), storage.clone());
        Harness {
            service,
            businesses,
            storage,
        }
    }

    fn domain_err(result: Result<OnboardedBusiness, AppError>) -> DomainError {
        match result {
            Err(AppError::Domain(e)) => e,
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn onboard_with_avatar() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.avatar = Some("avatar.jpg".to_string());

        let result = h.service.execute(request).await.unwrap();

        assert!(!result.token.is_empty());
        assert_eq!(result.business.name, "New Business");
        assert_eq!(result.business.avatar.as_deref(), Some("avatar.jpg"));
        assert_eq!(h.storage.saved(), vec!["avatar.jpg".to_string()]);
    }

    #[tokio::test]
    async fn onboard_without_avatar_skips_storage() {
        let h = harness();

        let result = h.service.execute(onboard_request("user-a")).await.unwrap();

        assert!(!result.token.is_empty());
        assert!(result.business.avatar.is_none());
        assert!(h.storage.saved().is_empty());
    }

    #[tokio::test]
    async fn onboard_without_optional_contact_fields() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.cell_phone = None;
        request.phone = None;
        request.complement = None;

        let result = h.service.execute(request).await.unwrap();

        assert!(result.business.cell_phone.is_none());
        assert!(result.business.phone.is_none());
        assert!(result.business.address.complement.is_none());
    }

    #[tokio::test]
    async fn token_is_bound_to_user_and_business() {
        let h = harness();
        let request = onboard_request("user-a");
        let user_id = request.user_id;

        let result = h.service.execute(request).await.unwrap();

        assert_eq!(
            result.token,
            MockTokenIssuer::token_for(&user_id, &result.business.id)
        );
        assert_eq!(result.business.user_id, user_id);
    }

    #[tokio::test]
    async fn stores_normalized_values() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.cell_phone = Some("(19) 99999-9999".to_string());
        request.phone = Some("(19) 3333-3333".to_string());
        request.zip_code = "13015-000".to_string();

        let business = h.service.execute(request).await.unwrap().business;

        assert_eq!(business.tax_id, "88978623069");
        assert_eq!(business.cell_phone.as_deref(), Some("19999999999"));
        assert_eq!(business.phone.as_deref(), Some("1933333333"));
        assert_eq!(business.address.zip_code, "13015000");
    }

    #[tokio::test]
    async fn rejects_more_than_four_categories() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.categories = "bar one, bar two, bar three, bar four, bar five".to_string();

        let err = domain_err(h.service.execute(request).await);

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.is_business_rule());
        assert_eq!(h.businesses.count(), 0);
    }

    #[tokio::test]
    async fn rejects_empty_categories() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.categories = " , ".to_string();

        let err = domain_err(h.service.execute(request).await);

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn accepts_four_categories() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.categories = "bares, restaurantes, cafés, padarias".to_string();

        let business = h.service.execute(request).await.unwrap().business;

        assert_eq!(business.categories.len(), 4);
    }

    #[tokio::test]
    async fn rejects_blank_required_field() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.city = "   ".to_string();

        let err = domain_err(h.service.execute(request).await);

        assert!(matches!(err, DomainError::InvalidInput(ref msg) if msg.contains("city")));
    }

    #[tokio::test]
    async fn rejects_invalid_tax_id() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.tax_id = "invalid-taxId".to_string();

        let err = domain_err(h.service.execute(request).await);

        assert!(matches!(err, DomainError::InvalidTaxId(_)));
        assert_eq!(h.businesses.count(), 0);
    }

    #[tokio::test]
    async fn categories_are_checked_before_tax_id() {
        let h = harness();
        let mut request = onboard_request("user-a");
        request.categories = "a,b,c,d,e".to_string();
        request.tax_id = "invalid-taxId".to_string();

        let err = domain_err(h.service.execute(request).await);

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn rejects_duplicate_name() {
        let h = harness();
        h.service.execute(onboard_request("user-a")).await.unwrap();

        let err = domain_err(h.service.execute(onboard_request("user-a")).await);

        assert!(matches!(err, DomainError::DuplicateName(ref n) if n == "New Business"));
        assert_eq!(h.businesses.count(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_individual_tax_id_across_formats() {
        let h = harness();
        h.service.execute(onboard_request("user-a")).await.unwrap();

        let mut second = onboard_request("user-b");
        second.name = "New Business Two".to_string();
        second.tax_id = "88978623069".to_string();
        second.cell_phone = Some("19999999997".to_string());
        second.phone = Some("1933333332".to_string());

        let err = domain_err(h.service.execute(second).await);

        assert!(matches!(err, DomainError::DuplicateTaxId(ref t) if t == "88978623069"));
    }

    #[tokio::test]
    async fn rejects_duplicate_tax_id_for_same_user() {
        let h = harness();
        h.service.execute(onboard_request("user-a")).await.unwrap();

        let mut second = onboard_request("user-a");
        second.name = "New Business Two".to_string();
        second.cell_phone = Some("19999999997".to_string());
        second.phone = Some("1933333332".to_string());

        let err = domain_err(h.service.execute(second).await);

        assert!(matches!(err, DomainError::DuplicateTaxId(_)));
    }

    #[tokio::test]
    async fn rejects_duplicate_entity_tax_id() {
        let h = harness();
        let mut first = onboard_request("user-a");
        first.tax_id = "51874860073230".to_string();
        h.service.execute(first).await.unwrap();

        let mut second = onboard_request("user-b");
        second.name = "New Business Two".to_string();
        second.tax_id = "51.874.860/0732-30".to_string();
        second.cell_phone = Some("19999999997".to_string());
        second.phone = Some("1933333332".to_string());

        let err = domain_err(h.service.execute(second).await);

        assert!(matches!(err, DomainError::DuplicateTaxId(_)));
    }

    #[tokio::test]
    async fn rejects_duplicate_cell_phone_across_users_and_formats() {
        let h = harness();
        let mut first = onboard_request("user-a");
        first.cell_phone = Some("(19) 99999-9999".to_string());
        h.service.execute(first).await.unwrap();

        let mut second = onboard_request("user-b");
        second.name = "New Business Two".to_string();
        second.tax_id = "51874860073230".to_string();
        second.cell_phone = Some("19999999999".to_string());
        second.phone = Some("1933333332".to_string());

        let err = domain_err(h.service.execute(second).await);

        assert!(matches!(err, DomainError::DuplicateCellPhone(ref p) if p == "19999999999"));
    }

    #[tokio::test]
    async fn rejects_duplicate_phone() {
        let h = harness();
        h.service.execute(onboard_request("user-a")).await.unwrap();

        let mut second = onboard_request("user-b");
        second.name = "New Business Two".to_string();
        second.tax_id = "51874860073230".to_string();
        second.cell_phone = Some("19999999997".to_string());

        let err = domain_err(h.service.execute(second).await);

        assert!(matches!(err, DomainError::DuplicatePhone(_)));
    }

    #[tokio::test]
    async fn duplicate_errors_follow_fixed_order() {
        let h = harness();
        h.service.execute(onboard_request("user-a")).await.unwrap();

        // Same name, tax id, cell phone and phone: name wins
        let err = domain_err(h.service.execute(onboard_request("user-b")).await);
        assert!(matches!(err, DomainError::DuplicateName(_)));

        // Same tax id, cell phone and phone: tax id wins
        let mut request = onboard_request("user-b");
        request.name = "Other".to_string();
        let err = domain_err(h.service.execute(request).await);
        assert!(matches!(err, DomainError::DuplicateTaxId(_)));

        // Same cell phone and phone: cell phone wins
        let mut request = onboard_request("user-b");
        request.name = "Other".to_string();
        request.tax_id = "51874860073230".to_string();
        let err = domain_err(h.service.execute(request).await);
        assert!(matches!(err, DomainError::DuplicateCellPhone(_)));
    }

    #[tokio::test]
    async fn storage_failure_propagates_after_create() {
        let h = harness_with(MockTokenIssuer::new(), RecordingStorageProvider::failing());
        let mut request = onboard_request("user-a");
        request.avatar = Some("missing.jpg".to_string());

        let result = h.service.execute(request).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        // No compensation: the record created before the failure remains
        assert_eq!(h.businesses.count(), 1);
    }

    #[tokio::test]
    async fn token_failure_propagates_after_create() {
        let h = harness_with(MockTokenIssuer::failing(), RecordingStorageProvider::new());

        let result = h.service.execute(onboard_request("user-a")).await;

        assert!(matches!(result, Err(AppError::Token(_))));
        assert_eq!(h.businesses.count(), 1);
    }

    #[tokio::test]
    async fn repository_failure_aborts() {
        let businesses = Arc::new(InMemoryBusinessRepository::failing());
        let service = BusinessOnboardingService::new(
            businesses,
            Arc::new(MockTokenIssuer::new()),
            Arc::new(RecordingStorageProvider::new()),
        );

        let result = service.execute(onboard_request("user-a")).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Database(_)))
        ));
    }
}
