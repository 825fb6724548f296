//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Business, BusinessId, CategoryProduct, CategoryProductId, Command, CommandFilter, NewBusiness,
    NewCategoryProduct, UserId, CATEGORY_SEARCH_LIMIT,
};
use crate::domain::ports::{
    AuthTokenIssuer, BusinessRepository, CategoryProductRepository, CommandRepository,
    StorageProvider,
};
use crate::error::{DomainError, StorageError, TokenError};

// ============================================================================
// In-Memory Business Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBusinessRepository {
    businesses: Arc<RwLock<HashMap<BusinessId, Business>>>,
    should_fail: bool,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a business for testing
    pub fn with_business(self, business: Business) -> Self {
        self.businesses
            .write()
            .unwrap()
            .insert(business.id, business);
        self
    }

    pub fn count(&self) -> usize {
        self.businesses.read().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        Ok(())
    }

    fn find_where(&self, pred: impl Fn(&Business) -> bool) -> Result<Option<Business>, DomainError> {
        self.check()?;
        let businesses = self.businesses.read().unwrap();
        Ok(businesses.values().find(|b| pred(b)).cloned())
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        self.check()?;
        Ok(self.businesses.read().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Business>, DomainError> {
        self.find_where(|b| b.name == name)
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Business>, DomainError> {
        self.find_where(|b| b.tax_id == tax_id)
    }

    async fn find_by_cell_phone(
        &self,
        cell_phone: &str,
    ) -> Result<Option<Business>, DomainError> {
        self.find_where(|b| b.cell_phone.as_deref() == Some(cell_phone))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Business>, DomainError> {
        self.find_where(|b| b.phone.as_deref() == Some(phone))
    }

    async fn create(&self, new_business: &NewBusiness) -> Result<Business, DomainError> {
        self.check()?;
        let business = Business {
            id: BusinessId::new(),
            user_id: new_business.user_id,
            name: new_business.name.clone(),
            tax_id: new_business.tax_id.clone(),
            tax_id_kind: new_business.tax_id_kind,
            categories: new_business.categories.clone(),
            cell_phone: new_business.cell_phone.clone(),
            phone: new_business.phone.clone(),
            address: new_business.address.clone(),
            avatar: None,
            created_at: Utc::now(),
        };

        self.businesses
            .write()
            .unwrap()
            .insert(business.id, business.clone());

        Ok(business)
    }

    async fn set_avatar(&self, id: &BusinessId, avatar: &str) -> Result<Business, DomainError> {
        self.check()?;
        let mut businesses = self.businesses.write().unwrap();
        let business = businesses
            .get_mut(id)
            .ok_or(DomainError::BusinessNotFound(*id))?;
        business.avatar = Some(avatar.to_string());
        Ok(business.clone())
    }
}

// ============================================================================
// In-Memory Command Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommandRepository {
    commands: Arc<RwLock<Vec<Command>>>,
    get_all_calls: AtomicUsize,
}

impl InMemoryCommandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(self, command: Command) -> Self {
        self.commands.write().unwrap().push(command);
        self
    }

    /// Number of times `get_all` was invoked
    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandRepository for InMemoryCommandRepository {
    async fn get_all(&self, filter: &CommandFilter) -> Result<Vec<Command>, DomainError> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        let commands = self.commands.read().unwrap();
        Ok(commands
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Category Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryProductRepository {
    categories: Arc<RwLock<Vec<CategoryProduct>>>,
}

impl InMemoryCategoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryProductRepository for InMemoryCategoryProductRepository {
    async fn create(
        &self,
        new_categories: &[NewCategoryProduct],
    ) -> Result<Vec<CategoryProduct>, DomainError> {
        let created: Vec<CategoryProduct> = new_categories
            .iter()
            .map(|c| CategoryProduct {
                id: CategoryProductId(uuid::Uuid::new_v4()),
                label: c.label.clone(),
                label_name: c.label_name.clone(),
                created_at: Utc::now(),
            })
            .collect();

        self.categories
            .write()
            .unwrap()
            .extend(created.iter().cloned());

        Ok(created)
    }

    async fn search_in_category(
        &self,
        search: &str,
    ) -> Result<Vec<CategoryProduct>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories
            .iter()
            .filter(|c| c.label_name.contains(search))
            .take(CATEGORY_SEARCH_LIMIT)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Recording Storage Provider
// ============================================================================

/// Records every saved file; returns the file name as the stored reference
#[derive(Default)]
pub struct RecordingStorageProvider {
    saved: RwLock<Vec<String>>,
    should_fail: bool,
}

impl RecordingStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<String> {
        self.saved.read().unwrap().clone()
    }
}

#[async_trait]
impl StorageProvider for RecordingStorageProvider {
    async fn save_file(&self, file: &str) -> Result<String, StorageError> {
        self.saved.write().unwrap().push(file.to_string());
        if self.should_fail {
            return Err(StorageError::FileNotFound(file.to_string()));
        }
        Ok(file.to_string())
    }
}

// ============================================================================
// Mock Token Issuer
// ============================================================================

#[derive(Default)]
pub struct MockTokenIssuer {
    should_fail: bool,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true }
    }

    /// The token this mock issues for a (user, business) pair
    pub fn token_for(user_id: &UserId, business_id: &BusinessId) -> String {
        format!("token-{}-{}", user_id, business_id)
    }

    /// The token this mock issues for a user without a business
    pub fn user_token_for(user_id: &UserId) -> String {
        format!("token-{}", user_id)
    }
}

#[async_trait]
impl AuthTokenIssuer for MockTokenIssuer {
    async fn issue(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<String, TokenError> {
        if self.should_fail {
            return Err(TokenError::Signing("mock signer unavailable".to_string()));
        }
        Ok(Self::token_for(user_id, business_id))
    }

    async fn issue_for_user(&self, user_id: &UserId) -> Result<String, TokenError> {
        if self.should_fail {
            return Err(TokenError::Signing("mock signer unavailable".to_string()));
        }
        Ok(Self::user_token_for(user_id))
    }
}
