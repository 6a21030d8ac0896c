//! Company/account registry service - core business logic

use std::sync::Arc;

use chrono::Utc;
use cobrix_domain::constants::{BUSINESS_ID_PATTERN, MIN_PASSWORD_LENGTH};
use cobrix_domain::{
    BusinessInfoUpdate, CobrixError, Company, CompanyRegistration, ContactInfoUpdate,
    GeneralInfoUpdate, PaymentInfo, PendingRegistration, Result, Session,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{CompanyRepository, SessionStore};

static BUSINESS_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(BUSINESS_ID_PATTERN).expect("business id pattern is valid"));

/// Account registry service
pub struct AccountService {
    companies: Arc<dyn CompanyRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AccountService {
    /// Create a new account service
    pub fn new(companies: Arc<dyn CompanyRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { companies, sessions }
    }

    /// Validate a registration and park it in the holding area.
    ///
    /// The company is not added to the permanent registry until
    /// [`complete_registration`](Self::complete_registration) runs with a
    /// selected plan. Validation happens fully before any store mutation.
    pub async fn register(&self, registration: CompanyRegistration) -> Result<()> {
        if !BUSINESS_ID_RE.is_match(&registration.business_id) {
            return Err(CobrixError::Validation(format!(
                "business id '{}' does not match the J-########-# format",
                registration.business_id
            )));
        }
        if registration.password.len() < MIN_PASSWORD_LENGTH {
            return Err(CobrixError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let existing = self.companies.find_all().await?;
        for company in &existing {
            // Business id comparison is intentionally case-sensitive; name
            // and email are not.
            if company.business_id == registration.business_id {
                return Err(CobrixError::Conflict(
                    "a company with this business id is already registered".into(),
                ));
            }
            if company.legal_name.eq_ignore_ascii_case(&registration.legal_name) {
                return Err(CobrixError::Conflict(
                    "a company with this name is already registered".into(),
                ));
            }
            if company.email.eq_ignore_ascii_case(&registration.email) {
                return Err(CobrixError::Conflict(
                    "a company with this email is already registered".into(),
                ));
            }
        }

        info!(business_id = %registration.business_id, "registration parked pending plan selection");
        self.sessions
            .set_pending_registration(PendingRegistration {
                registration,
                created_at: Utc::now(),
            })
            .await
    }

    /// Merge the pending registration with the selected plan and payment
    /// metadata, append it to the permanent registry and open a session.
    pub async fn complete_registration(
        &self,
        plan: &str,
        payment: PaymentInfo,
    ) -> Result<Company> {
        let pending = self.sessions.pending_registration().await?.ok_or_else(|| {
            CobrixError::NotFound("no pending registration to complete".into())
        })?;

        let registration = pending.registration;
        let company = Company {
            id: Uuid::new_v4().to_string(),
            business_id: registration.business_id,
            legal_name: registration.legal_name,
            owner_name: registration.owner_name,
            email: registration.email,
            phone: registration.phone,
            location: registration.location,
            niche: registration.niche,
            customer_volume_band: registration.customer_volume_band,
            password: registration.password,
            registered_at: Utc::now(),
            plan: plan.to_string(),
        };

        self.companies.insert(company.clone()).await?;
        self.sessions
            .set_session(Session {
                company_id: company.id.clone(),
                email: company.email.clone(),
                started_at: Utc::now(),
            })
            .await?;
        self.sessions.clear_pending_registration().await?;

        info!(
            company_id = %company.id,
            plan = %company.plan,
            payment_method = %payment.method,
            "registration completed"
        );
        Ok(company)
    }

    /// Authenticate a company by email (case-insensitive) and password.
    ///
    /// The failure message never reveals which field was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<Company> {
        let companies = self.companies.find_all().await?;
        let company = companies
            .into_iter()
            .find(|c| c.email.eq_ignore_ascii_case(email) && c.password == password);

        match company {
            Some(company) => {
                self.sessions
                    .set_session(Session {
                        company_id: company.id.clone(),
                        email: company.email.clone(),
                        started_at: Utc::now(),
                    })
                    .await?;
                info!(company_id = %company.id, "login succeeded");
                Ok(company)
            }
            None => {
                warn!("login attempt failed");
                Err(CobrixError::Auth("invalid email or password".into()))
            }
        }
    }

    /// Clear the authenticated session marker only.
    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear_session().await
    }

    /// Get the current session, if a company is logged in.
    pub async fn current_session(&self) -> Result<Option<Session>> {
        self.sessions.session().await
    }

    /// Update the general-info profile group (name, business id, owner).
    pub async fn update_general_info(
        &self,
        company_id: &str,
        update: GeneralInfoUpdate,
    ) -> Result<Company> {
        if let Some(business_id) = &update.business_id {
            if !BUSINESS_ID_RE.is_match(business_id) {
                return Err(CobrixError::Validation(format!(
                    "business id '{business_id}' does not match the J-########-# format"
                )));
            }
        }

        let mut company = self.require_company(company_id).await?;
        if let Some(legal_name) = update.legal_name {
            company.legal_name = legal_name;
        }
        if let Some(business_id) = update.business_id {
            company.business_id = business_id;
        }
        if let Some(owner_name) = update.owner_name {
            company.owner_name = owner_name;
        }
        self.companies.update(company.clone()).await?;
        Ok(company)
    }

    /// Update the contact-info profile group (email, phone, location).
    pub async fn update_contact_info(
        &self,
        company_id: &str,
        update: ContactInfoUpdate,
    ) -> Result<Company> {
        if let Some(email) = &update.email {
            if !email.contains('@') {
                return Err(CobrixError::Validation(format!(
                    "'{email}' is not a valid email address"
                )));
            }
        }

        let mut company = self.require_company(company_id).await?;
        if let Some(email) = update.email {
            company.email = email;
        }
        if let Some(phone) = update.phone {
            company.phone = phone;
        }
        if let Some(location) = update.location {
            company.location = location;
        }
        self.companies.update(company.clone()).await?;
        Ok(company)
    }

    /// Update the business-info profile group (niche, customer volume).
    pub async fn update_business_info(
        &self,
        company_id: &str,
        update: BusinessInfoUpdate,
    ) -> Result<Company> {
        let mut company = self.require_company(company_id).await?;
        if let Some(niche) = update.niche {
            company.niche = niche;
        }
        if let Some(band) = update.customer_volume_band {
            company.customer_volume_band = band;
        }
        self.companies.update(company.clone()).await?;
        Ok(company)
    }

    /// Administrative wipe: clear every stored entity collection.
    pub async fn wipe(&self) -> Result<()> {
        warn!("administrative wipe requested, clearing all stored state");
        self.sessions.wipe_all().await
    }

    async fn require_company(&self, company_id: &str) -> Result<Company> {
        self.companies.find_by_id(company_id).await?.ok_or_else(|| {
            CobrixError::NotFound(format!("company '{company_id}' not found"))
        })
    }
}
