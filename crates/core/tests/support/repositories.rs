//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core repository ports, enabling
//! deterministic unit tests without database dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cobrix_core::account::ports::{CompanyRepository, SessionStore};
use cobrix_core::clients::ports::ClientRepository;
use cobrix_core::ledger::ports::InvoiceRepository;
use cobrix_core::subscriptions::ports::{PlanRepository, SubscriptionRepository};
use cobrix_core::templates::ports::{ScheduleRepository, TemplateRepository};
use cobrix_domain::{
    Client, CobrixError, Company, Invoice, PendingRegistration, Result as DomainResult,
    ScheduledMessage, Session, Subscription, SubscriptionPlan, Template,
};

/// In-memory mock for `CompanyRepository`.
#[derive(Default, Clone)]
pub struct MockCompanyRepository {
    companies: Arc<Mutex<Vec<Company>>>,
}

impl MockCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepository {
    async fn find_all(&self) -> DomainResult<Vec<Company>> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Company>> {
        Ok(self.companies.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, company: Company) -> DomainResult<()> {
        self.companies.lock().unwrap().push(company);
        Ok(())
    }

    async fn update(&self, company: Company) -> DomainResult<()> {
        let mut companies = self.companies.lock().unwrap();
        match companies.iter_mut().find(|c| c.id == company.id) {
            Some(slot) => {
                *slot = company;
                Ok(())
            }
            None => Err(CobrixError::NotFound(format!("company '{}' not found", company.id))),
        }
    }
}

/// In-memory mock for `SessionStore`.
#[derive(Default, Clone)]
pub struct MockSessionStore {
    session: Arc<Mutex<Option<Session>>>,
    pending: Arc<Mutex<Option<PendingRegistration>>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn session(&self) -> DomainResult<Option<Session>> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn set_session(&self, session: Session) -> DomainResult<()> {
        *self.session.lock().unwrap() = Some(session);
        Ok(())
    }

    async fn clear_session(&self) -> DomainResult<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn pending_registration(&self) -> DomainResult<Option<PendingRegistration>> {
        Ok(self.pending.lock().unwrap().clone())
    }

    async fn set_pending_registration(&self, pending: PendingRegistration) -> DomainResult<()> {
        *self.pending.lock().unwrap() = Some(pending);
        Ok(())
    }

    async fn clear_pending_registration(&self) -> DomainResult<()> {
        *self.pending.lock().unwrap() = None;
        Ok(())
    }

    async fn wipe_all(&self) -> DomainResult<()> {
        *self.session.lock().unwrap() = None;
        *self.pending.lock().unwrap() = None;
        Ok(())
    }
}

/// In-memory mock for `ClientRepository`.
#[derive(Default, Clone)]
pub struct MockClientRepository {
    clients: Arc<Mutex<Vec<Client>>>,
}

impl MockClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_all(&self) -> DomainResult<Vec<Client>> {
        Ok(self.clients.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>> {
        Ok(self.clients.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, client: Client) -> DomainResult<()> {
        self.clients.lock().unwrap().push(client);
        Ok(())
    }

    async fn update(&self, client: Client) -> DomainResult<()> {
        let mut clients = self.clients.lock().unwrap();
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(slot) => {
                *slot = client;
                Ok(())
            }
            None => Err(CobrixError::NotFound(format!("client {} not found", client.id))),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut clients = self.clients.lock().unwrap();
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Err(CobrixError::NotFound(format!("client {id} not found")));
        }
        Ok(())
    }
}

/// In-memory mock for `SubscriptionRepository`.
#[derive(Default, Clone)]
pub struct MockSubscriptionRepository {
    subscriptions: Arc<Mutex<Vec<Subscription>>>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscription(self, subscription: Subscription) -> Self {
        self.subscriptions.lock().unwrap().push(subscription);
        self
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn find_all(&self) -> DomainResult<Vec<Subscription>> {
        Ok(self.subscriptions.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Subscription>> {
        Ok(self.subscriptions.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, subscription: Subscription) -> DomainResult<()> {
        self.subscriptions.lock().unwrap().push(subscription);
        Ok(())
    }

    async fn update(&self, subscription: Subscription) -> DomainResult<()> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        match subscriptions.iter_mut().find(|s| s.id == subscription.id) {
            Some(slot) => {
                *slot = subscription;
                Ok(())
            }
            None => Err(CobrixError::NotFound(format!(
                "subscription {} not found",
                subscription.id
            ))),
        }
    }
}

/// In-memory mock for `PlanRepository`.
#[derive(Default, Clone)]
pub struct MockPlanRepository {
    plans: Arc<Mutex<Vec<SubscriptionPlan>>>,
}

impl MockPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(self, plan: SubscriptionPlan) -> Self {
        self.plans.lock().unwrap().push(plan);
        self
    }
}

#[async_trait]
impl PlanRepository for MockPlanRepository {
    async fn find_all(&self) -> DomainResult<Vec<SubscriptionPlan>> {
        Ok(self.plans.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<SubscriptionPlan>> {
        Ok(self.plans.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, plan: SubscriptionPlan) -> DomainResult<()> {
        self.plans.lock().unwrap().push(plan);
        Ok(())
    }
}

/// In-memory mock for `InvoiceRepository`.
#[derive(Default, Clone)]
pub struct MockInvoiceRepository {
    invoices: Arc<Mutex<Vec<Invoice>>>,
}

impl MockInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invoice(self, invoice: Invoice) -> Self {
        self.invoices.lock().unwrap().push(invoice);
        self
    }
}

#[async_trait]
impl InvoiceRepository for MockInvoiceRepository {
    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        Ok(self.invoices.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Invoice>> {
        Ok(self.invoices.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, invoice: Invoice) -> DomainResult<()> {
        self.invoices.lock().unwrap().push(invoice);
        Ok(())
    }

    async fn update(&self, invoice: Invoice) -> DomainResult<()> {
        let mut invoices = self.invoices.lock().unwrap();
        match invoices.iter_mut().find(|i| i.id == invoice.id) {
            Some(slot) => {
                *slot = invoice;
                Ok(())
            }
            None => Err(CobrixError::NotFound(format!("transaction {} not found", invoice.id))),
        }
    }
}

/// In-memory mock for `TemplateRepository`.
#[derive(Default, Clone)]
pub struct MockTemplateRepository {
    templates: Arc<Mutex<Vec<Template>>>,
}

impl MockTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateRepository for MockTemplateRepository {
    async fn find_all(&self) -> DomainResult<Vec<Template>> {
        Ok(self.templates.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Template>> {
        Ok(self.templates.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, template: Template) -> DomainResult<()> {
        self.templates.lock().unwrap().push(template);
        Ok(())
    }

    async fn update(&self, template: Template) -> DomainResult<()> {
        let mut templates = self.templates.lock().unwrap();
        match templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => {
                *slot = template;
                Ok(())
            }
            None => Err(CobrixError::NotFound(format!("template {} not found", template.id))),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut templates = self.templates.lock().unwrap();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(CobrixError::NotFound(format!("template {id} not found")));
        }
        Ok(())
    }
}

/// In-memory mock for `ScheduleRepository`.
#[derive(Default, Clone)]
pub struct MockScheduleRepository {
    schedules: Arc<Mutex<std::collections::HashMap<i64, Vec<ScheduledMessage>>>>,
    last_template: Arc<Mutex<Option<i64>>>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn schedule_for(&self, template_id: i64) -> DomainResult<Vec<ScheduledMessage>> {
        Ok(self.schedules.lock().unwrap().get(&template_id).cloned().unwrap_or_default())
    }

    async fn save_schedule(
        &self,
        template_id: i64,
        entries: Vec<ScheduledMessage>,
    ) -> DomainResult<()> {
        self.schedules.lock().unwrap().insert(template_id, entries);
        Ok(())
    }

    async fn set_last_template(&self, template_id: i64) -> DomainResult<()> {
        *self.last_template.lock().unwrap() = Some(template_id);
        Ok(())
    }

    async fn last_template(&self) -> DomainResult<Option<i64>> {
        Ok(*self.last_template.lock().unwrap())
    }
}
