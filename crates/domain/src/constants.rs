//! Application constants
//!
//! Centralized location for all domain-level constants, including the fixed
//! storage keys every collection is persisted under.

// Storage keys (all values are JSON documents)
pub const KEY_PREFIX: &str = "cobrix.";
pub const KEY_COMPANIES: &str = "cobrix.companies";
pub const KEY_SESSION: &str = "cobrix.session";
pub const KEY_PENDING_REGISTRATION: &str = "cobrix.pending_registration";
pub const KEY_CLIENTS: &str = "cobrix.clients";
pub const KEY_PLANS: &str = "cobrix.plans";
pub const KEY_SUBSCRIPTIONS: &str = "cobrix.subscriptions";
pub const KEY_INVOICES: &str = "cobrix.invoices";
pub const KEY_TEMPLATES: &str = "cobrix.templates";
pub const KEY_SCHEDULES: &str = "cobrix.schedules";
pub const KEY_LAST_TEMPLATE: &str = "cobrix.last_template";

// Validation limits
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const BUSINESS_ID_PATTERN: &str = r"^[JVE]-\d{8}-\d$";

// Schedule bounds
pub const MIN_DAY_OFFSET: i32 = -10;
pub const MAX_DAY_OFFSET: i32 = 10;
pub const MAX_SCHEDULED_MESSAGES: usize = 6;

// Bulk import
pub const IMPORT_CSV_COLUMNS: [&str; 6] =
    ["firstname", "lastname", "cedula", "email", "phone", "address"];
