//! SQL for each resource. Handlers decide which `None` / zero-row results are 404s.

pub mod company;
pub mod industry;
pub mod invoice;

pub use company::{Company, CompanyDetail, CompanyService};
pub use industry::{Industry, IndustryService};
pub use invoice::{next_paid_date, Invoice, InvoiceService};
