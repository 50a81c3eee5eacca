mod accounting;
mod attachment;
mod bank_account;
mod bank_transaction;
mod bank_transaction_explanation;
mod bill;
mod capital_asset;
mod category;
mod common;
mod company;
mod contact;
mod corporation_tax_return;
mod credit_note;
mod envelope;
mod estimate;
mod expense;
mod final_accounts_report;
mod invoice;
mod journal_set;
mod note;
mod payroll;
mod payroll_profile;
mod price_list_item;
mod project;
mod recurring_invoice;
mod sales_tax_period;
mod self_assessment_return;
mod stock_item;
mod task;
mod timeslip;
mod user;
mod vat_return;

pub use self::accounting::*;
pub use self::attachment::*;
pub use self::bank_account::*;
pub use self::bank_transaction::*;
pub use self::bank_transaction_explanation::*;
pub use self::bill::*;
pub use self::capital_asset::*;
pub use self::category::*;
pub use self::common::*;
pub use self::company::*;
pub use self::contact::*;
pub use self::corporation_tax_return::*;
pub use self::credit_note::*;
pub use self::envelope::*;
pub use self::estimate::*;
pub use self::expense::*;
pub use self::final_accounts_report::*;
pub use self::invoice::*;
pub use self::journal_set::*;
pub use self::note::*;
pub use self::payroll::*;
pub use self::payroll_profile::*;
pub use self::price_list_item::*;
pub use self::project::*;
pub use self::recurring_invoice::*;
pub use self::sales_tax_period::*;
pub use self::self_assessment_return::*;
pub use self::stock_item::*;
pub use self::task::*;
pub use self::timeslip::*;
pub use self::user::*;
pub use self::vat_return::*;

/// A resource with its own top-level collection, `<base>/<PATH>/<id>`.
pub trait Resource {
    /// Key of the singleton envelope, e.g. `bank_account`.
    const NAME: &'static str;
    /// Collection path below the base URL, e.g. `bank_accounts`.
    const PATH: &'static str;
}

/// Records whose identity is a URL.
pub trait HasUrl {
    fn url(&self) -> Option<&str>;

    /// Last segment of the URL. `None` for records not yet created.
    fn id(&self) -> Option<&str> {
        self.url().and_then(crate::config::id_from_url)
    }
}

macro_rules! has_url {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HasUrl for $ty {
                fn url(&self) -> Option<&str> {
                    self.url.as_deref()
                }
            }
        )+
    };
}

macro_rules! resource {
    ($($ty:ty => $name:literal, $path:literal;)+) => {
        $(
            impl Resource for $ty {
                const NAME: &'static str = $name;
                const PATH: &'static str = $path;
            }

            has_url!($ty);
        )+
    };
}

resource! {
    Contact => "contact", "contacts";
    Invoice => "invoice", "invoices";
    CreditNote => "credit_note", "credit_notes";
    Estimate => "estimate", "estimates";
    RecurringInvoice => "recurring_invoice", "recurring_invoices";
    Bill => "bill", "bills";
    BankAccount => "bank_account", "bank_accounts";
    BankTransaction => "bank_transaction", "bank_transactions";
    BankTransactionExplanation => "bank_transaction_explanation", "bank_transaction_explanations";
    Category => "category", "categories";
    User => "user", "users";
    Project => "project", "projects";
    Task => "task", "tasks";
    Timeslip => "timeslip", "timeslips";
    Expense => "expense", "expenses";
    JournalSet => "journal_set", "journal_sets";
    Attachment => "attachment", "attachments";
    Note => "note", "notes";
    CapitalAsset => "capital_asset", "capital_assets";
    StockItem => "stock_item", "stock_items";
    PriceListItem => "price_list_item", "price_list_items";
    VatReturn => "vat_return", "vat_returns";
    CorporationTaxReturn => "corporation_tax_return", "corporation_tax_returns";
    FinalAccountsReport => "final_accounts_report", "final_accounts_reports";
    SalesTaxPeriod => "sales_tax_period", "sales_tax_periods";
}

// Identified by URL, but nested below another resource or without an id segment.
has_url!(Company, SelfAssessmentReturn, PayrollPeriod, InvoiceItem, BillItem, EstimateItem, JournalEntry);
