/*!
Root records wrapping resources the way the API sends and accepts them:
`{"contact": {...}}` for one record and `{"contacts": [...]}` for a list.

The same types are used as request bodies, e.g. `ContactRoot::new(contact)`.
*/

use super::*;
use serde::{Deserialize, Serialize};

/// A missing or `null` key decodes to `None`; `None` is written as `null`.
macro_rules! singleton_root {
    ($root:ident, $key:ident: $ty:ty) => {
        #[doc = concat!("Envelope `{\"", stringify!($key), "\": {...}}` of a single [`", stringify!($ty), "`].")]
        #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $root {
            #[serde(default)]
            pub $key: Option<$ty>,
        }

        impl $root {
            pub fn new(value: $ty) -> Self {
                Self { $key: Some(value) }
            }

            pub fn into_inner(self) -> Option<$ty> {
                self.$key
            }
        }

        impl From<$ty> for $root {
            fn from(value: $ty) -> Self {
                Self::new(value)
            }
        }
    };
}

/// A missing or `null` key decodes to an empty list; the list is always written.
macro_rules! collection_root {
    ($root:ident, $key:ident: $ty:ty) => {
        #[doc = concat!("Envelope `{\"", stringify!($key), "\": [...]}` of a list of [`", stringify!($ty), "`], in API order.")]
        #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $root {
            #[serde(default, deserialize_with = "super::common::null_as_empty")]
            pub $key: Vec<$ty>,
        }

        impl $root {
            pub fn into_inner(self) -> Vec<$ty> {
                self.$key
            }
        }

        impl From<$root> for Vec<$ty> {
            fn from(root: $root) -> Self {
                root.$key
            }
        }

        impl FromIterator<$ty> for $root {
            fn from_iter<I: IntoIterator<Item = $ty>>(iter: I) -> Self {
                Self {
                    $key: iter.into_iter().collect(),
                }
            }
        }

        impl IntoIterator for $root {
            type Item = $ty;
            type IntoIter = std::vec::IntoIter<$ty>;

            fn into_iter(self) -> Self::IntoIter {
                self.$key.into_iter()
            }
        }
    };
}

singleton_root!(CompanyRoot, company: Company);

singleton_root!(ContactRoot, contact: Contact);
collection_root!(ContactsRoot, contacts: Contact);

singleton_root!(InvoiceRoot, invoice: Invoice);
collection_root!(InvoicesRoot, invoices: Invoice);

singleton_root!(CreditNoteRoot, credit_note: CreditNote);
collection_root!(CreditNotesRoot, credit_notes: CreditNote);

singleton_root!(EstimateRoot, estimate: Estimate);
collection_root!(EstimatesRoot, estimates: Estimate);

singleton_root!(RecurringInvoiceRoot, recurring_invoice: RecurringInvoice);
collection_root!(RecurringInvoicesRoot, recurring_invoices: RecurringInvoice);

singleton_root!(BillRoot, bill: Bill);
collection_root!(BillsRoot, bills: Bill);

singleton_root!(BankAccountRoot, bank_account: BankAccount);
collection_root!(BankAccountsRoot, bank_accounts: BankAccount);

singleton_root!(BankTransactionRoot, bank_transaction: BankTransaction);
collection_root!(BankTransactionsRoot, bank_transactions: BankTransaction);

singleton_root!(BankTransactionExplanationRoot, bank_transaction_explanation: BankTransactionExplanation);
collection_root!(BankTransactionExplanationsRoot, bank_transaction_explanations: BankTransactionExplanation);

singleton_root!(CategoryRoot, category: Category);

singleton_root!(UserRoot, user: User);
collection_root!(UsersRoot, users: User);

singleton_root!(ProjectRoot, project: Project);
collection_root!(ProjectsRoot, projects: Project);

singleton_root!(TaskRoot, task: Task);
collection_root!(TasksRoot, tasks: Task);

singleton_root!(TimeslipRoot, timeslip: Timeslip);
collection_root!(TimeslipsRoot, timeslips: Timeslip);

singleton_root!(ExpenseRoot, expense: Expense);
collection_root!(ExpensesRoot, expenses: Expense);

singleton_root!(JournalSetRoot, journal_set: JournalSet);

singleton_root!(AttachmentRoot, attachment: Attachment);

singleton_root!(NoteRoot, note: Note);
collection_root!(NotesRoot, notes: Note);

singleton_root!(CapitalAssetRoot, capital_asset: CapitalAsset);
collection_root!(CapitalAssetsRoot, capital_assets: CapitalAsset);

singleton_root!(StockItemRoot, stock_item: StockItem);
collection_root!(StockItemsRoot, stock_items: StockItem);

singleton_root!(PriceListItemRoot, price_list_item: PriceListItem);
collection_root!(PriceListItemsRoot, price_list_items: PriceListItem);

singleton_root!(VatReturnRoot, vat_return: VatReturn);
collection_root!(VatReturnsRoot, vat_returns: VatReturn);

singleton_root!(CorporationTaxReturnRoot, corporation_tax_return: CorporationTaxReturn);
collection_root!(CorporationTaxReturnsRoot, corporation_tax_returns: CorporationTaxReturn);

singleton_root!(FinalAccountsReportRoot, final_accounts_report: FinalAccountsReport);
collection_root!(FinalAccountsReportsRoot, final_accounts_reports: FinalAccountsReport);

singleton_root!(SelfAssessmentReturnRoot, self_assessment_return: SelfAssessmentReturn);
collection_root!(SelfAssessmentReturnsRoot, self_assessment_returns: SelfAssessmentReturn);

singleton_root!(SalesTaxPeriodRoot, sales_tax_period: SalesTaxPeriod);
collection_root!(SalesTaxPeriodsRoot, sales_tax_periods: SalesTaxPeriod);
