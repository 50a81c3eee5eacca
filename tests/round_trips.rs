#![recursion_limit = "256"]

use freeagent_models::codec;
use freeagent_models::freeagent::*;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt::Debug;

/// A payload with every field present decodes, encodes back to the same JSON,
/// and the re-encoded JSON decodes to an equal record.
fn assert_round_trip<T>(fixture: Value) -> T
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let record: T = codec::from_value(fixture.clone()).unwrap();
    let encoded = codec::to_value(&record).unwrap();
    assert_eq!(encoded, fixture, "{}", codec::resource_name::<T>());
    assert_eq!(codec::from_value::<T>(encoded).unwrap(), record);
    record
}

fn assert_empty_round_trip<T>()
where
    T: Serialize + DeserializeOwned + PartialEq + Debug + Default,
{
    let empty = T::default();
    let encoded = codec::to_value(&empty).unwrap();
    assert_eq!(
        codec::from_value::<T>(encoded).unwrap(),
        empty,
        "{}",
        codec::resource_name::<T>()
    );
}

fn attachment() -> Value {
    json!({
        "url": "https://api.freeagent.com/v2/attachments/4",
        "content_src": "https://s3.amazonaws.com/freeagent/receipt.png",
        "content_src_medium": "https://s3.amazonaws.com/freeagent/receipt_medium.png",
        "content_src_small": "https://s3.amazonaws.com/freeagent/receipt_small.png",
        "expires_at": "2024-01-02T03:04:05Z",
        "content_type": "image/png",
        "file_name": "receipt.png",
        "file_size": 20480,
        "description": "Train ticket",
        "data": "iVBORw0KGgo="
    })
}

fn invoice_item(position: u32) -> Value {
    json!({
        "url": format!("https://api.freeagent.com/v2/invoice_items/{position}"),
        "position": position,
        "item_type": "Hours",
        "quantity": "7.5",
        "price": "60.00",
        "description": "Design",
        "sales_tax_rate": "20.0",
        "second_sales_tax_rate": "0.0",
        "sales_tax_status": "TAXABLE",
        "second_sales_tax_status": "EXEMPT",
        "category": "https://api.freeagent.com/v2/categories/001",
        "stock_item": "https://api.freeagent.com/v2/stock_items/3",
        "project": "https://api.freeagent.com/v2/projects/2",
        "_destroy": false
    })
}

fn payment_methods() -> Value {
    json!({"paypal": true, "stripe": false, "gocardless_preauth": false, "tyl": true})
}

#[test]
fn sales_records_round_trip() {
    let invoice: Invoice = assert_round_trip(json!({
        "url": "https://api.freeagent.com/v2/invoices/9",
        "contact": "https://api.freeagent.com/v2/contacts/17",
        "project": "https://api.freeagent.com/v2/projects/2",
        "reference": "INV-009",
        "dated_on": "2024-01-05",
        "due_on": "2024-02-04",
        "payment_terms_in_days": 30,
        "currency": "EUR",
        "exchange_rate": "0.8571",
        "net_value": "450.00",
        "sales_tax_value": "90.00",
        "second_sales_tax_value": "0.00",
        "total_value": "540.00",
        "paid_value": "40.00",
        "due_value": "500.00",
        "discount_percent": "2.5",
        "status": "Open",
        "long_status": "Open - due in 30 days",
        "comments": "Thanks for your business",
        "omit_header": false,
        "always_show_bic_and_iban": true,
        "show_project_name": true,
        "send_thank_you_emails": false,
        "send_reminder_emails": true,
        "send_new_invoice_emails": true,
        "bank_account": "https://api.freeagent.com/v2/bank_accounts/1",
        "paid_on": "2024-01-20",
        "written_off_date": "2024-06-30",
        "involves_sales_tax": true,
        "ec_status": "EC Services",
        "place_of_supply": "France",
        "is_interim_uk_vat": false,
        "cis_rate": "cis_standard",
        "cis_deduction_rate": "0.2",
        "cis_deduction": "90.00",
        "cis_deduction_suffered": "0.00",
        "recurring_invoice": "https://api.freeagent.com/v2/recurring_invoices/6",
        "estimate": "https://api.freeagent.com/v2/estimates/8",
        "payment_methods": payment_methods(),
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "invoice_items": [invoice_item(1), invoice_item(2)]
    }));
    assert_eq!(invoice.invoice_items.len(), 2);
    assert_eq!(invoice.invoice_items[1].position, Some(2));

    assert_round_trip::<CreditNote>(json!({
        "url": "https://api.freeagent.com/v2/credit_notes/3",
        "contact": "https://api.freeagent.com/v2/contacts/17",
        "project": "https://api.freeagent.com/v2/projects/2",
        "reference": "CN-003",
        "dated_on": "2024-03-01",
        "due_on": "2024-03-31",
        "payment_terms_in_days": 30,
        "currency": "GBP",
        "exchange_rate": "1.0",
        "net_value": "-100.00",
        "sales_tax_value": "-20.00",
        "total_value": "-120.00",
        "refunded_value": "-20.00",
        "due_value": "-100.00",
        "status": "Refunded",
        "long_status": "Refunded",
        "comments": "Returned goods",
        "involves_sales_tax": true,
        "ec_status": "UK/Non-EC",
        "place_of_supply": "United Kingdom",
        "bank_account": "https://api.freeagent.com/v2/bank_accounts/1",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "credit_note_items": [invoice_item(1)]
    }));

    assert_round_trip::<Estimate>(json!({
        "url": "https://api.freeagent.com/v2/estimates/8",
        "contact": "https://api.freeagent.com/v2/contacts/17",
        "project": "https://api.freeagent.com/v2/projects/2",
        "invoice": "https://api.freeagent.com/v2/invoices/9",
        "reference": "EST-008",
        "estimate_type": "Quote",
        "status": "Approved",
        "dated_on": "2023-12-01",
        "currency": "GBP",
        "net_value": "450.00",
        "sales_tax_value": "90.00",
        "total_value": "540.00",
        "notes": "Valid for 30 days",
        "involves_sales_tax": true,
        "ec_status": "EC Goods",
        "place_of_supply": "Germany",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "estimate_items": [{
            "url": "https://api.freeagent.com/v2/estimate_items/1",
            "position": 1,
            "item_type": "Days",
            "quantity": "3",
            "price": "150.00",
            "description": "Workshop",
            "sales_tax_rate": "20.0",
            "sales_tax_status": "TAXABLE",
            "category": "https://api.freeagent.com/v2/categories/001",
            "_destroy": false
        }]
    }));

    assert_round_trip::<RecurringInvoice>(json!({
        "url": "https://api.freeagent.com/v2/recurring_invoices/6",
        "contact": "https://api.freeagent.com/v2/contacts/17",
        "project": "https://api.freeagent.com/v2/projects/2",
        "contact_name": "Acme Ltd",
        "reference": "RI-006",
        "dated_on": "2024-01-01",
        "frequency": "Two Monthly",
        "recurring_status": "Active",
        "next_recurs_on": "2024-03-01",
        "recurring_end_date": "2025-01-01",
        "payment_terms_in_days": 14,
        "currency": "GBP",
        "net_value": "100.00",
        "sales_tax_value": "20.00",
        "total_value": "120.00",
        "comments": "Retainer",
        "send_new_invoice_emails": true,
        "send_reminder_emails": false,
        "send_thank_you_emails": true,
        "payment_methods": payment_methods(),
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "recurring_invoice_items": [invoice_item(1)]
    }));

    assert_round_trip::<PriceListItem>(json!({
        "url": "https://api.freeagent.com/v2/price_list_items/12",
        "code": "CONSULT",
        "item_type": "Hours",
        "quantity": "1",
        "price": "95.00",
        "description": "Consulting hour",
        "sales_tax_rate": "20.0",
        "second_sales_tax_rate": "0.0",
        "category": "https://api.freeagent.com/v2/categories/001",
        "stock_item": "https://api.freeagent.com/v2/stock_items/3",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<StockItem>(json!({
        "url": "https://api.freeagent.com/v2/stock_items/3",
        "description": "Widget",
        "opening_quantity": 100,
        "opening_balance": "250.00",
        "cost_of_sale_category": "https://api.freeagent.com/v2/categories/101",
        "stock_on_hand": -4,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));
}

#[test]
fn purchase_records_round_trip() {
    assert_round_trip::<Bill>(json!({
        "url": "https://api.freeagent.com/v2/bills/21",
        "contact": "https://api.freeagent.com/v2/contacts/18",
        "reference": "SUP-100",
        "dated_on": "2024-02-01",
        "due_on": "2024-03-02",
        "currency": "USD",
        "exchange_rate": "0.7905",
        "net_value": "1000.00",
        "sales_tax_value": "0.00",
        "total_value": "1000.00",
        "paid_value": "0.00",
        "due_value": "1000.00",
        "status": "Zero Value",
        "long_status": "Zero value bill",
        "comments": "Annual licence",
        "project": "https://api.freeagent.com/v2/projects/2",
        "rebill_type": "markup",
        "rebill_factor": "0.15",
        "rebill_to_project": "https://api.freeagent.com/v2/projects/4",
        "ec_status": "Reverse Charge",
        "recurring": "Annually",
        "recurring_end_date": "2027-02-01",
        "is_paid_by_hire_purchase": false,
        "attachment": attachment(),
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "bill_items": [{
            "url": "https://api.freeagent.com/v2/bill_items/30",
            "bill": "https://api.freeagent.com/v2/bills/21",
            "category": "https://api.freeagent.com/v2/categories/285",
            "description": "Licence",
            "total_value": "1000.00",
            "quantity": "1",
            "unit": "-no unit-",
            "sales_tax_rate": "0.0",
            "second_sales_tax_rate": "0.0",
            "sales_tax_status": "OUT_OF_SCOPE",
            "manual_sales_tax_amount": "0.00",
            "stock_item": "https://api.freeagent.com/v2/stock_items/3",
            "stock_altering_quantity": "2",
            "project": "https://api.freeagent.com/v2/projects/2",
            "_destroy": false
        }]
    }));

    assert_round_trip::<Expense>(json!({
        "url": "https://api.freeagent.com/v2/expenses/40",
        "user": "https://api.freeagent.com/v2/users/2",
        "category": "https://api.freeagent.com/v2/categories/249",
        "dated_on": "2024-01-15",
        "currency": "GBP",
        "gross_value": "-45.00",
        "native_gross_value": "-45.00",
        "sales_tax_rate": "20.0",
        "sales_tax_value": "-7.50",
        "native_sales_tax_value": "-7.50",
        "sales_tax_status": "TAXABLE",
        "manual_sales_tax_amount": "-7.50",
        "description": "Client visit",
        "ec_status": "UK/Non-EC",
        "project": "https://api.freeagent.com/v2/projects/2",
        "rebill_type": "cost",
        "rebill_factor": "1",
        "rebilled_on_invoice_item": "https://api.freeagent.com/v2/invoice_items/1",
        "receipt_reference": "R-77",
        "recurring": "Monthly",
        "next_recurs_on": "2024-02-15",
        "recurring_end_date": "2024-12-15",
        "property": "https://api.freeagent.com/v2/properties/1",
        "attachment": attachment(),
        "mileage": "120.5",
        "vehicle_type": "Car",
        "engine_type": "Electric (Home charger)",
        "engine_size": "Up to 1400cc",
        "reclaim_mileage": 1,
        "reclaim_mileage_rate": "0.45",
        "rebill_mileage_rate": "0.50",
        "have_vat_receipt": true,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<CapitalAsset>(json!({
        "url": "https://api.freeagent.com/v2/capital_assets/7",
        "description": "Laptop",
        "asset_type": "Computer Equipment",
        "asset_life_years": 3,
        "purchased_on": "2023-06-01",
        "disposed_on": "2026-06-01",
        "depreciation_profile": {
            "method": "straight_line",
            "asset_life_years": 3,
            "annual_depreciation_percentage": "33.33",
            "frequency": "annually"
        },
        "capital_asset_history": [
            {
                "type": "purchase",
                "description": "Purchase",
                "date": "2023-06-01",
                "value": "1500.00",
                "link": "https://api.freeagent.com/v2/bills/21"
            },
            {
                "type": "depreciation",
                "description": "Depreciation",
                "date": "2024-03-31",
                "value": "-500.00",
                "link": "https://api.freeagent.com/v2/journal_sets/5"
            }
        ],
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<Attachment>(attachment());
}

#[test]
fn banking_records_round_trip() {
    assert_round_trip::<BankAccount>(json!({
        "url": "https://api.freeagent.com/v2/bank_accounts/1",
        "type": "StandardBankAccount",
        "name": "Business Current",
        "currency": "GBP",
        "is_personal": false,
        "is_primary": true,
        "status": "active",
        "bank_name": "Barclays",
        "opening_balance": "0.00",
        "current_balance": "15321.09",
        "latest_activity_date": "2024-02-28",
        "bank_code": "barclays",
        "account_number": "12345678",
        "sort_code": "20-00-00",
        "secondary_sort_code": "20-00-01",
        "iban": "GB33BUKB20201555555555",
        "bic": "BUKBGB22",
        "email": "treasury@example.com",
        "bank_guess_enabled": true,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    let explanation = json!({
        "url": "https://api.freeagent.com/v2/bank_transaction_explanations/60",
        "bank_transaction": "https://api.freeagent.com/v2/bank_transactions/50",
        "bank_account": "https://api.freeagent.com/v2/bank_accounts/1",
        "dated_on": "2024-02-10",
        "description": "Payment for INV-009",
        "gross_value": "540.00",
        "foreign_currency_value": "630.00",
        "sales_tax_rate": "20.0",
        "second_sales_tax_rate": "0.0",
        "sales_tax_value": "90.00",
        "sales_tax_status": "TAXABLE",
        "manual_sales_tax_amount": "90.00",
        "category": "https://api.freeagent.com/v2/categories/001",
        "paid_invoice": "https://api.freeagent.com/v2/invoices/9",
        "paid_bill": "https://api.freeagent.com/v2/bills/21",
        "paid_user": "https://api.freeagent.com/v2/users/2",
        "transfer_bank_account": "https://api.freeagent.com/v2/bank_accounts/2",
        "project": "https://api.freeagent.com/v2/projects/2",
        "rebill_type": "price",
        "rebill_factor": "1.1",
        "rebill_to_project": "https://api.freeagent.com/v2/projects/4",
        "receipt_reference": "R-78",
        "cheque_number": "000123",
        "ec_status": "EC VAT MOSS",
        "place_of_supply": "Ireland",
        "marked_for_review": false,
        "is_money_in": true,
        "is_money_out": false,
        "is_money_paid_to_user": false,
        "is_locked": true,
        "locked_attributes": ["dated_on", "gross_value"],
        "is_deletable": false,
        "asset_life_years": 5,
        "disposed_asset": "https://api.freeagent.com/v2/capital_assets/7",
        "stock_item": "https://api.freeagent.com/v2/stock_items/3",
        "stock_altering_quantity": "-1",
        "attachment": attachment(),
        "updated_at": "2024-02-03T04:05:06Z"
    });
    assert_round_trip::<BankTransactionExplanation>(explanation.clone());

    let transaction: BankTransaction = assert_round_trip(json!({
        "url": "https://api.freeagent.com/v2/bank_transactions/50",
        "bank_account": "https://api.freeagent.com/v2/bank_accounts/1",
        "dated_on": "2024-02-10",
        "amount": "540.00",
        "description": "ACME LTD BACS",
        "full_description": "ACME LTD BACS REF INV-009",
        "unexplained_amount": "0.00",
        "is_manual": false,
        "transaction_id": "TX-0001",
        "matching_transactions_count": 1,
        "uploaded_at": "2024-01-05T09:30:00",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z",
        "bank_transaction_explanations": [explanation]
    }));
    assert_eq!(transaction.bank_transaction_explanations[0].locked_attributes.len(), 2);

    assert_round_trip::<StatementRoot>(json!({
        "statement": [{
            "dated_on": "2024-02-10",
            "description": "ACME LTD BACS",
            "amount": "540.00",
            "fitid": "202402100001",
            "transaction_type": "CREDIT"
        }]
    }));
}

#[test]
fn tax_records_round_trip() {
    let payments = json!([
        {"label": "Payment on account", "due_on": "2025-01-31", "amount_due": "1200.00", "status": "unpaid"},
        {"label": "Balancing payment", "due_on": "2025-07-31", "amount_due": "300.50", "status": "marked_as_paid"}
    ]);

    assert_round_trip::<VatReturn>(json!({
        "url": "https://api.freeagent.com/v2/vat_returns/2024-03-31",
        "period_starts_on": "2024-01-01",
        "period_ends_on": "2024-03-31",
        "frequency": "quarterly",
        "filing_due_on": "2024-05-07",
        "filing_status": "filed",
        "filed_at": "2024-04-20T10:11:12+01:00",
        "filed_reference": "123456789",
        "payments": payments
    }));

    assert_round_trip::<SelfAssessmentReturn>(json!({
        "url": "https://api.freeagent.com/v2/users/2/self_assessment_returns/2024-04-05",
        "period_starts_on": "2023-04-06",
        "period_ends_on": "2024-04-05",
        "filing_due_on": "2025-01-31",
        "filing_status": "marked_as_filed",
        "filed_at": "2024-11-20T10:11:12+00:00",
        "filed_reference": "SA-2024",
        "payments": payments
    }));

    assert_round_trip::<CorporationTaxReturn>(json!({
        "url": "https://api.freeagent.com/v2/corporation_tax_returns/2024-03-31",
        "period_starts_on": "2023-04-01",
        "period_ends_on": "2024-03-31",
        "amount_due": "4750.00",
        "payment_due_on": "2025-01-01",
        "payment_status": "marked_as_paid",
        "filing_due_on": "2025-03-31",
        "filing_status": "draft",
        "filed_at": "2024-10-01T08:00:00-05:00",
        "filed_reference": "CT-2024"
    }));

    assert_round_trip::<FinalAccountsReport>(json!({
        "url": "https://api.freeagent.com/v2/final_accounts_reports/2024-03-31",
        "period_starts_on": "2023-04-01",
        "period_ends_on": "2024-03-31",
        "filing_due_on": "2024-12-31",
        "filing_status": "pending",
        "filed_at": "2024-04-20T10:11:12+01:00",
        "filed_reference": "FA-2024"
    }));

    assert_round_trip::<SalesTaxPeriod>(json!({
        "url": "https://api.freeagent.com/v2/sales_tax_periods/3",
        "sales_tax_name": "VAT",
        "sales_tax_registration_status": "Not Registered",
        "sales_tax_registration_number": "GB123456789",
        "effective_date": "2024-01-01",
        "sales_tax_rate_1": "20.0",
        "sales_tax_rate_2": "5.0",
        "sales_tax_rate_3": "0.0",
        "sales_tax_is_value_added": true,
        "is_locked": false,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));
}

#[test]
fn payroll_records_round_trip() {
    let root: PayrollYearRoot = assert_round_trip(json!({
        "periods": [{
            "url": "https://api.freeagent.com/v2/payroll/2024/3",
            "period": 3,
            "frequency": "Monthly",
            "dated_on": "2024-06-28",
            "status": "filed",
            "employment_allowance_amount": "100.00",
            "employment_allowance_claimed": true,
            "construction_industry_scheme_deduction": "0.00",
            "payslips": [{
                "user": "https://api.freeagent.com/v2/users/2",
                "tax_code": "1257L",
                "dated_on": "2024-06-28",
                "frequency": "Monthly",
                "ni_calc_type": "Director (Alternative)",
                "basic_pay": "1047.50",
                "tax_deducted": "12.40",
                "employee_ni": "3.20",
                "employer_ni": "4.10",
                "other_deductions": "0.00",
                "student_loan_deduction": "1.00",
                "postgrad_loan_deduction": "0.50",
                "overtime": "10.00",
                "commission": "20.00",
                "bonus": "200.00",
                "allowance": "5.00",
                "statutory_sick_pay": "0.00",
                "statutory_maternity_pay": "0.00",
                "statutory_paternity_pay": "0.00",
                "statutory_adoption_pay": "0.00",
                "absence_payments": "0.00",
                "other_payments": "1.00",
                "employee_pension": "40.00",
                "employer_pension": "30.00",
                "attachment_of_earnings": "0.00",
                "payroll_giving": "2.00",
                "deduction_free_pay": "0.00"
            }]
        }],
        "payments": [
            {"due_on": "2024-07-22", "amount_due": "23.70", "status": "paid"}
        ]
    }));
    let payslip = &root.periods[0].payslips[0];
    assert_eq!(payslip.gross_pay(), Some(Decimal::new(128350, 2)));

    assert_round_trip::<PayrollProfilesRoot>(json!({
        "profiles": [{
            "user": "https://api.freeagent.com/v2/users/2",
            "title": "Ms",
            "gender": "female",
            "date_of_birth": "1985-07-14",
            "address_line_1": "1 High Street",
            "address_line_2": "Flat 2",
            "address_line_3": "Leith",
            "address_line_4": "Edinburgh",
            "postcode": "EH6 6AA",
            "country": "United Kingdom",
            "employment_starts_on": "2020-04-06",
            "total_pay_in_previous_employment": "5000.00",
            "total_tax_in_previous_employment": "400.00",
            "created_at": "2024-01-02T03:04:05Z",
            "updated_at": "2024-02-03T04:05:06Z"
        }]
    }));
}

#[test]
fn company_and_people_round_trip() {
    assert_round_trip::<Company>(json!({
        "url": "https://api.freeagent.com/v2/company",
        "name": "Acme Ltd",
        "subdomain": "acme",
        "type": "UkLimitedCompany",
        "currency": "GBP",
        "mileage_units": "miles",
        "company_start_date": "2015-04-01",
        "trading_start_date": "2015-05-01",
        "freeagent_start_date": "2016-04-01",
        "first_accounting_year_end": "2016-03-31",
        "company_registration_number": "09876543",
        "sales_tax_registration_status": "Registered",
        "sales_tax_registration_number": "GB123456789",
        "sales_tax_name": "VAT",
        "sales_tax_rates": ["20.0", "5.0", "0.0"],
        "sales_tax_is_value_added": true,
        "sales_tax_effective_date": "2016-04-01",
        "initial_vat_basis": "Cash",
        "initial_vat_frs": false,
        "vat_first_return_period_ends_on": "2016-06-30",
        "ec_vat_reporting_enabled": true,
        "supports_auto_sales_tax_on_purchases": true,
        "address1": "1 High Street",
        "address2": "Floor 2",
        "address3": "Unit 4",
        "town": "Edinburgh",
        "region": "Lothian",
        "postcode": "EH1 1AA",
        "country": "United Kingdom",
        "contact_email": "hello@example.com",
        "contact_phone": "0131 000 0000",
        "website": "https://example.com",
        "business_type": "Software Development",
        "business_category": "Software Development",
        "short_date_format": "dd/mm/yy",
        "locked_attributes": ["company_start_date"],
        "annual_accounting_periods": [
            {"starts_on": "2023-04-01", "ends_on": "2024-03-31"},
            {"starts_on": "2024-04-01", "ends_on": "2025-03-31"}
        ],
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<User>(json!({
        "url": "https://api.freeagent.com/v2/users/2",
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@example.com",
        "role": "CompanySecretary",
        "permission_level": 8,
        "opening_mileage": "1200.5",
        "ni_number": "QQ123456C",
        "unique_tax_reference": "1234567890",
        "send_invitation": false,
        "hidden": false,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<Note>(json!({
        "url": "https://api.freeagent.com/v2/notes/11",
        "note": "Called about the overdue invoice",
        "parent_url": "https://api.freeagent.com/v2/contacts/17",
        "author": "Jane Doe",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));
}

#[test]
fn time_tracking_records_round_trip() {
    assert_round_trip::<Project>(json!({
        "url": "https://api.freeagent.com/v2/projects/2",
        "name": "Website rebuild",
        "contact": "https://api.freeagent.com/v2/contacts/17",
        "contact_name": "Acme Ltd",
        "status": "Completed",
        "budget": "120",
        "budget_units": "Hours",
        "normal_billing_rate": "60.00",
        "hours_per_day": "7.5",
        "uses_project_invoice_sequence": false,
        "currency": "GBP",
        "billing_period": "hour",
        "is_ir35": false,
        "starts_on": "2024-01-01",
        "ends_on": "2024-06-30",
        "include_unbilled_time_in_profitability": true,
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<Task>(json!({
        "url": "https://api.freeagent.com/v2/tasks/14",
        "project": "https://api.freeagent.com/v2/projects/2",
        "name": "Design",
        "currency": "GBP",
        "is_billable": true,
        "billing_rate": "450.00",
        "billing_period": "day",
        "status": "Hidden",
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<Timeslip>(json!({
        "url": "https://api.freeagent.com/v2/timeslips/25",
        "user": "https://api.freeagent.com/v2/users/2",
        "project": "https://api.freeagent.com/v2/projects/2",
        "task": "https://api.freeagent.com/v2/tasks/14",
        "dated_on": "2024-01-05",
        "hours": "2.25",
        "comment": "Wireframes",
        "billed_on_invoice": "https://api.freeagent.com/v2/invoices/9",
        "timer": {"running": true, "start_from": "2024-01-05T09:30:00"},
        "created_at": "2024-01-02T03:04:05Z",
        "updated_at": "2024-02-03T04:05:06Z"
    }));
}

#[test]
fn accounting_records_round_trip() {
    assert_round_trip::<JournalSet>(json!({
        "url": "https://api.freeagent.com/v2/journal_sets/5",
        "dated_on": "2024-03-31",
        "description": "Depreciation",
        "tag": "depreciation",
        "journal_entries": [
            {
                "url": "https://api.freeagent.com/v2/journal_entries/1",
                "category": "https://api.freeagent.com/v2/categories/602",
                "debit_value": "500.00",
                "description": "Laptop depreciation",
                "user": "https://api.freeagent.com/v2/users/2",
                "stock_item": "https://api.freeagent.com/v2/stock_items/3",
                "stock_altering_quantity": -2,
                "bank_account": "https://api.freeagent.com/v2/bank_accounts/1",
                "property": "https://api.freeagent.com/v2/properties/1",
                "capital_asset_type": "https://api.freeagent.com/v2/capital_asset_types/1",
                "_destroy": false
            },
            {
                "category": "https://api.freeagent.com/v2/categories/603",
                "debit_value": "-500.00"
            }
        ],
        "updated_at": "2024-02-03T04:05:06Z"
    }));

    assert_round_trip::<CategoriesRoot>(json!({
        "admin_expenses_categories": [{
            "url": "https://api.freeagent.com/v2/categories/285",
            "description": "Accommodation and Meals",
            "nominal_code": "285",
            "group_description": "Travel",
            "allowable_for_tax": true,
            "tax_reporting_name": "Travel and subsistence",
            "auto_sales_tax_rate": "Standard rate"
        }],
        "cost_of_sales_categories": [],
        "income_categories": [{"url": "https://api.freeagent.com/v2/categories/001", "nominal_code": "001"}],
        "general_categories": []
    }));

    assert_round_trip::<TrialBalanceSummaryRoot>(json!({
        "trial_balance_summary": [
            {"category": "https://api.freeagent.com/v2/categories/001", "nominal_code": "001", "display_nominal_code": "001", "name": "Sales", "total": "-5000.00"},
            {"category": "https://api.freeagent.com/v2/categories/750", "nominal_code": "750-1", "display_nominal_code": "750-1", "name": "Barclays", "total": "5000.00"}
        ]
    }));

    assert_round_trip::<ProfitAndLossRoot>(json!({
        "profit_and_loss_summary": {
            "from": "2023-04-01",
            "to": "2024-03-31",
            "income": "50000.00",
            "expenses": "-20000.00",
            "operating_profit": "30000.00",
            "less": [{"title": "Corporation Tax", "total": "-5700.00"}],
            "retained_profit": "24300.00",
            "retained_profit_brought_forward": "1000.00",
            "retained_profit_carried_forward": "25300.00"
        }
    }));

    let section = |total: &str| {
        json!({
            "total": total,
            "accounts": [{"name": "Barclays", "nominal_code": "750-1", "total": total}]
        })
    };
    assert_round_trip::<BalanceSheetRoot>(json!({
        "balance_sheet": {
            "accounting_period_start_date": "2023-04-01",
            "as_at_date": "2024-03-31",
            "currency": "GBP",
            "capital_assets": section("1000.00"),
            "current_assets": section("15321.09"),
            "current_liabilities": section("-2000.00"),
            "net_current_assets": "13321.09",
            "total_assets": "14321.09",
            "owners_equity": section("14321.09")
        }
    }));

    assert_round_trip::<BusinessCategoriesRoot>(json!({
        "business_categories": ["Accounting", "Software Development"]
    }));
}

#[test]
fn empty_records_round_trip() {
    assert_empty_round_trip::<Attachment>();
    assert_empty_round_trip::<BankAccount>();
    assert_empty_round_trip::<BankTransaction>();
    assert_empty_round_trip::<BankTransactionExplanation>();
    assert_empty_round_trip::<Bill>();
    assert_empty_round_trip::<BillItem>();
    assert_empty_round_trip::<CapitalAsset>();
    assert_empty_round_trip::<Category>();
    assert_empty_round_trip::<Company>();
    assert_empty_round_trip::<Contact>();
    assert_empty_round_trip::<CorporationTaxReturn>();
    assert_empty_round_trip::<CreditNote>();
    assert_empty_round_trip::<Estimate>();
    assert_empty_round_trip::<EstimateItem>();
    assert_empty_round_trip::<Expense>();
    assert_empty_round_trip::<FinalAccountsReport>();
    assert_empty_round_trip::<Invoice>();
    assert_empty_round_trip::<InvoiceItem>();
    assert_empty_round_trip::<JournalSet>();
    assert_empty_round_trip::<JournalEntry>();
    assert_empty_round_trip::<Note>();
    assert_empty_round_trip::<PayrollPeriod>();
    assert_empty_round_trip::<Payslip>();
    assert_empty_round_trip::<PayrollProfile>();
    assert_empty_round_trip::<PriceListItem>();
    assert_empty_round_trip::<Project>();
    assert_empty_round_trip::<RecurringInvoice>();
    assert_empty_round_trip::<SalesTaxPeriod>();
    assert_empty_round_trip::<SelfAssessmentReturn>();
    assert_empty_round_trip::<StockItem>();
    assert_empty_round_trip::<Task>();
    assert_empty_round_trip::<Timeslip>();
    assert_empty_round_trip::<User>();
    assert_empty_round_trip::<VatReturn>();
    assert_empty_round_trip::<CategoriesRoot>();
    assert_empty_round_trip::<PayrollYearRoot>();
    assert_empty_round_trip::<TrialBalanceSummaryRoot>();
    assert_empty_round_trip::<ProfitAndLossRoot>();
    assert_empty_round_trip::<BalanceSheetRoot>();
}
