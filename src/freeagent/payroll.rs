/*!
Structs and Enums related to FreeAgent payroll (RTI) data.

Payroll is read per tax year (`/v2/payroll/:year`, where `:year` is the year the tax
year ends in) and per period within a year (`/v2/payroll/:year/:period`).
*/

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Payroll Period.

See https://dev.freeagent.com/docs/payroll
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 0-based period number within the tax year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PayFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayrollPeriodStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub employment_allowance_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_allowance_claimed: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub construction_industry_scheme_deduction: Option<Decimal>,
    /// Only returned when reading a single period.
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub payslips: Vec<Payslip>,
}

/// A payment due to HMRC for a payroll year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollPayment {
    pub due_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_due: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<super::PaymentStatus>,
}

/**
Structure representing one employee's payslip in a payroll period.

All amounts are for the period.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payslip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PayFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_calc_type: Option<NiCalcType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub basic_pay: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub tax_deducted: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub employee_ni: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub employer_ni: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub other_deductions: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub student_loan_deduction: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub postgrad_loan_deduction: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub overtime: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub commission: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub bonus: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub allowance: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub statutory_sick_pay: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub statutory_maternity_pay: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub statutory_paternity_pay: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub statutory_adoption_pay: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub absence_payments: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub other_payments: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub employee_pension: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub employer_pension: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub attachment_of_earnings: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub payroll_giving: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub deduction_free_pay: Option<Decimal>,
}

impl Payslip {
    /// Gross pay before deductions: basic pay plus every addition present on the slip.
    /// `None` if the sum does not fit in a `Decimal`.
    pub fn gross_pay(&self) -> Option<Decimal> {
        [
            self.basic_pay,
            self.overtime,
            self.commission,
            self.bonus,
            self.allowance,
            self.statutory_sick_pay,
            self.statutory_maternity_pay,
            self.statutory_paternity_pay,
            self.statutory_adoption_pay,
            self.absence_payments,
            self.other_payments,
        ]
        .into_iter()
        .flatten()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
    }
}

/**
Response of /v2/payroll/:year
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollYearRoot {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub periods: Vec<PayrollPeriod>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub payments: Vec<PayrollPayment>,
}

impl PayrollYearRoot {
    pub fn path(year: i32) -> String {
        format!("payroll/{year}")
    }
}

/**
Response of /v2/payroll/:year/:period
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollPeriodRoot {
    pub period: Option<PayrollPeriod>,
}

impl PayrollPeriodRoot {
    pub fn path(year: i32, period: u8) -> String {
        format!("payroll/{year}/{period}")
    }

    pub fn into_inner(self) -> Option<PayrollPeriod> {
        self.period
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum PayFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PayrollPeriodStatus {
    Unfiled,
    Pending,
    Rejected,
    Filed,
}

wire_enum! {
    /// How National Insurance is worked out for the employee.
    pub enum NiCalcType {
        Employed => "Employed",
        DirectorAnnual => "Director (Annual)",
        DirectorAlternative => "Director (Alternative)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freeagent::PaymentStatus;
    use serde_json::json;

    #[test]
    fn decode_year() {
        let root: PayrollYearRoot = serde_json::from_value(json!({
            "periods": [
                {"url": "https://api.freeagent.com/v2/payroll/2024/0", "period": 0, "frequency": "Monthly", "dated_on": "2023-04-25", "status": "filed"},
                {"url": "https://api.freeagent.com/v2/payroll/2024/1", "period": 1, "frequency": "Monthly", "dated_on": "2023-05-25", "status": "unfiled"}
            ],
            "payments": [
                {"due_on": "2023-05-22", "amount_due": "812.40", "status": "paid"}
            ]
        }))
        .unwrap();

        assert_eq!(root.periods.len(), 2);
        assert_eq!(root.periods[1].status, Some(PayrollPeriodStatus::Unfiled));
        assert!(root.periods[0].payslips.is_empty());
        assert_eq!(root.payments[0].status, Some(PaymentStatus::Paid));
        assert_eq!(PayrollYearRoot::path(2024), "payroll/2024");
    }

    #[test]
    fn decode_period_with_payslips() {
        let root: PayrollPeriodRoot = serde_json::from_value(json!({
            "period": {
                "period": 3,
                "frequency": "Monthly",
                "payslips": [{
                    "user": "https://api.freeagent.com/v2/users/2",
                    "tax_code": "1257L",
                    "ni_calc_type": "Director (Annual)",
                    "basic_pay": "1047.50",
                    "bonus": "200.00",
                    "tax_deducted": "0.00"
                }]
            }
        }))
        .unwrap();

        let period = root.into_inner().unwrap();
        let payslip = &period.payslips[0];
        assert_eq!(payslip.ni_calc_type, Some(NiCalcType::DirectorAnnual));
        assert_eq!(payslip.gross_pay(), Some(Decimal::new(124750, 2)));
    }

    #[test]
    fn gross_pay_overflow_is_none() {
        let payslip = Payslip {
            basic_pay: Some(Decimal::MAX),
            bonus: Some(Decimal::ONE),
            ..Default::default()
        };
        assert_eq!(payslip.gross_pay(), None);
        assert_eq!(Payslip::default().gross_pay(), Some(Decimal::ZERO));
    }

    #[test]
    fn payment_requires_amount_due() {
        let err = serde_json::from_value::<PayrollPayment>(json!({"due_on": "2023-05-22"}))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `amount_due`"));
    }
}
