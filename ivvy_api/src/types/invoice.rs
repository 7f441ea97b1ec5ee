//! Invoices and their line items and payments.

use serde::{Deserialize, Serialize};

use super::{
    contact::{Address, Contact},
    venue::VenueID,
};

vendor_enum! {
    /// Payment status of an invoice.
    pub enum InvoiceStatus {
        NotPaid = 0 => "not-paid",
        UnconfirmedPaid = 1 => "unconfirmed-paid",
        Paid = 2 => "paid",
        WrittenOff = 3 => "written-off",
        Cancelled = 4 => "cancelled",
        Refunded = 5 => "refunded",
    }
}

vendor_enum! {
    /// What kind of record an invoice was raised for.
    pub enum InvoiceRefType {
        Custom = 0 => "custom",
        EventRegistration = 1 => "event-registration",
        MembershipSignUp = 2 => "membership-sign-up",
        MembershipRenewal = 3 => "membership-renewal",
        VenueBooking = 4 => "venue-booking",
    }
}

/// An invoice in the account.
///
/// Monetary fields are optional: a missing `totalCost` is not the same as a
/// total of zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_contact_name: Option<String>,

    pub current_status: InvoiceStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,

    pub ref_type: InvoiceRefType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_used: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tax_charged: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<VenueID>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_contact_id: Option<String>,

    #[serde(rename = "Contact")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InvoiceItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<InvoicePayment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_code: Option<String>,
}

impl Invoice {
    /// Amount still owed, when both the total and the paid amount are known.
    pub fn amount_outstanding(&self) -> Option<f64> {
        Some(self.total_cost? - self.amount_paid?)
    }
}

/// A line of an invoice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_cost: Option<f64>,
}

/// A payment recorded against an invoice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
