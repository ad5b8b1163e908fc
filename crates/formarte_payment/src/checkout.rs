//! Payment modal state.
//!
//! `Idle -> Processing -> Paid`. The booking is only handed to the store once
//! the checkout is closed in the `Paid` state; closing it earlier discards the
//! attempt and leaves the checkout reusable.

use formarte_common::{ChargeReceipt, ChargeRequest};
use serde::Serialize;

use crate::error::PaymentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Idle,
    Processing,
    Paid,
}

#[derive(Debug, Clone)]
pub struct Checkout {
    request: ChargeRequest,
    step: CheckoutStep,
    receipt: Option<ChargeReceipt>,
}

impl Checkout {
    pub fn new(description: impl Into<String>, amount: u64, currency: impl Into<String>) -> Self {
        Self {
            request: ChargeRequest {
                description: description.into(),
                amount,
                currency: currency.into(),
            },
            step: CheckoutStep::Idle,
            receipt: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn amount(&self) -> u64 {
        self.request.amount
    }

    pub fn receipt(&self) -> Option<&ChargeReceipt> {
        self.receipt.as_ref()
    }

    /// Submit is refused while a charge is in flight or after it settled.
    pub fn can_submit(&self) -> bool {
        self.step == CheckoutStep::Idle
    }

    /// Moves to `Processing` and returns the charge to send to the gateway.
    pub fn submit(&mut self) -> Result<ChargeRequest, PaymentError> {
        match self.step {
            CheckoutStep::Idle => {
                self.step = CheckoutStep::Processing;
                Ok(self.request.clone())
            }
            CheckoutStep::Processing => Err(PaymentError::AlreadyProcessing),
            CheckoutStep::Paid => Err(PaymentError::AlreadyPaid),
        }
    }

    /// Records the gateway answer.
    pub fn settle(&mut self, receipt: ChargeReceipt) -> Result<(), PaymentError> {
        if self.step != CheckoutStep::Processing {
            return Err(PaymentError::NotProcessing);
        }
        self.step = CheckoutStep::Paid;
        self.receipt = Some(receipt);
        Ok(())
    }

    /// Returns the gateway to `Idle` after a failed charge.
    pub fn abort(&mut self) {
        if self.step == CheckoutStep::Processing {
            self.step = CheckoutStep::Idle;
        }
    }

    /// Closes the modal. Yields the receipt only when the checkout was paid,
    /// which is the signal to persist the booking.
    pub fn close(&mut self) -> Option<ChargeReceipt> {
        let paid = self.step == CheckoutStep::Paid;
        self.step = CheckoutStep::Idle;
        let receipt = self.receipt.take();
        if paid {
            receipt
        } else {
            None
        }
    }
}
