use std::time::Duration;

use formarte_common::{BoxFuture, ChargeReceipt, ChargeRequest, PaymentService};
use formarte_config::PaymentConfig;
use tracing::{debug, info};

use crate::error::PaymentError;

/// Gateway stand-in: waits a fixed delay and always succeeds.
///
/// The wait cannot be cancelled from the outside and there is no failure
/// path, other than a currency mismatch which signals a wiring bug.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentService {
    delay: Duration,
    currency: String,
}

impl SimulatedPaymentService {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.simulated_delay_ms),
            currency: config.currency.clone(),
        }
    }

    pub fn with_delay(delay: Duration, currency: impl Into<String>) -> Self {
        Self {
            delay,
            currency: currency.into(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl PaymentService for SimulatedPaymentService {
    type Error = PaymentError;

    fn charge(&self, request: ChargeRequest) -> BoxFuture<'_, ChargeReceipt, Self::Error> {
        Box::pin(async move {
            if !request.currency.eq_ignore_ascii_case(&self.currency) {
                return Err(PaymentError::UnsupportedCurrency(request.currency));
            }
            debug!(
                "Simulating charge of {} {} for '{}'",
                request.amount, request.currency, request.description
            );
            tokio::time::sleep(self.delay).await;

            let receipt = ChargeReceipt {
                id: format!("sim_{}", uuid::Uuid::new_v4().simple()),
                status: "succeeded".to_string(),
                amount: request.amount,
                currency: self.currency.clone(),
            };
            info!("Simulated payment {} settled", receipt.id);
            Ok(receipt)
        })
    }
}
