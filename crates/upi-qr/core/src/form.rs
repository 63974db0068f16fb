use serde::Serialize;
use tracing::{info, warn};

use crate::{
    input::{RawInput, ValidatedFields, ValidationError, validate},
    link::{LinkEncoder, PaymentLink},
    notification::{Notification, Notifier},
    render::{QrRenderer, RenderOptions},
};

/// A payment accepted on submit, kept for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedPayment {
    pub fields: ValidatedFields,
    pub link: PaymentLink,
}

impl GeneratedPayment {
    /// Text shown under the rendered code.
    pub fn caption(&self) -> String {
        let identifier = self.fields.identifier();
        match self.fields.amount() {
            Some(amount) => format!("Scan this QR code to pay ₹{amount} to {identifier}"),
            None => format!("Scan this QR code to pay any amount to {identifier}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub enum FormState {
    #[default]
    Idle,
    Showing(GeneratedPayment),
}

/// Owns the field text typed so far and what is currently displayed.
///
/// Editing a field does not hide a payment that is already shown. The shown
/// payment is the one validated at submit time, so later edits never reach
/// the rendered link until the next successful submit.
#[derive(Clone, Debug, Default)]
pub struct PaymentForm {
    identifier: String,
    amount: String,
    state: FormState,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn raw_input(&self) -> RawInput {
        RawInput::new(self.identifier.clone(), self.amount.clone())
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn shown_payment(&self) -> Option<&GeneratedPayment> {
        match &self.state {
            FormState::Showing(payment) => Some(payment),
            FormState::Idle => None,
        }
    }

    /// Validates the current fields and, if they pass, shows a new payment.
    ///
    /// A rejection is reported to `notifier` exactly once and leaves the
    /// state untouched. Success never notifies.
    pub fn submit<N>(
        &mut self,
        encoder: &LinkEncoder,
        notifier: &N,
    ) -> Result<PaymentLink, ValidationError>
    where
        N: Notifier + ?Sized,
    {
        let fields = match validate(&self.identifier, &self.amount) {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Rejected submission: {e}");
                notifier.notify(Notification::from(&e));
                return Err(e);
            }
        };

        let link = encoder.encode(&fields);
        info!("Generated payment link for {}", fields.identifier());
        self.state = FormState::Showing(GeneratedPayment {
            fields,
            link: link.clone(),
        });
        Ok(link)
    }

    /// Hands the shown link to `renderer`. `None` while nothing is shown.
    pub fn render<R>(
        &self,
        renderer: &R,
        options: &RenderOptions,
    ) -> Option<Result<R::Output, R::Error>>
    where
        R: QrRenderer + ?Sized,
    {
        self.shown_payment().map(|payment| renderer.render(&payment.link, options))
    }
}
