use std::sync::Mutex;

use crate::{
    link::PaymentLink,
    render::{QrRenderer, RenderOptions},
};

/// Records every render call and returns the link text as the "image".
#[derive(Default)]
pub struct MockRenderer {
    rendered: Mutex<Vec<(String, RenderOptions)>>,
}

impl MockRenderer {
    pub fn new() -> Self {
        MockRenderer::default()
    }

    pub fn rendered(&self) -> Vec<(String, RenderOptions)> {
        self.rendered.lock().unwrap().clone()
    }
}

impl QrRenderer for MockRenderer {
    type Output = String;
    type Error = std::convert::Infallible;

    fn render(
        &self,
        link: &PaymentLink,
        options: &RenderOptions,
    ) -> Result<String, Self::Error> {
        self.rendered
            .lock()
            .unwrap()
            .push((link.as_str().to_string(), options.clone()));
        Ok(link.as_str().to_string())
    }
}
