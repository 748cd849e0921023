use dioxus::prelude::*;

use slips_common::dataset::SalesData;
use slips_common::mock;

/// The receipts snapshot every view reads from.
///
/// Generated once when the app starts; nothing is written back.
#[derive(Clone, Debug, Default)]
pub struct SharedState {
    pub data: SalesData,
    /// Set when the mock data could not be generated.
    pub last_error: Option<String>,
}

impl SharedState {
    pub fn new() -> Self {
        match mock::generate() {
            Ok(data) => {
                tracing::info!("Loaded {} mock receipts", data.receipts().len());
                Self {
                    data,
                    last_error: None,
                }
            }
            Err(err) => {
                tracing::error!("Failed to generate mock receipts: {err}");
                Self {
                    data: SalesData::default(),
                    last_error: Some(err.to_string()),
                }
            }
        }
    }
}

pub fn use_shared_state() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}
