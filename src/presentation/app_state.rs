// Application state for HTTP handlers
use crate::application::card_service::CardService;
use crate::application::value_store::ComponentValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub card_service: CardService,
    pub value_store: Arc<dyn ComponentValueStore>,
}
