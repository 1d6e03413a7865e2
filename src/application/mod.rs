// Application layer - Use cases and seams
pub mod card_builder;
pub mod card_service;
pub mod value_store;
