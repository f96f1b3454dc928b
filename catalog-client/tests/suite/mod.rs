// Aggregates all former standalone integration tests as modules.
mod catalog_client;
mod roster_fetch;
mod support;
