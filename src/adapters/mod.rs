/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the fixture catalog, the console reporter, the formatters and the
/// output presenters. The CLI in `main.rs` is the only inbound adapter.
pub mod outbound;
