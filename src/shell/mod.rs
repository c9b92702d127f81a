// Composition root for the subscriptions bounded context.
//
// Responsibilities:
// - Instantiate the concrete repository implementation.
// - Wire it into the subscription service.
// - Expose the HTTP router over the five operations.

pub mod http;
pub mod state;
