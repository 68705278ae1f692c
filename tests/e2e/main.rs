// End-to-end tests for the Insightcast Backend API
//
// Each test spins up the real axum server on an ephemeral port, with the two
// Google-backed repositories replaced by in-process stubs. No network access
// and no credentials are required; the static mount, middleware stack and
// JSON envelopes are exercised exactly as in production.

mod test_health;
