// handlers/mod.rs - Route handler organization
//
// One module per resource, one file per operation. Every handler returns
// Result<_, ApiError> so each request produces exactly one response on
// every path, including errors.

pub mod contacts;
pub mod users;
