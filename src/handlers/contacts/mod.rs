// handlers/contacts/mod.rs - Contact management handlers

pub mod create; // POST /api/contacts
pub mod delete; // DELETE /api/contacts/:id
pub mod list; // GET /api/contacts?userId=...
pub mod show; // GET /api/contacts/:id
pub mod update; // PUT /api/contacts/:id

// Re-export handler functions
pub use create::contact_create;
pub use delete::contact_delete;
pub use list::contact_list;
pub use show::contact_show;
pub use update::contact_update;
