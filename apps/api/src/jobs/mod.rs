// Job search: the request pipeline and its HTTP handlers.

pub mod handlers;
pub mod pipeline;
