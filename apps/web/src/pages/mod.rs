// Landing page and careers form markup.

pub mod handlers;
pub mod templates;
