// Skill-job matching over the in-process catalog.
// Pure functions over caller-supplied skills; the handlers add the stored-resume variant.

pub mod catalog;
pub mod handlers;
pub mod matcher;
