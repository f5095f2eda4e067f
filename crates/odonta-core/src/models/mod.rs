pub mod chart;
pub mod hygiene;
pub mod indices;
pub mod record;
