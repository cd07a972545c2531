pub mod advise;
pub mod simulate;
pub mod sweep;
