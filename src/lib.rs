pub mod config;
pub mod consts;
pub mod decision;
pub mod dice;
pub mod error;
pub mod game;
pub mod scorecard;
pub mod scorer;
