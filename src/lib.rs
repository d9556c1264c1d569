pub mod api;
pub mod clock;
pub mod config;
pub mod consts;
pub mod drawing;
pub mod error;
pub mod replay;
pub mod scorer;
