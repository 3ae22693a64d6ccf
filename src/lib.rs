pub mod app;
pub mod export;
pub mod logging;
pub mod medialib;
pub mod tree;
pub mod ui;
