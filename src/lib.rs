//! Terminal counter built on a reducer/store/view split.
//!
//! - [`ui::counter`]: the `Count` state, its intents and reducer
//! - [`store`]: state holder with dispatch and subscriptions
//! - [`ui::view`] and [`ui::controls`]: rendering and the button handlers
//! - [`ui::run`] / [`headless::run_headless`]: the two render loops

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod timer;
pub mod ui;
