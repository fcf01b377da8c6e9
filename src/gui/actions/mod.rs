// src/gui/actions/mod.rs
//
// Button actions. Layout lives in components; the work happens here.

mod copy;
mod export;
mod reload;

pub use copy::copy;
pub use export::export;
pub use reload::reload;
