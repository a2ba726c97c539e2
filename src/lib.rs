//! Commission engine for the NotaryPro/VecinoXpress document network.
//!
//! Splits document sale prices between the POS operator (vecino), the
//! certifier (certificador), and administration, rolls up monthly
//! stakeholder summaries, and groups unpaid commission records into batch
//! settlement plans. All amounts are CLP.

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

mod impl_ext;
pub mod ext {
    pub use super::impl_ext::exports::*;
}

pub mod errors;
pub mod util;
