//! Reporting surface — payout table join, delimited export of the filtered
//! tracking table, and the LaTeX insights document.

pub mod export;
pub mod latex;
pub mod payout;

pub use export::tracking_csv;
pub use latex::insights_latex;
pub use payout::{payout_table, PayoutRow};
