pub mod derivative;
pub mod error;
pub mod expr;
pub mod interval;
pub mod monomial;

mod io;
mod latex;
mod macros;


pub use derivative::{differentiate, mask_all, mask_none, mask_single};
pub use error::Error;
pub use expr::Expression;
pub use monomial::{MaybeMonomial, Monomial, Monomial1D};
