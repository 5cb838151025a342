//! Algorithms that search for local minima of functions along multiple dimensions.

mod nelder_mead;
mod simplex;

pub use self::nelder_mead::optimize;
pub use self::nelder_mead::NelderMead;
pub use self::nelder_mead::NelderMeadBuilder;
pub use self::nelder_mead::Step;
pub use self::simplex::Simplex;
