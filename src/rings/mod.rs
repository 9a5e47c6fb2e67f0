pub(crate) mod clock;
pub(crate) mod driver;
pub mod params;
pub(crate) mod state;
pub(crate) mod styler;
