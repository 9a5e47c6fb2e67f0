/// Affine helpers for ring and view transforms.
pub mod affine;
/// Interpolation and affine remapping of scalars.
pub mod linear;
/// Clamping and wrapping of scalars.
pub mod non_linear;
