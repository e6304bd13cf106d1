pub mod constants;
mod codec;
mod lattice;

pub(crate) use codec::decode_code;
pub use codec::{code_level, code_to_lattice, lattice_to_code};
pub use constants::{BASE, GEOHEX_VERSION, KEY, MAX_LEVEL, MIN_LEVEL, POW3};
pub use lattice::{LatticeCoord, cell_size, location_to_lattice, max_hsteps, normalize_lattice};
