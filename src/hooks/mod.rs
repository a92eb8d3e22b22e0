pub mod use_locations;

pub use use_locations::{
    filter_by_district, settled_state, use_locations, LocationsState, UseLocationsHandle,
};
