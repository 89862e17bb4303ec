pub mod component_search;

pub use component_search::{
    module_id, ComponentMatch, ComponentSearcher, ScanReport, SkippedComponent,
};
